//! Page markup schema
//!
//! Every CSS selector the extractor relies on lives here, so a markup
//! change on the site means editing `PageSchema::default` and nothing else.

use scraper::Selector;

use crate::error::{Result, ScrapeError};

/// Selector strings describing listing page markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSchema {
    /// Homepage section container
    pub section: String,
    /// Section label, searched inside `section`
    pub section_title: String,
    /// Search results container
    pub results: String,
    /// Entry container, one per video
    pub entry: String,
    /// Title heading inside an entry
    pub title: String,
    /// Watch link inside the title heading
    pub title_link: String,
    /// Byline container inside an entry
    pub byline: String,
    /// Channel link inside the byline
    pub byline_link: String,
    /// Optional metadata list inside an entry
    pub meta_info: String,
    /// Metadata item inside the list
    pub meta_item: String,
}

impl Default for PageSchema {
    fn default() -> Self {
        Self {
            section: "div.feed-item-dismissable".to_string(),
            section_title: "span.branded-page-module-title-text".to_string(),
            results: "ol.item-section".to_string(),
            entry: "div.yt-lockup-content".to_string(),
            title: "h3.yt-lockup-title".to_string(),
            title_link: "a".to_string(),
            byline: "div.yt-lockup-byline".to_string(),
            byline_link: "a".to_string(),
            meta_info: "ul.yt-lockup-meta-info".to_string(),
            meta_item: "li".to_string(),
        }
    }
}

impl PageSchema {
    /// Parses every selector once
    ///
    /// # Errors
    /// `ParseError` naming the first selector that does not parse
    pub fn compile(&self) -> Result<CompiledSchema> {
        Ok(CompiledSchema {
            section: parse_selector(&self.section)?,
            section_title: parse_selector(&self.section_title)?,
            results: parse_selector(&self.results)?,
            entry: parse_selector(&self.entry)?,
            title: parse_selector(&self.title)?,
            title_link: parse_selector(&self.title_link)?,
            byline: parse_selector(&self.byline)?,
            byline_link: parse_selector(&self.byline_link)?,
            meta_info: parse_selector(&self.meta_info)?,
            meta_item: parse_selector(&self.meta_item)?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| ScrapeError::ParseError(format!("Invalid selector {:?}: {:?}", selector, e)))
}

/// `PageSchema` with every selector parsed
#[derive(Debug, Clone)]
pub struct CompiledSchema {
    pub section: Selector,
    pub section_title: Selector,
    pub results: Selector,
    pub entry: Selector,
    pub title: Selector,
    pub title_link: Selector,
    pub byline: Selector,
    pub byline_link: Selector,
    pub meta_info: Selector,
    pub meta_item: Selector,
}
