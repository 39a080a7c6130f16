//! Homepage feed extractor
//!
//! The homepage is a list of labelled section containers, each holding a
//! row of entries.

use scraper::Html;

use crate::error::{Result, ScrapeError};
use crate::parser::entry::{element_text, parse_entries};
use crate::schema::{CompiledSchema, PageSchema};
use crate::types::ResultSet;

/// Number of entries a full homepage section carries
pub const EXPECTED_PAGE_SIZE: usize = 15;

/// Parses homepage HTML with the default schema
pub fn parse_homepage(html: &str) -> Result<ResultSet> {
    let document = Html::parse_document(html);
    extract_homepage(&document, &PageSchema::default().compile()?)
}

/// Extracts every homepage section into a `ResultSet`, in page order
///
/// # Errors
/// - `NoSections` if the page has no section container (layout change,
///   or the request was blocked or redirected)
/// - `ElementNotFound` / `InvalidLink` from a malformed section or entry
pub fn extract_homepage(document: &Html, schema: &CompiledSchema) -> Result<ResultSet> {
    let mut results = ResultSet::new();

    for section in document.select(&schema.section) {
        let label = section
            .select(&schema.section_title)
            .next()
            .map(|title| element_text(&title))
            .ok_or_else(|| ScrapeError::ElementNotFound("section title".to_string()))?;

        results.insert(label.clone(), parse_entries(&section, schema)?);

        let count = results.get(&label).map_or(0, <[_]>::len);
        if count == EXPECTED_PAGE_SIZE {
            log::debug!(target: "extract_homepage", "{} scraped successfully", label);
        } else {
            log::debug!(target: "extract_homepage", "{} result(s) for {}", count, label);
        }
    }

    if results.is_empty() {
        return Err(ScrapeError::NoSections);
    }

    Ok(results)
}
