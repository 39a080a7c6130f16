//! Entry conversion shared by the homepage and search extractors
//!
//! Turns one entry container into a `Record`. A missing title, watch link
//! or byline fails the whole extraction; the metadata list is optional.

use scraper::ElementRef;

use crate::error::{Result, ScrapeError};
use crate::schema::CompiledSchema;
use crate::types::Record;
use crate::url::extract_identifier;

/// Converts every entry container below `container`, in document order
///
/// Duplicates are kept; `ResultSet::insert` removes them.
pub fn parse_entries(container: &ElementRef, schema: &CompiledSchema) -> Result<Vec<Record>> {
    container
        .select(&schema.entry)
        .map(|entry| parse_entry(&entry, schema))
        .collect()
}

/// Converts a single entry container into a `Record`
///
/// # Errors
/// - `ElementNotFound` if the title heading, its link, the link `href`,
///   the byline or the byline link is missing
/// - `InvalidLink` if the watch link carries no identifier
pub fn parse_entry(entry: &ElementRef, schema: &CompiledSchema) -> Result<Record> {
    let title = entry
        .select(&schema.title)
        .next()
        .ok_or_else(|| ScrapeError::ElementNotFound("entry title".to_string()))?;
    let link = title
        .select(&schema.title_link)
        .next()
        .ok_or_else(|| ScrapeError::ElementNotFound("entry title link".to_string()))?;
    let href = link
        .value()
        .attr("href")
        .ok_or_else(|| ScrapeError::ElementNotFound("entry title link href".to_string()))?;
    let identifier =
        extract_identifier(href).ok_or_else(|| ScrapeError::InvalidLink(href.to_string()))?;

    let channel = entry
        .select(&schema.byline)
        .next()
        .ok_or_else(|| ScrapeError::ElementNotFound("entry byline".to_string()))?
        .select(&schema.byline_link)
        .next()
        .ok_or_else(|| ScrapeError::ElementNotFound("entry byline link".to_string()))?;

    let info = entry
        .select(&schema.meta_info)
        .next()
        .map(|list| {
            list.select(&schema.meta_item)
                .map(|item| element_text(&item))
                .collect::<Vec<_>>()
                .join("; ")
        })
        .unwrap_or_default();

    let record = Record::new(element_text(&link), identifier, element_text(&channel), info);
    log::trace!(target: "Record::new", "Created entity: {:?}", record);

    Ok(record)
}

/// Full text content of an element, whitespace-trimmed
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::PageSchema;
    use scraper::{Html, Selector};

    fn first_entry(html: &str) -> Result<Record> {
        let document = Html::parse_fragment(html);
        let schema = PageSchema::default().compile().unwrap();
        let root = Selector::parse("div.yt-lockup-content").unwrap();
        let entry = document.select(&root).next().expect("fixture has an entry");
        parse_entry(&entry, &schema)
    }

    #[test]
    fn test_parse_entry_full() {
        let record = first_entry(
            r#"
            <div class="yt-lockup-content">
                <h3 class="yt-lockup-title"><a href="/watch?v=abc123" title="x">Never Gonna Give You Up</a></h3>
                <div class="yt-lockup-byline"><a href="/user/rick">Rick Astley</a></div>
                <div class="yt-lockup-meta"><ul class="yt-lockup-meta-info"><li>1 year ago</li><li>900M views</li></ul></div>
            </div>
            "#,
        )
        .unwrap();

        assert_eq!(record.title(), "Never Gonna Give You Up");
        assert_eq!(record.identifier(), "abc123");
        assert_eq!(record.channel(), "Rick Astley");
        assert_eq!(record.info(), "1 year ago; 900M views");
        assert_eq!(record.thumbnail_url(), "https://i.ytimg.com/vi/abc123/hqdefault.jpg");
        assert_eq!(record.fanart_url(), None);
    }

    #[test]
    fn test_parse_entry_without_meta_info() {
        let record = first_entry(
            r#"
            <div class="yt-lockup-content">
                <h3 class="yt-lockup-title"><a href="/watch?v=xyz789">Live now</a></h3>
                <div class="yt-lockup-byline"><a href="/channel/UC1">Streamer</a></div>
            </div>
            "#,
        )
        .unwrap();

        assert_eq!(record.identifier(), "xyz789");
        assert_eq!(record.info(), "");
    }

    #[test]
    fn test_parse_entry_missing_title() {
        let result = first_entry(
            r#"
            <div class="yt-lockup-content">
                <div class="yt-lockup-byline"><a href="/channel/UC1">Streamer</a></div>
            </div>
            "#,
        );
        assert!(matches!(result, Err(ScrapeError::ElementNotFound(_))));
    }

    #[test]
    fn test_parse_entry_missing_byline() {
        let result = first_entry(
            r#"
            <div class="yt-lockup-content">
                <h3 class="yt-lockup-title"><a href="/watch?v=xyz789">Orphan</a></h3>
            </div>
            "#,
        );
        match result {
            Err(ScrapeError::ElementNotFound(what)) => assert_eq!(what, "entry byline"),
            _ => panic!("Expected ElementNotFound error"),
        }
    }

    #[test]
    fn test_parse_entry_playlist_link_is_invalid() {
        let result = first_entry(
            r#"
            <div class="yt-lockup-content">
                <h3 class="yt-lockup-title"><a href="/playlist">Mix</a></h3>
                <div class="yt-lockup-byline"><a href="/channel/UC1">Someone</a></div>
            </div>
            "#,
        );
        assert!(matches!(result, Err(ScrapeError::InvalidLink(href)) if href == "/playlist"));
    }
}
