//! Search results extractor
//!
//! All results live in one ordered container and form a single section.

use scraper::Html;

use crate::error::{Result, ScrapeError};
use crate::parser::entry::parse_entries;
use crate::schema::{CompiledSchema, PageSchema};
use crate::types::ResultSet;

/// Parses search results HTML with the default schema
pub fn parse_query_results(html: &str) -> Result<ResultSet> {
    let document = Html::parse_document(html);
    extract_query(&document, &PageSchema::default().compile()?)
}

/// Extracts the search results into a single "Search Results" section
///
/// # Errors
/// - `ElementNotFound` if the results container is missing
/// - `ElementNotFound` / `InvalidLink` from a malformed entry
pub fn extract_query(document: &Html, schema: &CompiledSchema) -> Result<ResultSet> {
    let container = document
        .select(&schema.results)
        .next()
        .ok_or_else(|| ScrapeError::ElementNotFound("search results container".to_string()))?;

    let mut results = ResultSet::new();
    results.insert(ResultSet::SEARCH_RESULTS, parse_entries(&container, schema)?);

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_PAGE: &str = r#"
    <html>
    <body>
    <div id="results">
        <ol class="section-list">
            <li>
                <ol class="item-section">
                    <li><div class="yt-lockup-content">
                        <h3 class="yt-lockup-title"><a href="/watch?v=cat1">Funny Cats Compilation</a><span> - Duration: 10:01.</span></h3>
                        <div class="yt-lockup-byline"><a href="/user/catlover">Cat Lover</a></div>
                        <div class="yt-lockup-meta"><ul class="yt-lockup-meta-info"><li>2 years ago</li><li>5,123,456 views</li></ul></div>
                    </div></li>
                    <li><div class="yt-lockup-content">
                        <h3 class="yt-lockup-title"><a href="/watch?v=cat2">Cats vs Cucumbers</a></h3>
                        <div class="yt-lockup-byline"><a href="/channel/UC2">Daily Pets</a></div>
                    </div></li>
                    <li><div class="yt-lockup-content">
                        <h3 class="yt-lockup-title"><a href="/watch?v=cat1">Funny Cats Compilation (reupload)</a></h3>
                        <div class="yt-lockup-byline"><a href="/user/catlover">Cat Lover</a></div>
                    </div></li>
                </ol>
            </li>
        </ol>
    </div>
    </body>
    </html>
    "#;

    #[test]
    fn test_parse_query_results_single_section() {
        let results = parse_query_results(RESULTS_PAGE).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results.sections()[0].label, "Search Results");
    }

    #[test]
    fn test_parse_query_results_records() {
        let results = parse_query_results(RESULTS_PAGE).unwrap();
        let records = results.get(ResultSet::SEARCH_RESULTS).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title(), "Funny Cats Compilation");
        assert_eq!(records[0].channel(), "Cat Lover");
        assert_eq!(records[0].info(), "2 years ago; 5,123,456 views");
        assert_eq!(records[1].identifier(), "cat2");
        assert_eq!(records[1].info(), "");
    }

    #[test]
    fn test_parse_query_results_empty_container() {
        let html = r#"<html><body><ol class="item-section"></ol></body></html>"#;
        let results = parse_query_results(html).unwrap();
        assert_eq!(results.len(), 1);
        assert!(results.get(ResultSet::SEARCH_RESULTS).unwrap().is_empty());
    }

    #[test]
    fn test_parse_query_results_missing_container() {
        let html = "<html><body><p>No results</p></body></html>";
        match parse_query_results(html) {
            Err(ScrapeError::ElementNotFound(what)) => assert!(what.contains("search results")),
            _ => panic!("Expected ElementNotFound error"),
        }
    }
}
