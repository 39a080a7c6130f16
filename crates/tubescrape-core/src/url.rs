//! URL helper functions
//!
//! Builds homepage, search, watch and thumbnail URLs and pulls the video
//! identifier out of watch links.

/// Homepage of the scraped site
pub const BASE_URL: &str = "https://www.youtube.com";

const THUMBNAIL_BASE: &str = "https://i.ytimg.com/vi";

/// Builds the search results URL for a query
///
/// The query is percent-encoded with spaces written as `+`.
///
/// # Example
/// ```
/// use tubescrape_core::url::{build_search_url, BASE_URL};
/// let url = build_search_url(BASE_URL, "cat videos");
/// assert_eq!(url, "https://www.youtube.com/results?search_query=cat+videos");
/// ```
pub fn build_search_url(base_url: &str, query: &str) -> String {
    format!("{}/results?search_query={}", base_url, encode_query(query))
}

/// Percent-encodes a query value, form style (space becomes `+`)
pub fn encode_query(query: &str) -> String {
    urlencoding::encode(query).replace("%20", "+")
}

/// Builds the canonical watch URL for a video identifier
///
/// # Example
/// ```
/// use tubescrape_core::url::build_watch_url;
/// assert_eq!(build_watch_url("abc123"), "https://www.youtube.com/watch?v=abc123");
/// ```
pub fn build_watch_url(identifier: &str) -> String {
    format!("{}/watch?v={}", BASE_URL, identifier)
}

/// Builds the high quality thumbnail URL for a video identifier
///
/// # Example
/// ```
/// use tubescrape_core::url::build_thumbnail_url;
/// let url = build_thumbnail_url("abc123");
/// assert_eq!(url, "https://i.ytimg.com/vi/abc123/hqdefault.jpg");
/// ```
pub fn build_thumbnail_url(identifier: &str) -> String {
    format!("{}/{}/hqdefault.jpg", THUMBNAIL_BASE, identifier)
}

/// Extracts the video identifier from a watch link
///
/// Takes the value after the first `=` (e.g. `/watch?v=<id>`), stopping at
/// the next `&` or `#`.
///
/// # Returns
/// `Some(identifier)` if the link carries a non-empty value, `None` otherwise
///
/// # Example
/// ```
/// use tubescrape_core::url::extract_identifier;
/// assert_eq!(extract_identifier("/watch?v=dQw4w9WgXcQ"), Some("dQw4w9WgXcQ".to_string()));
/// assert_eq!(extract_identifier("/channel/UC123"), None);
/// ```
pub fn extract_identifier(href: &str) -> Option<String> {
    let (_, value) = href.split_once('=')?;
    let identifier = value
        .split(['&', '#'])
        .next()
        .unwrap_or(value)
        .trim();

    if identifier.is_empty() {
        None
    } else {
        Some(identifier.to_string())
    }
}
