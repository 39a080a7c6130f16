//! Error types for the listing scraper
//!
//! Every failure of a scrape run maps to one `ScrapeError` variant. None of
//! them are recoverable inside the library; the CLI logs the message and
//! exits with a non-zero status.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all scraper operations
///
/// Implements Display for human-readable messages and Serialize
/// (as the display string) for consumers that report errors as JSON.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// HTTP request failed, including non-2xx responses
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to parse HTML content or a schema selector
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Expected HTML element was not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Watch link did not carry a usable video identifier
    #[error("Invalid watch link: {0}")]
    InvalidLink(String),

    /// Homepage contained no section containers
    #[error("No results found")]
    NoSections,

    /// User-Agent pool has no entries
    #[error("Empty user agent list")]
    EmptyUserAgentPool,

    /// Search query is empty or unusable
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl Serialize for ScrapeError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;
