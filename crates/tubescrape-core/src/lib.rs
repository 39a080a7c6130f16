//! Video Listing Scraper Core Library
//!
//! Scrapes the homepage feed or a search results page of a video-sharing
//! site and turns the listings into structured records.
//!
//! # Overview
//!
//! This crate provides:
//! - An HTTP fetcher that rotates User-Agent headers
//! - A page schema isolating every markup selector in one place
//! - Extractors for homepage sections and search results, deduplicated by
//!   video identifier
//! - A terminal report printer and a leveled console logger
//!
//! # Example
//!
//! ```no_run
//! use tubescrape_core::{print_report, Result, TubeScraper, DEFAULT_DISPLAY_LIMIT};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let scraper = TubeScraper::new()?;
//!
//!     let results = scraper.scrape_query("cat videos").await?;
//!     for record in results.get("Search Results").unwrap_or_default() {
//!         println!("{} by {}: {}", record.title(), record.channel(), record.thumbnail_url());
//!     }
//!
//!     print_report(&results, DEFAULT_DISPLAY_LIMIT).ok();
//!     Ok(())
//! }
//! ```

mod client;
mod error;
pub mod logger;
pub mod parser;
pub mod report;
mod schema;
mod scraper;
mod types;
pub mod url;
mod user_agent;

// Re-export client types
pub use client::{ClientConfig, ScrapeClient};

// Re-export error types
pub use error::{Result, ScrapeError};

// Re-export logger entry points
pub use logger::{fatal, init_logger, LogConfig};

// Re-export parser functions
pub use parser::{extract_homepage, extract_query, parse_homepage, parse_query_results};

// Re-export report printer
pub use report::{display_limit, print_report, write_report, DEFAULT_DISPLAY_LIMIT};

// Re-export markup schema
pub use schema::{CompiledSchema, PageSchema};

// Re-export main scraper API
pub use scraper::TubeScraper;

// Re-export data types
pub use types::{dedup_records, Record, ResultSet, Section};

// Re-export User-Agent rotation
pub use user_agent::UserAgentPool;

// Re-export URL helper functions for convenience
pub use url::{build_search_url, build_thumbnail_url, build_watch_url, extract_identifier};
