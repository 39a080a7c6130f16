//! HTML extractors for listing pages
//!
//! Contains modules for the homepage feed, the search results page and
//! the entry conversion they share.

pub mod entry;
pub mod homepage;
pub mod search;

pub use entry::{parse_entries, parse_entry};
pub use homepage::{extract_homepage, parse_homepage, EXPECTED_PAGE_SIZE};
pub use search::{extract_query, parse_query_results};
