//! Core data types for the listing scraper
//!
//! Contains the scraped `Record` and the section-ordered `ResultSet`.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::url::{build_thumbnail_url, build_watch_url};

const DISPLAY_TITLE_WIDTH: usize = 24;

/// One scraped video listing
///
/// Two records are equal when their identifiers match; title, channel and
/// info are ignored. Fields are read-only once constructed.
#[derive(Clone, Serialize, Deserialize)]
pub struct Record {
    title: String,
    identifier: String,
    channel: String,
    info: String,
    thumbnail_url: String,
    fanart_url: Option<String>,
}

impl Record {
    /// Creates a record, deriving the thumbnail URL from `identifier`
    pub fn new(
        title: impl Into<String>,
        identifier: impl Into<String>,
        channel: impl Into<String>,
        info: impl Into<String>,
    ) -> Self {
        let identifier = identifier.into();
        Self {
            title: title.into(),
            thumbnail_url: build_thumbnail_url(&identifier),
            identifier,
            channel: channel.into(),
            info: info.into(),
            fanart_url: None,
        }
    }

    /// Display title of the entry
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Opaque video identifier (e.g., "dQw4w9WgXcQ")
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Channel byline text
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Metadata items (views, upload age) joined with "; "
    pub fn info(&self) -> &str {
        &self.info
    }

    /// Thumbnail URL derived from the identifier
    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }

    /// Always `None`; the page carries no fanart
    pub fn fanart_url(&self) -> Option<&str> {
        self.fanart_url.as_deref()
    }

    /// Canonical watch URL for this record
    pub fn watch_url(&self) -> String {
        build_watch_url(&self.identifier)
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("title", &self.title)
            .field("identifier", &self.identifier)
            .field("channel", &self.channel)
            .field("info", &self.info)
            .field("thumbnail_url", &self.thumbnail_url)
            .field("fanart_url", &self.fanart_url)
            .finish()
    }
}

/// One-line report form: `"<title padded to 24>: <watch url>"`
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<width$}: <{}>",
            truncate_with_ellipsis(&self.title, DISPLAY_TITLE_WIDTH),
            self.watch_url(),
            width = DISPLAY_TITLE_WIDTH
        )
    }
}

/// Truncates `text` to `max` characters, replacing the tail with "..."
pub(crate) fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

/// Removes records whose identifier was already seen, keeping first-seen order
pub fn dedup_records(records: impl IntoIterator<Item = Record>) -> Vec<Record> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.identifier.clone()))
        .collect()
}

/// A labelled group of records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub label: String,
    pub records: Vec<Record>,
}

/// Ordered mapping from section label to deduplicated records
///
/// Sections keep insertion (page scan) order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    sections: Vec<Section>,
}

impl ResultSet {
    /// Label used for the single section of a query scrape
    pub const SEARCH_RESULTS: &'static str = "Search Results";

    pub fn new() -> Self {
        Self::default()
    }

    /// Stores deduplicated `records` under `label`
    ///
    /// An existing section with the same label keeps its position and has
    /// its records replaced.
    pub fn insert(&mut self, label: impl Into<String>, records: Vec<Record>) {
        let label = label.into();
        let records = dedup_records(records);

        match self.sections.iter_mut().find(|s| s.label == label) {
            Some(section) => section.records = records,
            None => self.sections.push(Section { label, records }),
        }
    }

    /// Records stored under `label`
    pub fn get(&self, label: &str) -> Option<&[Record]> {
        self.sections
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.records.as_slice())
    }

    /// Sections in insertion order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
