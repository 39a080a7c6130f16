//! Main scraper API
//!
//! Combines the HTTP client, the page schema and the extractors into the
//! two scrape modes: homepage feed and search query.

use crate::client::{ClientConfig, ScrapeClient};
use crate::error::{Result, ScrapeError};
use crate::parser::{extract_homepage, extract_query};
use crate::schema::{CompiledSchema, PageSchema};
use crate::types::ResultSet;
use crate::url::build_search_url;

/// Main scraper API
pub struct TubeScraper {
    client: ScrapeClient,
    schema: CompiledSchema,
}

impl TubeScraper {
    /// Create a new scraper with default configuration and markup schema
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default(), PageSchema::default())
    }

    /// Create a new scraper with custom client configuration and schema
    ///
    /// # Errors
    /// - `HttpError` if HTTP client initialization fails
    /// - `ParseError` if a schema selector is invalid
    pub fn with_config(config: ClientConfig, schema: PageSchema) -> Result<Self> {
        Ok(Self {
            client: ScrapeClient::with_config(config)?,
            schema: schema.compile()?,
        })
    }

    /// Scrape every section of the homepage feed
    ///
    /// # Errors
    /// - `HttpError` if the request fails
    /// - `NoSections` if the page carries no feed sections
    /// - `ElementNotFound` / `InvalidLink` on malformed markup
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> tubescrape_core::Result<()> {
    /// use tubescrape_core::TubeScraper;
    /// let scraper = TubeScraper::new()?;
    /// let results = scraper.scrape_homepage().await?;
    /// for section in results.sections() {
    ///     println!("{}: {} videos", section.label, section.records.len());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn scrape_homepage(&self) -> Result<ResultSet> {
        let url = self.client.base_url().to_string();
        log::info!(target: "scrape_homepage", "Scraping <{}> for video links ...", url);

        let document = self.client.fetch(&url).await?;
        extract_homepage(&document, &self.schema)
    }

    /// Scrape the search results page for `query`
    ///
    /// # Errors
    /// - `InvalidQuery` if query is empty or whitespace only
    /// - `HttpError` if the request fails
    /// - `ElementNotFound` / `InvalidLink` on malformed markup
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> tubescrape_core::Result<()> {
    /// use tubescrape_core::TubeScraper;
    /// let scraper = TubeScraper::new()?;
    /// let results = scraper.scrape_query("cat videos").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn scrape_query(&self, query: &str) -> Result<ResultSet> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(ScrapeError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = build_search_url(self.client.base_url(), trimmed);
        log::info!(target: "scrape_query_results", "Scraping <{}> for video links ...", url);

        let document = self.client.fetch(&url).await?;
        extract_query(&document, &self.schema)
    }
}
