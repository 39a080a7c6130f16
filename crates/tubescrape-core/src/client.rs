//! HTTP page fetcher
//!
//! Issues one GET per page with a User-Agent drawn from the pool and hands
//! the body to the HTML parser. Failures are returned, never retried.

use std::time::Duration;

use scraper::Html;

use crate::error::{Result, ScrapeError};
use crate::url::BASE_URL;
use crate::user_agent::UserAgentPool;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site homepage; search URLs are built on top of it
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// User-Agent values to rotate through
    pub user_agents: UserAgentPool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: 30,
            user_agents: UserAgentPool::default(),
        }
    }
}

/// HTTP client wrapper that decorates each request with a random User-Agent
pub struct ScrapeClient {
    client: reqwest::Client,
    user_agents: UserAgentPool,
    base_url: String,
}

impl ScrapeClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ScrapeError::HttpError)?;

        Ok(Self {
            client,
            user_agents: config.user_agents,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Site homepage this client scrapes
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a page and parse it into a navigable document
    ///
    /// # Errors
    /// - `EmptyUserAgentPool` - no User-Agent to send
    /// - `HttpError` - connection, timeout or non-2xx status
    pub async fn fetch(&self, url: &str) -> Result<Html> {
        let html = self.fetch_text(url).await?;
        Ok(Html::parse_document(&html))
    }

    /// Fetch a page body as text
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let user_agent = self.user_agents.get_random()?;

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, user_agent)
            .send()
            .await
            .map_err(ScrapeError::HttpError)?
            .error_for_status()
            .map_err(ScrapeError::HttpError)?;

        log::trace!(target: "ScrapeClient::fetch", "{} -> {}", url, response.status());

        response.text().await.map_err(ScrapeError::HttpError)
    }
}
