//! User-Agent rotation
//!
//! Each outbound request gets a User-Agent drawn from a fixed pool of
//! browser strings to get past trivial bot blocking.

use rand::seq::SliceRandom;

use crate::error::{Result, ScrapeError};
use crate::types::truncate_with_ellipsis;

const LOG_PREVIEW_LEN: usize = 64;

const DEFAULT_USER_AGENTS: [&str; 4] = [
    "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/59.0.3071.109 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/42.0.2311.135 Safari/537.36 Edge/12.10240",
    "Mozilla/5.0 (Windows NT 10.0; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/50.0.2661.87 Safari/537.36 OPR/37.0.2178.31",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/42.0.2311.135 Safari/537.36 Edge/12.10240",
];

/// Fixed pool of User-Agent header values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgentPool {
    agents: Vec<String>,
}

impl UserAgentPool {
    pub fn new<I, S>(agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            agents: agents.into_iter().map(Into::into).collect(),
        }
    }

    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    /// Returns a User-Agent from the pool
    ///
    /// A single-entry pool always yields that entry; larger pools yield a
    /// uniformly random entry on every call.
    ///
    /// # Errors
    /// `EmptyUserAgentPool` if the pool has no entries
    pub fn get_random(&self) -> Result<&str> {
        match self.agents.as_slice() {
            [] => Err(ScrapeError::EmptyUserAgentPool),
            [only] => Ok(only.as_str()),
            agents => {
                let selected = agents
                    .choose(&mut rand::thread_rng())
                    .ok_or(ScrapeError::EmptyUserAgentPool)?;
                log::debug!(
                    target: "UserAgent::get_random",
                    "\"{}\"",
                    truncate_with_ellipsis(selected, LOG_PREVIEW_LEN)
                );
                Ok(selected.as_str())
            }
        }
    }
}

impl Default for UserAgentPool {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENTS)
    }
}
