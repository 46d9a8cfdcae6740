//! Runtime configuration
//!
//! Built from defaults and overridden by command-line flags. Nothing is read
//! from disk.

use std::time::Duration;

/// Entry lookup endpoint (HTML fragment)
pub const QUERY_URL: &str = "https://ws.dsl.dk/ddo/query";

/// Live-search endpoint (JSON array of words)
pub const LIVESEARCH_URL: &str = "https://ws.dsl.dk/ddo/livesearch";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SUGGESTION_LIMIT: usize = 30;

/// ddo configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Full-entry lookup URL
    pub query_url: String,

    /// Autocomplete URL
    pub livesearch_url: String,

    /// Per-request timeout
    pub timeout: Duration,

    /// Maximum number of completion candidates requested and printed
    pub suggestion_limit: usize,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query_url: QUERY_URL.to_string(),
            livesearch_url: LIVESEARCH_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            user_agent: format!("ddo/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Override the request timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Override the number of completion candidates
    #[cfg(test)]
    pub(crate) fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }
}
