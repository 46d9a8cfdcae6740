//! Fetcher: one outbound request per call, no retries

use tracing::debug;

use crate::config::Config;
use crate::error::LookupError;
use crate::transport::{Response, Transport};

/// Client for the two dictionary endpoints
pub struct Client<T> {
    transport: T,
    config: Config,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the raw entry page for `word`
    pub fn page(&self, word: &str) -> Result<String, LookupError> {
        debug!(word, "fetching entry page");
        let response = self
            .transport
            .get(&self.config.query_url, &[("q", word)])?;
        into_body(response, word)
    }

    /// Fetch the raw live-search result for `partial`
    pub fn livesearch(&self, partial: &str) -> Result<String, LookupError> {
        debug!(partial, "querying live-search");
        let size = self.config.suggestion_limit.to_string();
        let response = self.transport.get(
            &self.config.livesearch_url,
            &[
                ("text", partial),
                ("format", "json"),
                ("app", "ios"),
                ("size", size.as_str()),
            ],
        )?;
        into_body(response, partial)
    }
}

fn into_body(response: Response, word: &str) -> Result<String, LookupError> {
    if response.is_success() {
        return Ok(response.body);
    }

    match response.status {
        404 => Err(LookupError::NotFound(word.to_string())),
        status => Err(LookupError::Network(format!(
            "HTTP {} from dictionary service",
            status
        ))),
    }
}
