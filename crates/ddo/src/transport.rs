//! HTTP transport seam
//!
//! The fetcher only ever issues a GET with query parameters and looks at the
//! status code and body, so that is all a transport has to provide. The real
//! transport owns a reqwest client for the lifetime of one invocation.

use reqwest::blocking::Client as HttpClient;
use tracing::debug;

use crate::config::Config;
use crate::error::LookupError;

/// Status code and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    #[cfg(test)]
    pub(crate) fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can perform a GET request
pub trait Transport {
    /// Perform a single GET. Only connection-level failures are errors;
    /// any HTTP status comes back as a `Response`.
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Response, LookupError>;
}

/// Blocking reqwest transport
pub struct HttpTransport {
    client: HttpClient,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self, LookupError> {
        let client = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Response, LookupError> {
        debug!(url, ?query, "GET");

        let response = self.client.get(url).query(query).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        debug!(status, bytes = body.len(), "response received");
        Ok(Response { status, body })
    }
}

#[cfg(test)]
pub(crate) mod stub {
    use super::*;
    use std::cell::RefCell;

    /// Canned transport that records every request it sees
    pub struct StubTransport {
        outcome: Result<Response, String>,
        pub requests: RefCell<Vec<(String, Vec<(String, String)>)>>,
    }

    impl StubTransport {
        pub fn responding(status: u16, body: &str) -> Self {
            Self {
                outcome: Ok(Response::new(status, body)),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                outcome: Err(message.to_string()),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    impl Transport for StubTransport {
        fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Response, LookupError> {
            self.requests.borrow_mut().push((
                url.to_string(),
                query
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ));
            self.outcome.clone().map_err(LookupError::Network)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_success_range() {
        assert!(Response::new(200, "").is_success());
        assert!(Response::new(204, "").is_success());
        assert!(!Response::new(301, "").is_success());
        assert!(!Response::new(404, "").is_success());
        assert!(!Response::new(500, "").is_success());
    }

    #[test]
    fn test_http_transport_builds_from_config() {
        assert!(HttpTransport::new(&Config::default()).is_ok());
    }
}
