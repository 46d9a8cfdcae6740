//! Errors surfaced by a lookup

use thiserror::Error;

/// Everything that can go wrong between the command line and the rendered entry.
///
/// Each kind is terminal for the invocation: there are no retries.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("\"{0}\" was not found in Den Danske Ordbog")]
    NotFound(String),

    #[error("could not reach the dictionary service: {0}")]
    Network(String),

    #[error("could not understand the dictionary response: {0}")]
    Parse(String),
}

impl LookupError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            LookupError::NotFound(_) => 1,
            LookupError::Network(_) => 3,
            LookupError::Parse(_) => 4,
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LookupError::Network(format!("request timed out ({})", err))
        } else {
            LookupError::Network(err.to_string())
        }
    }
}
