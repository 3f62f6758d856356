//! Error types

use thiserror::Error;

/// Errors that can occur while building, sending, or decoding a request
#[derive(Debug, Error)]
pub enum Error {
    /// Request body could not be serialized to JSON
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),
    /// Target URL could not be parsed into a valid request
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),
    /// Transport failure (connect, DNS, TLS)
    #[error("Request failed: {0}")]
    Network(#[source] reqwest::Error),
    /// Request timeout
    #[error("Request timeout")]
    Timeout,
    /// Response body could not be fully read
    #[error("Failed to read response body: {0}")]
    Io(#[source] reqwest::Error),
    /// Stored response bytes could not be decoded into the requested shape
    #[error("Failed to decode response body: {0}")]
    Deserialization(#[source] serde_json::Error),
    /// Method name outside the five supported verbs
    #[error("Method {0} is not supported")]
    UnsupportedMethod(String),
    /// Retry attempt count of zero
    #[error("Attempt count must be at least 1")]
    InvalidAttemptCount,
    /// Client build error
    #[error("Client build error: {0}")]
    ClientBuild(#[source] reqwest::Error),
    /// Proxy error
    #[error("Proxy error: {0}")]
    Proxy(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else {
            Error::Network(err)
        }
    }
}
