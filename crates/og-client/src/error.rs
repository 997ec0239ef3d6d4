//! Error types for the og-client crate.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to an OpenGrok server.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No server URL was configured for the query.
    #[error("no OpenGrok server URL configured")]
    MissingServer,

    /// The server URL could not be parsed.
    #[error("invalid server URL '{url}': {source}")]
    InvalidServerUrl {
        /// The offending URL.
        url: String,
        /// Underlying parse error.
        source: url::ParseError,
    },

    /// The request failed before a response was received.
    #[error("request to {url} failed: {source}")]
    Http {
        /// Request URL.
        url: String,
        /// Underlying transport error.
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("server returned {status} for {url}")]
    Status {
        /// HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
    },

    /// The response body was not valid JSON for the expected shape.
    #[error("invalid response from {url}: {source}")]
    Decode {
        /// Request URL.
        url: String,
        /// Underlying decode error.
        source: reqwest::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}
