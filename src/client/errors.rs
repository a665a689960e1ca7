//! Error types for backend search requests.

use thiserror::Error;

use crate::query::QueryError;

/// Errors that can occur while fetching a result page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The filter could not be encoded as a query string.
    #[error("failed to build query: {0}")]
    Query(#[from] QueryError),
    /// The HTTP request failed before a response arrived.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The backend answered outside the success range.
    #[error("unexpected status {status}")]
    UnexpectedStatus {
        /// HTTP status code received.
        status: u16,
    },
    /// The response body could not be parsed.
    #[error("failed to parse response: {0}")]
    Parse(String),
}
