//! Errors returned by `TodoClient` parse and build methods.
//!
//! 404 gets its own variant since callers routinely branch on "that to-do
//! does not exist". Any other unexpected status lands in `HttpError` with the
//! raw body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404. Holds the server's `detail` message when the
    /// body carried one.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other status than the one the operation expects.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}
