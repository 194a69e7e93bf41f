//! Error types for status polling.

use thiserror::Error;

/// Reasons a status snapshot could not be obtained.
#[derive(Debug, Clone, Error)]
pub enum StatusError {
    /// Request timeout
    #[error("request timeout after {0}s")]
    Timeout(u64),

    /// Connection failed
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Non-success HTTP status
    #[error("HTTP error: {0}")]
    HttpError(u16),

    /// Body was not a valid status snapshot
    #[error("invalid response: {0}")]
    ParseError(String),

    /// HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),
}
