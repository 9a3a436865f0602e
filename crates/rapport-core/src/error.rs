//! Error Types

use thiserror::Error;

/// Result type alias for chat operations
pub type Result<T> = std::result::Result<T, ChatError>;

/// Chat client error types
#[derive(Error, Debug)]
pub enum ChatError {
    /// Backend returned an error or the exchange failed mid-flight
    #[error("Backend error: {0}")]
    Backend(String),

    /// Backend not reachable at all (connection refused, DNS, ...)
    #[error("Backend unreachable: {0}")]
    Unreachable(String),

    /// Reply body did not contain a parseable `response` field
    #[error("Malformed reply: {0}")]
    MalformedReply(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Other/unknown error
    #[error("{0}")]
    Other(String),
}

impl ChatError {
    /// Whether the failure happened before the backend saw the request
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ChatError::Unreachable(_))
    }
}

impl From<anyhow::Error> for ChatError {
    fn from(err: anyhow::Error) -> Self {
        ChatError::Other(err.to_string())
    }
}
