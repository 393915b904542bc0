use std::fmt;

use async_trait::async_trait;

use super::types::Book;

/// Errors that can occur while fetching the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// HTTP client could not be built (bad TLS backend, bad timeout). Not retryable.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// Service returned a non-success status.
    Api { status: u16, message: String },
    /// Body was not a JSON array of book records.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Config(msg) => write!(f, "config error: {msg}"),
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } if message.is_empty() => {
                write!(f, "API error (HTTP {status})")
            }
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Where the catalog comes from.
///
/// One call per view mount; the result becomes the immutable snapshot for that mount.
#[async_trait]
pub trait BookSource: Send + Sync {
    /// Returns the name of the source, for logs.
    fn name(&self) -> &str;

    /// Fetches the full, ordered book collection.
    async fn fetch_books(&self) -> Result<Vec<Book>, FetchError>;
}
