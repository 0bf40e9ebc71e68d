//! Error types for revcat-fetch.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

/// A failure that ends a whole fetch-and-combine call.
///
/// Every variant names the locator that produced it. The coordinator returns
/// the first one it observes and discards the rest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("failed to create request for {url}: {cause}")]
    Request { url: String, cause: String },

    #[error("failed to fetch content from {url}: {cause}")]
    Transport { url: String, cause: String },

    #[error("non-success status code {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("failed to read content from {url}: {cause}")]
    Body { url: String, cause: String },

    #[error("fetch tasks ended early: {received} of {expected} bodies received")]
    Incomplete { expected: usize, received: usize },
}

impl FetchError {
    /// The locator that produced this failure, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            FetchError::Request { url, .. }
            | FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Body { url, .. } => Some(url),
            FetchError::Incomplete { .. } => None,
        }
    }
}
