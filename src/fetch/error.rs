//! Error types for fetching bang lists.

use thiserror::Error;

use crate::bangs::FormatError;

/// Error type for HTTP transport operations.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed (DNS, refused, reset, body read).
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for a single bang list fetch.
///
/// Every variant aborts the redirect; there is no local recovery.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("Failed to reach bangs source: {0}")]
    Transport(#[source] HttpError),

    /// The source answered with a non-success status.
    #[error("Bangs source returned HTTP {status}")]
    Status {
        /// Status code received.
        status: http::StatusCode,
    },

    /// The body is not a list of bangs.
    #[error("Invalid bangs config format: {0}")]
    Format(#[from] FormatError),
}

impl FetchError {
    /// Returns `true` for transport and status failures.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }
}

impl From<HttpError> for FetchError {
    fn from(error: HttpError) -> Self {
        Self::Transport(error)
    }
}
