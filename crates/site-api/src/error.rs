//! API error types.

use thiserror::Error;

/// Errors returned by [`crate::ApiClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The caller lacks read access to the requested resource.
    #[error("read permission denied: {message}")]
    ReadPermissionDenied { message: String },

    /// API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server message, or the raw body when no message field is present.
        message: String,
    },

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// True for the permission failure that blocks the whole board.
    #[must_use]
    pub const fn is_read_denied(&self) -> bool {
        matches!(self, Self::ReadPermissionDenied { .. })
    }
}
