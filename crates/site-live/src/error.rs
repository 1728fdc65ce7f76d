//! Live update error types.

use site_api::ApiError;
use site_core::query::QueryKey;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LiveError {
    /// `connect` was called before both user id and role were known.
    #[error("push channel needs both a user id and a role")]
    IdentityIncomplete,

    /// The channel request could not be built.
    #[error("could not open push channel: {0}")]
    Connect(String),

    /// The channel failed after opening. No reconnect is attempted.
    #[error("push channel error: {0}")]
    Stream(String),

    /// A cached view could not be refetched.
    #[error("refetching {key} failed: {source}")]
    Refetch { key: QueryKey, source: ApiError },
}
