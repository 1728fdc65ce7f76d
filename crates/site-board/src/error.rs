//! Board error types.

use site_api::ApiError;
use site_core::enums::Column;
use site_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    /// The caller may not read task data; the board renders access-denied.
    #[error("read access to tasks denied: {message}")]
    ReadPermissionDenied { message: String },

    /// The server rejected a cross-column move; the board was rolled back.
    #[error("status update for task {task_id} failed: {source}")]
    StatusUpdateFailed { task_id: String, source: ApiError },

    /// The server rejected a deletion; the board is unchanged.
    #[error("delete of task {task_id} failed: {source}")]
    DeleteFailed { task_id: String, source: ApiError },

    /// A column page could not be fetched. Other columns are unaffected.
    #[error("fetching {column} column failed: {source}")]
    FetchFailed { column: Column, source: ApiError },

    /// The dragged task is not in the column it was dragged from.
    #[error("task {task_id} not found in {column} column")]
    TaskNotFound { task_id: String, column: Column },

    /// A fetch resolved after its page or filter was superseded and was discarded.
    #[error("response for {column} page {page} arrived after it was superseded")]
    Stale { column: Column, page: u32 },

    #[error(transparent)]
    Core(#[from] CoreError),
}
