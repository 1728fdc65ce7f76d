//! Cross-cutting error types for siteline.
//!
//! Transport and board errors live in their own crates (`ApiError`,
//! `BoardError`, `LiveError`). This module only covers failures raised
//! while constructing or validating core values.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (unknown enum value, bad date range).
    #[error("Validation error: {0}")]
    Validation(String),
}
