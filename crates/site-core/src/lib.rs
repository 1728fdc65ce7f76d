//! # site-core
//!
//! Core types shared by every siteline crate:
//! - Task, project, and push-event entities
//! - Status, priority, and column enums with the status ↔ column mapping
//! - Filter and pagination types mirrored from the task API
//! - Query keys identifying cached views that push events invalidate
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod pagination;
pub mod query;
