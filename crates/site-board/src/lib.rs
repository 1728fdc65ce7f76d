//! # site-board
//!
//! Client-side state for the task board: three status columns kept in step
//! with the server.
//!
//! - [`BoardStore`] owns the columns, their pagination cursors, and the
//!   shared filter. Every mutation goes through it.
//! - Cross-column drops are applied optimistically and rolled back if the
//!   server rejects the status change.
//! - Deletes wait for the server before touching local state.
//! - Responses for a superseded page or filter are discarded.
//!
//! The remote side is abstracted as [`TaskBackend`]; toasts go to a
//! [`Notifier`].

mod backend;
mod columns;
mod error;
mod notify;
mod snapshot;
mod store;

pub use backend::TaskBackend;
pub use columns::ColumnLists;
pub use error::BoardError;
pub use notify::{Notifier, Toast, ToastLevel, TracingNotifier};
pub use snapshot::{BoardSnapshot, BoardView, ColumnState};
pub use store::{BoardStore, MoveOutcome};
