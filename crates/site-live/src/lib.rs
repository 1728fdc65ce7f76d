//! # site-live
//!
//! Live updates for the dashboard. One push channel is kept open per
//! signed-in session; each event on it refetches the cached views that are
//! currently displayed, shows a toast, and plays the notification sound.
//!
//! - [`LiveDispatcher`] owns the connection and the fan-out.
//! - [`PushTransport`] opens channels; [`SseTransport`] is the production one.
//! - [`QueryCache`] tracks which views are mounted and their latest data.
//! - [`Alerts`] receives toasts and sound requests.

mod alerts;
mod cache;
mod dispatcher;
mod error;
mod transport;

use std::fmt;

pub use alerts::{Alerts, SoundUnlock, TracingAlerts};
pub use cache::{QueryCache, Refetcher, ViewSource};
pub use dispatcher::LiveDispatcher;
pub use error::LiveError;
pub use transport::{PUSH_EVENT, PushStream, PushTransport, SseTransport};

/// Who the push channel is opened for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    pub user_id: String,
    pub role: String,
}

impl Identity {
    #[must_use]
    pub fn new(user_id: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: role.into(),
        }
    }

    /// Both fields are known. Channels are only opened for complete identities.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.user_id.trim().is_empty() && !self.role.trim().is_empty()
    }
}

/// Identifies one opened channel. A reconnect gets a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(pub u64);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}
