//! Transient user-facing notifications raised by board operations.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastLevel {
    Success,
    Failure,
}

/// A short message shown to the user after a move or delete resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

impl Toast {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Failure,
            message: message.into(),
        }
    }
}

/// Sink for toasts. Implementations must not block.
pub trait Notifier: Send + Sync + 'static {
    fn notify(&self, toast: Toast);
}

/// Notifier that only emits tracing events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.level {
            ToastLevel::Success => tracing::info!(message = %toast.message, "toast"),
            ToastLevel::Failure => tracing::warn!(message = %toast.message, "toast"),
        }
    }
}
