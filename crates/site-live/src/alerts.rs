//! User-facing side effects of a push event.

use std::sync::atomic::{AtomicBool, Ordering};

/// Where push toasts and the notification sound go.
pub trait Alerts: Send + Sync + 'static {
    fn toast(&self, message: &str);

    fn play_sound(&self);

    /// Prepare the sound for playback. Called once, after the first user gesture.
    fn prime_sound(&self);
}

/// Alerts that only emit tracing events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAlerts;

impl Alerts for TracingAlerts {
    fn toast(&self, message: &str) {
        tracing::info!(%message, "push toast");
    }

    fn play_sound(&self) {
        tracing::debug!("notification sound");
    }

    fn prime_sound(&self) {
        tracing::debug!("notification sound primed");
    }
}

/// One-shot latch for priming the notification sound.
///
/// Playback is only allowed after a user interaction, so the first gesture
/// primes the sound and every later gesture is ignored.
#[derive(Debug, Default)]
pub struct SoundUnlock {
    primed: AtomicBool,
}

impl SoundUnlock {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            primed: AtomicBool::new(false),
        }
    }

    /// Prime `alerts` on the first call. Returns whether this call did it.
    pub fn on_user_gesture(&self, alerts: &impl Alerts) -> bool {
        if self.primed.swap(true, Ordering::AcqRel) {
            return false;
        }
        alerts.prime_sound();
        true
    }

    #[must_use]
    pub fn is_primed(&self) -> bool {
        self.primed.load(Ordering::Acquire)
    }
}
