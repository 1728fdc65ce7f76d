//! Terminal renditions of toasts and alerts.

use std::io::Write;

use site_board::{Notifier, Toast, ToastLevel};
use site_live::Alerts;

/// Prints board toasts to stderr unless quiet.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleNotifier {
    pub quiet: bool,
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, toast: Toast) {
        tracing::debug!(?toast.level, message = %toast.message, "toast");
        if self.quiet {
            return;
        }
        let mark = match toast.level {
            ToastLevel::Success => "ok",
            ToastLevel::Failure => "error",
        };
        eprintln!("[{mark}] {}", toast.message);
    }
}

/// Prints push toasts to stdout and rings the terminal bell for the sound.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleAlerts {
    pub quiet: bool,
}

impl Alerts for ConsoleAlerts {
    fn toast(&self, message: &str) {
        println!("{message}");
    }

    fn play_sound(&self) {
        if self.quiet {
            return;
        }
        let mut stderr = std::io::stderr();
        if let Err(error) = stderr.write_all(b"\x07").and_then(|()| stderr.flush()) {
            tracing::debug!(%error, "could not ring bell");
        }
    }

    fn prime_sound(&self) {
        tracing::debug!("terminal bell enabled");
    }
}
