//! Terminal progress indicator for the in-flight request

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while the explanation request is in flight.
///
/// The session is blocked on the single call-and-wait request, so this is
/// the only progress there is to report.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn thinking() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message("Thinking really hard...");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Stop and clear the spinner.
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
