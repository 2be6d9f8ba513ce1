//! Thinking spinner shown while a resolution is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner that ticks while the model works
pub struct ThinkingSpinner {
    bar: ProgressBar,
}

impl ThinkingSpinner {
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar }
    }

    /// Stop and erase the spinner
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
