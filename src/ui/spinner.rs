//! Progress spinner shown while probes run.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A progress spinner for long-running operations.
pub struct ProgressSpinner {
    bar: ProgressBar,
}

impl ProgressSpinner {
    /// Create a new spinner with a message.
    pub fn new(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .template("{spinner:.magenta} {msg}")
        {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar }
    }

    /// Create a spinner that doesn't show.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Update the spinner message.
    pub fn set_message(&self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    /// Run `f` with the spinner cleared so printed lines don't interleave
    /// with the spinner frame.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// Remove the spinner from the terminal.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Whether the spinner draws nothing.
    pub fn is_hidden(&self) -> bool {
        self.bar.is_hidden()
    }
}

/// Spinner message for `remaining` of `total` probes.
pub fn checking_message(remaining: usize, total: usize) -> String {
    let noun = if total == 1 { "engine" } else { "engines" };
    format!(
        "Checking {} {}... ({} remaining)",
        total, noun, remaining
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_spinner_is_hidden() {
        let spinner = ProgressSpinner::hidden();
        assert!(spinner.is_hidden());
        spinner.set_message("ignored");
        assert_eq!(spinner.suspend(|| 42), 42);
        spinner.finish();
    }

    #[test]
    fn checking_message_pluralizes() {
        assert_eq!(checking_message(1, 1), "Checking 1 engine... (1 remaining)");
        assert_eq!(checking_message(2, 3), "Checking 3 engines... (2 remaining)");
    }
}
