//! Result reporting.
//!
//! This module provides:
//! - [`Reporter`] trait fed by the aggregator as outcomes settle
//! - [`TerminalReporter`] for human-readable output
//! - [`JsonReporter`] for machine-readable output
//! - [`MockReporter`] for tests
//!
//! # Example
//!
//! ```
//! use envcheck::ui::{create_reporter, OutputMode};
//!
//! let mut reporter = create_reporter(false, OutputMode::Quiet);
//! reporter.start(0);
//! ```

pub mod json;
pub mod mock;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use json::JsonReporter;
pub use mock::MockReporter;
pub use output::OutputMode;
pub use spinner::{checking_message, ProgressSpinner};
pub use terminal::{format_outcome, TerminalReporter};
pub use theme::{should_use_colors, EnvCheckTheme};

use crate::check::{CheckReport, RequirementOutcome};

/// Receives the progress of a check run.
///
/// `outcome` is called once per requirement in completion order, and
/// `finish` exactly once after every outcome has been delivered.
pub trait Reporter {
    /// A run over `total` requirements is starting.
    fn start(&mut self, total: usize);

    /// One requirement has settled.
    fn outcome(&mut self, entry: &RequirementOutcome);

    /// Every requirement has settled.
    fn finish(&mut self, report: &CheckReport);

    /// The run could not start (bad manifest, bad config).
    fn error(&mut self, msg: &str);
}

/// Create the reporter for the requested output format.
pub fn create_reporter(json: bool, mode: OutputMode) -> Box<dyn Reporter> {
    if json {
        Box::new(JsonReporter::new())
    } else {
        Box::new(TerminalReporter::new(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_reporter_returns_usable_reporter() {
        let mut reporter = create_reporter(false, OutputMode::Quiet);
        reporter.start(0);
        reporter.finish(&CheckReport::default());
    }

    #[test]
    fn reporter_is_object_safe() {
        let mut mock = MockReporter::new();
        let reporter: &mut dyn Reporter = &mut mock;
        reporter.start(2);
        assert_eq!(mock.started(), Some(2));
    }
}
