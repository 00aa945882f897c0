//! Mock reporter for testing.
//!
//! `MockReporter` implements the [`Reporter`] trait and captures every call
//! for later assertion.
//!
//! # Example
//!
//! ```
//! use envcheck::check::{CheckReport, Outcome, RequirementOutcome};
//! use envcheck::ui::{MockReporter, Reporter};
//!
//! let mut reporter = MockReporter::new();
//! reporter.start(1);
//! reporter.outcome(&RequirementOutcome {
//!     name: "node".into(),
//!     expected: ">=14".into(),
//!     outcome: Outcome::Passed,
//! });
//!
//! assert_eq!(reporter.outcomes().len(), 1);
//! assert_eq!(reporter.finished(), None);
//! ```

use crate::check::{CheckReport, RequirementOutcome};

use super::Reporter;

/// Captures reporter calls.
#[derive(Debug, Default)]
pub struct MockReporter {
    started: Option<usize>,
    outcomes: Vec<RequirementOutcome>,
    verdicts: Vec<bool>,
    errors: Vec<String>,
}

impl MockReporter {
    /// Create an empty mock reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// The total passed to `start`, if it was called.
    pub fn started(&self) -> Option<usize> {
        self.started
    }

    /// Outcomes in the order they were reported.
    pub fn outcomes(&self) -> &[RequirementOutcome] {
        &self.outcomes
    }

    /// Verdict of the last `finish` call.
    pub fn finished(&self) -> Option<bool> {
        self.verdicts.last().copied()
    }

    /// How many times `finish` was called.
    pub fn finish_count(&self) -> usize {
        self.verdicts.len()
    }

    /// Messages passed to `error`.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl Reporter for MockReporter {
    fn start(&mut self, total: usize) {
        self.started = Some(total);
    }

    fn outcome(&mut self, entry: &RequirementOutcome) {
        self.outcomes.push(entry.clone());
    }

    fn finish(&mut self, report: &CheckReport) {
        self.verdicts.push(report.verdict());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Outcome;

    #[test]
    fn captures_calls() {
        let mut reporter = MockReporter::new();
        assert_eq!(reporter.started(), None);

        reporter.start(1);
        reporter.outcome(&RequirementOutcome {
            name: "node".into(),
            expected: ">=14".into(),
            outcome: Outcome::Passed,
        });
        reporter.error("boom");
        let report = CheckReport {
            outcomes: reporter.outcomes().to_vec(),
        };
        reporter.finish(&report);

        assert_eq!(reporter.started(), Some(1));
        assert_eq!(reporter.finished(), Some(true));
        assert_eq!(reporter.finish_count(), 1);
        assert_eq!(reporter.errors(), &["boom".to_string()]);
    }
}
