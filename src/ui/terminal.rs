//! Terminal reporter.

use console::Term;

use crate::check::{CheckReport, Outcome, RequirementOutcome};
use crate::shell::is_ci;

use super::spinner::{checking_message, ProgressSpinner};
use super::{should_use_colors, EnvCheckTheme, OutputMode, Reporter};

/// Prints one line per requirement as results arrive, then the verdict.
pub struct TerminalReporter {
    term: Term,
    err_term: Term,
    theme: EnvCheckTheme,
    mode: OutputMode,
    spinner: Option<ProgressSpinner>,
    total: usize,
    remaining: usize,
}

impl TerminalReporter {
    /// Create a new terminal reporter.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            EnvCheckTheme::new()
        } else {
            EnvCheckTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err_term: Term::stderr(),
            theme,
            mode,
            spinner: None,
            total: 0,
            remaining: 0,
        }
    }

    fn print(&self, line: &str) {
        match &self.spinner {
            Some(spinner) => spinner.suspend(|| self.term.write_line(line).ok()),
            None => self.term.write_line(line).ok(),
        };
    }
}

/// Render the status line for one requirement.
pub fn format_outcome(theme: &EnvCheckTheme, entry: &RequirementOutcome) -> String {
    match &entry.outcome {
        Outcome::Passed => theme.format_passed(&entry.name, &entry.expected),
        Outcome::Failed { reason } => theme.format_mismatch(&entry.name, &entry.expected, reason),
        Outcome::Unknown { tool_name } => theme.format_unknown(tool_name),
        Outcome::Errored { tool_name, cause } => theme.format_probe_error(tool_name, cause),
    }
}

impl Reporter for TerminalReporter {
    fn start(&mut self, total: usize) {
        self.total = total;
        self.remaining = total;
        let spinner = if self.mode.shows_spinners() && !is_ci() {
            ProgressSpinner::new(&checking_message(total, total))
        } else {
            ProgressSpinner::hidden()
        };
        self.spinner = Some(spinner);
    }

    fn outcome(&mut self, entry: &RequirementOutcome) {
        self.remaining = self.remaining.saturating_sub(1);

        if !entry.outcome.is_passed() || self.mode.shows_passes() {
            let line = format_outcome(&self.theme, entry);
            self.print(&line);
        }

        if let Some(spinner) = &self.spinner {
            spinner.set_message(&checking_message(self.remaining, self.total));
        }
    }

    fn finish(&mut self, report: &CheckReport) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish();
        }

        if self.mode.shows_tally() {
            let tally = format!(
                "{} of {} engines satisfied",
                report.passed(),
                report.outcomes.len()
            );
            self.term
                .write_line(&self.theme.dim.apply_to(tally).to_string())
                .ok();
        }

        self.term
            .write_line(&self.theme.format_verdict(report.verdict()))
            .ok();
    }

    fn error(&mut self, msg: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish();
        }
        self.err_term
            .write_line(&self.theme.format_error(msg))
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, expected: &str, outcome: Outcome) -> RequirementOutcome {
        RequirementOutcome {
            name: name.to_string(),
            expected: expected.to_string(),
            outcome,
        }
    }

    #[test]
    fn formats_each_outcome_kind() {
        let theme = EnvCheckTheme::plain();

        assert_eq!(
            format_outcome(&theme, &entry("node", ">=14", Outcome::Passed)),
            "✓ node was validated with >=14"
        );
        assert_eq!(
            format_outcome(
                &theme,
                &entry(
                    "npm",
                    "^6.0.0",
                    Outcome::Failed {
                        reason: "5.8.0".into()
                    }
                )
            ),
            "✗ npm version is not correct! Expected: ^6.0.0 but was 5.8.0"
        );
        assert_eq!(
            format_outcome(
                &theme,
                &entry(
                    "yarn",
                    "*",
                    Outcome::Unknown {
                        tool_name: "yarn".into()
                    }
                )
            ),
            "⚠ yarn was expected, but no validator found!"
        );
        assert_eq!(
            format_outcome(
                &theme,
                &entry(
                    "docker",
                    ">=20",
                    Outcome::Errored {
                        tool_name: "docker".into(),
                        cause: "command not found".into()
                    }
                )
            ),
            "✗ Error validating docker: command not found"
        );
    }

    #[test]
    fn quiet_reporter_hides_spinner() {
        let mut reporter = TerminalReporter::new(OutputMode::Quiet);
        reporter.start(3);
        assert!(reporter.spinner.as_ref().is_some_and(|s| s.is_hidden()));
        assert_eq!(reporter.remaining, 3);

        reporter.finish(&CheckReport::default());
        assert!(reporter.spinner.is_none());
    }

    #[test]
    fn remaining_counts_down() {
        let mut reporter = TerminalReporter::new(OutputMode::Quiet);
        reporter.start(2);
        reporter.outcome(&entry("node", ">=14", Outcome::Passed));
        assert_eq!(reporter.remaining, 1);
        reporter.outcome(&entry("npm", ">=6", Outcome::Passed));
        reporter.outcome(&entry("extra", "*", Outcome::Passed));
        assert_eq!(reporter.remaining, 0);
    }
}
