//! Outcome types for requirement checks.
//!
//! Each requirement evaluates to exactly one [`Outcome`]; the
//! [`CheckReport`] collects them and derives the overall verdict.

use serde::Serialize;

/// The result of checking a single requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Installed version satisfies the constraint.
    Passed,

    /// Probe succeeded but the version does not satisfy the constraint.
    Failed {
        /// Trimmed probe output (the version actually found)
        reason: String,
    },

    /// No validator is registered for this tool.
    Unknown {
        /// Tool name from the manifest
        tool_name: String,
    },

    /// The probe could not run or exited abnormally.
    Errored {
        /// Tool name from the manifest
        tool_name: String,
        /// Trimmed error text
        cause: String,
    },
}

impl Outcome {
    /// Whether the requirement passed.
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    /// Short tag for the outcome kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Outcome::Passed => "passed",
            Outcome::Failed { .. } => "failed",
            Outcome::Unknown { .. } => "unknown",
            Outcome::Errored { .. } => "errored",
        }
    }
}

/// An outcome paired with the requirement that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequirementOutcome {
    /// Tool name
    pub name: String,
    /// Expected version constraint
    pub expected: String,
    /// What happened
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// All outcomes of a run, in manifest order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    /// One entry per requirement
    pub outcomes: Vec<RequirementOutcome>,
}

impl CheckReport {
    /// True iff every requirement passed.
    ///
    /// An empty report is not a valid environment; manifests without
    /// engines are rejected before evaluation.
    pub fn verdict(&self) -> bool {
        !self.outcomes.is_empty() && self.outcomes.iter().all(|o| o.outcome.is_passed())
    }

    /// Number of passed requirements.
    pub fn passed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.outcome.is_passed())
            .count()
    }

    /// Number of requirements that did not pass.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// Find the outcome for a tool.
    pub fn get(&self, name: &str) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find(|o| o.name == name)
            .map(|o| &o.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, outcome: Outcome) -> RequirementOutcome {
        RequirementOutcome {
            name: name.to_string(),
            expected: "*".to_string(),
            outcome,
        }
    }

    #[test]
    fn verdict_true_when_all_passed() {
        let report = CheckReport {
            outcomes: vec![entry("node", Outcome::Passed), entry("npm", Outcome::Passed)],
        };
        assert!(report.verdict());
        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 0);
    }

    #[test]
    fn any_non_pass_forces_false() {
        let failing = [
            Outcome::Failed {
                reason: "5.8.0".into(),
            },
            Outcome::Unknown {
                tool_name: "yarn".into(),
            },
            Outcome::Errored {
                tool_name: "docker".into(),
                cause: "command not found".into(),
            },
        ];
        for bad in failing {
            let report = CheckReport {
                outcomes: vec![entry("node", Outcome::Passed), entry("x", bad)],
            };
            assert!(!report.verdict());
            assert_eq!(report.failed(), 1);
        }
    }

    #[test]
    fn empty_report_is_not_valid() {
        assert!(!CheckReport::default().verdict());
    }

    #[test]
    fn get_finds_by_name() {
        let report = CheckReport {
            outcomes: vec![entry(
                "yarn",
                Outcome::Unknown {
                    tool_name: "yarn".into(),
                },
            )],
        };
        assert_eq!(report.get("yarn").map(Outcome::tag), Some("unknown"));
        assert!(report.get("node").is_none());
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(entry(
            "docker",
            Outcome::Errored {
                tool_name: "docker".into(),
                cause: "command not found".into(),
            },
        ))
        .unwrap();
        assert_eq!(json["name"], "docker");
        assert_eq!(json["status"], "errored");
        assert_eq!(json["cause"], "command not found");

        let json = serde_json::to_value(entry("node", Outcome::Passed)).unwrap();
        assert_eq!(json["status"], "passed");
    }
}
