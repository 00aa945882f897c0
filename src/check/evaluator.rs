//! Single-requirement evaluation.

use crate::manifest::Requirement;
use crate::shell::ProbeRunner;
use crate::validators::ValidatorRegistry;

use super::outcome::Outcome;

/// Evaluates one requirement end-to-end: lookup, probe, validate.
///
/// Every failure mode resolves to an [`Outcome`]; nothing is returned as an
/// error and nothing is retried.
pub struct Evaluator<'a> {
    registry: &'a ValidatorRegistry,
    runner: &'a dyn ProbeRunner,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator over a registry and probe runner.
    pub fn new(registry: &'a ValidatorRegistry, runner: &'a dyn ProbeRunner) -> Self {
        Self { registry, runner }
    }

    /// Evaluate a requirement to exactly one outcome.
    pub fn evaluate(&self, requirement: &Requirement) -> Outcome {
        let Some(validator) = self.registry.get(&requirement.name) else {
            tracing::debug!("No validator registered for '{}'", requirement.name);
            return Outcome::Unknown {
                tool_name: requirement.name.clone(),
            };
        };

        tracing::debug!(
            "Probing '{}' with `{}`",
            requirement.name,
            validator.probe_command
        );
        let probe = self.runner.run(&validator.probe_command);

        if let Some(error) = probe.exit_error {
            tracing::debug!("Probe for '{}' failed: {:?}", requirement.name, error);
            return Outcome::Errored {
                tool_name: requirement.name.clone(),
                cause: error.cause(),
            };
        }

        if (validator.validate)(&probe.stdout, &requirement.expected) {
            tracing::debug!("'{}' satisfies {}", requirement.name, requirement.expected);
            Outcome::Passed
        } else {
            tracing::debug!(
                "'{}' does not satisfy {}: {:?}",
                requirement.name,
                requirement.expected,
                probe.stdout.trim()
            );
            Outcome::Failed {
                reason: probe.stdout.trim().to_string(),
            }
        }
    }
}
