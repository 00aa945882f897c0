//! Concurrent evaluation of all requirements.
//!
//! Every requirement runs on its own scoped thread so a slow probe never
//! delays the start of another. Outcomes are forwarded to the reporter as
//! they settle, and the verdict is only computed once every thread has been
//! joined. A panicking evaluation is isolated to its own requirement and
//! settles as [`Outcome::Errored`].

use std::any::Any;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use crate::manifest::Requirement;
use crate::shell::ProbeRunner;
use crate::ui::Reporter;
use crate::validators::ValidatorRegistry;

use super::evaluator::Evaluator;
use super::outcome::{CheckReport, Outcome, RequirementOutcome};

/// Runs all requirement evaluations and reduces them to a report.
pub struct Aggregator {
    registry: Arc<ValidatorRegistry>,
    runner: Arc<dyn ProbeRunner>,
}

impl Aggregator {
    /// Create an aggregator over an injected registry and probe runner.
    pub fn new(registry: Arc<ValidatorRegistry>, runner: Arc<dyn ProbeRunner>) -> Self {
        Self { registry, runner }
    }

    /// Evaluate every requirement concurrently.
    ///
    /// The reporter sees each outcome in completion order; the returned
    /// report lists outcomes in `requirements` order.
    pub fn run(&self, requirements: &[Requirement], reporter: &mut dyn Reporter) -> CheckReport {
        reporter.start(requirements.len());

        let evaluator = Evaluator::new(&self.registry, self.runner.as_ref());
        let mut slots: Vec<Option<Outcome>> = vec![None; requirements.len()];

        thread::scope(|scope| {
            let (tx, rx) = mpsc::channel::<(usize, Outcome)>();

            let handles: Vec<_> = requirements
                .iter()
                .enumerate()
                .map(|(index, requirement)| {
                    let tx = tx.clone();
                    let evaluator = &evaluator;
                    let handle = thread::Builder::new()
                        .name(format!("envcheck-{}", requirement.name))
                        .spawn_scoped(scope, move || {
                            let outcome = evaluator.evaluate(requirement);
                            let _ = tx.send((index, outcome));
                        });
                    (index, handle)
                })
                .collect();
            drop(tx);

            for (index, outcome) in rx {
                settle(requirements, &mut slots, reporter, index, outcome);
            }

            // Barrier: every evaluation is joined before the verdict exists.
            for (index, handle) in handles {
                let fault = match handle {
                    Ok(handle) => handle
                        .join()
                        .err()
                        .map(|payload| format!("validator panicked: {}", panic_message(&payload))),
                    Err(e) => Some(format!("could not start evaluation: {}", e)),
                };

                if let Some(cause) = fault {
                    tracing::warn!("Evaluation of '{}' faulted: {}", requirements[index].name, cause);
                    let outcome = Outcome::Errored {
                        tool_name: requirements[index].name.clone(),
                        cause,
                    };
                    settle(requirements, &mut slots, reporter, index, outcome);
                }
            }
        });

        let outcomes = requirements
            .iter()
            .zip(slots)
            .map(|(requirement, slot)| RequirementOutcome {
                name: requirement.name.clone(),
                expected: requirement.expected.clone(),
                outcome: slot.unwrap_or_else(|| Outcome::Errored {
                    tool_name: requirement.name.clone(),
                    cause: "evaluation did not complete".to_string(),
                }),
            })
            .collect();

        let report = CheckReport { outcomes };
        tracing::debug!(
            "{} of {} requirement(s) passed",
            report.passed(),
            report.outcomes.len()
        );
        reporter.finish(&report);
        report
    }
}

/// Record an outcome and forward it to the reporter, once per requirement.
fn settle(
    requirements: &[Requirement],
    slots: &mut [Option<Outcome>],
    reporter: &mut dyn Reporter,
    index: usize,
    outcome: Outcome,
) {
    if slots[index].is_some() {
        return;
    }
    let requirement = &requirements[index];
    tracing::debug!("'{}' settled as {}", requirement.name, outcome.tag());
    let entry = RequirementOutcome {
        name: requirement.name.clone(),
        expected: requirement.expected.clone(),
        outcome,
    };
    reporter.outcome(&entry);
    slots[index] = Some(entry.outcome);
}

fn panic_message(payload: &Box<dyn Any + Send + 'static>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
