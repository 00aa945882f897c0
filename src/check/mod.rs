//! The validation pipeline.
//!
//! Requirements from the manifest are evaluated concurrently against the
//! validator registry, each producing one [`Outcome`], and reduced to a
//! single verdict.
//!
//! # Modules
//!
//! - [`aggregator`] - Concurrent fan-out and wait-for-all reduction
//! - [`evaluator`] - Single-requirement evaluation
//! - [`outcome`] - Outcome and report types
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use envcheck::check::Aggregator;
//! use envcheck::manifest::Requirement;
//! use envcheck::shell::{ProbeResult, ProbeRunner};
//! use envcheck::ui::MockReporter;
//! use envcheck::validators::{ValidatorDefinition, ValidatorRegistry};
//!
//! struct Canned;
//! impl ProbeRunner for Canned {
//!     fn run(&self, _command: &str) -> ProbeResult {
//!         ProbeResult::ok("v16.2.0")
//!     }
//! }
//!
//! let mut registry = ValidatorRegistry::new();
//! registry.insert("node", ValidatorDefinition::semver("node --version"));
//!
//! let aggregator = Aggregator::new(Arc::new(registry), Arc::new(Canned));
//! let mut reporter = MockReporter::new();
//! let report = aggregator.run(&[Requirement::new("node", ">=14")], &mut reporter);
//! assert!(report.verdict());
//! ```

pub mod aggregator;
pub mod evaluator;
pub mod outcome;

pub use aggregator::Aggregator;
pub use evaluator::Evaluator;
pub use outcome::{CheckReport, Outcome, RequirementOutcome};
