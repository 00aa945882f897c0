//! envcheck - Verify local tool versions against a manifest's `engines`.
//!
//! envcheck reads the `engines` block of a `package.json` (or a YAML
//! manifest), probes every listed tool concurrently, and reduces the results
//! to a single pass/fail verdict.
//!
//! # Modules
//!
//! - [`check`] - Requirement evaluation and concurrent aggregation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.envcheck.yml` loading
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Manifest parsing
//! - [`shell`] - Shell command execution and version probes
//! - [`ui`] - Terminal and JSON reporting
//! - [`validators`] - Validator registry and version matching
//!
//! # Example
//!
//! ```
//! use envcheck::validators::satisfies;
//!
//! assert!(satisfies("v16.2.0", ">=14"));
//! assert!(!satisfies("5.8.0", "^6.0.0"));
//! ```

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod shell;
pub mod ui;
pub mod validators;

pub use error::{EnvCheckError, Result};
