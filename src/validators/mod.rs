//! Tool validators.
//!
//! # Modules
//!
//! - [`registry`] - Tool name to probe command and predicate mapping
//! - [`version`] - Version extraction and npm-style range matching

pub mod registry;
pub mod version;

pub use registry::{ValidateFn, ValidatorDefinition, ValidatorRegistry};
pub use version::{extract_version, satisfies, satisfies_with, VersionRange};
