//! Validator registry.
//!
//! Maps a tool name to the command that reveals its installed version and
//! the predicate deciding whether that output satisfies a constraint. The
//! registry is built once at startup and shared read-only by every
//! evaluation.

use crate::config::CustomValidator;
use crate::error::{EnvCheckError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::version::satisfies_with;

/// Validation predicate: `(raw_probe_output, expected_constraint) -> bool`.
pub type ValidateFn = Arc<dyn Fn(&str, &str) -> bool + Send + Sync>;

/// How to check one tool.
#[derive(Clone)]
pub struct ValidatorDefinition {
    /// Shell command that prints version information
    pub probe_command: String,
    /// Decides whether the probe output satisfies the expected constraint
    pub validate: ValidateFn,
}

impl ValidatorDefinition {
    /// Create a definition with an arbitrary predicate.
    pub fn new<F>(probe_command: impl Into<String>, validate: F) -> Self
    where
        F: Fn(&str, &str) -> bool + Send + Sync + 'static,
    {
        Self {
            probe_command: probe_command.into(),
            validate: Arc::new(validate),
        }
    }

    /// Create a definition that matches the first version in the output
    /// against an npm-style range.
    pub fn semver(probe_command: impl Into<String>) -> Self {
        Self::semver_with_pattern(probe_command, None)
    }

    /// Like [`semver`](Self::semver), locating the version with `pattern`.
    pub fn semver_with_pattern(probe_command: impl Into<String>, pattern: Option<Regex>) -> Self {
        Self::new(probe_command, move |raw: &str, expected: &str| {
            satisfies_with(raw, expected, pattern.as_ref())
        })
    }
}

impl fmt::Debug for ValidatorDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorDefinition")
            .field("probe_command", &self.probe_command)
            .finish_non_exhaustive()
    }
}

/// Built-in tools and the commands that print their versions.
const BUILTIN_PROBES: &[(&str, &str)] = &[
    ("node", "node --version"),
    ("npm", "npm --version"),
    ("yarn", "yarn --version"),
    ("pnpm", "pnpm --version"),
    ("bun", "bun --version"),
    ("deno", "deno --version"),
    ("python", "python3 --version 2>/dev/null || python --version 2>&1"),
    ("pip", "pip3 --version 2>/dev/null || pip --version"),
    ("ruby", "ruby --version"),
    ("bundler", "bundle --version"),
    ("go", "go version"),
    ("rust", "rustc --version"),
    ("cargo", "cargo --version"),
    ("java", "java -version 2>&1"),
    ("docker", "docker --version"),
    ("git", "git --version"),
    ("make", "make --version"),
];

/// Registry of all known validators.
#[derive(Debug, Clone, Default)]
pub struct ValidatorRegistry {
    validators: HashMap<String, ValidatorDefinition>,
}

impl ValidatorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in validators.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (name, command) in BUILTIN_PROBES {
            registry.insert(*name, ValidatorDefinition::semver(*command));
        }
        registry
    }

    /// Add custom validators from project config.
    ///
    /// Custom entries replace built-ins of the same name.
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` if a `pattern` is not a valid regex.
    pub fn with_custom(mut self, custom: &HashMap<String, CustomValidator>) -> Result<Self> {
        for (name, validator) in custom {
            let pattern = validator
                .pattern
                .as_deref()
                .map(Regex::new)
                .transpose()
                .map_err(|e| EnvCheckError::ConfigValidationError {
                    message: format!("validator '{}' has an invalid pattern: {}", name, e),
                })?;
            tracing::debug!("Registering custom validator '{}'", name);
            self.insert(
                name.clone(),
                ValidatorDefinition::semver_with_pattern(validator.command.clone(), pattern),
            );
        }
        Ok(self)
    }

    /// Insert or replace a validator.
    pub fn insert(&mut self, name: impl Into<String>, definition: ValidatorDefinition) {
        self.validators.insert(name.into(), definition);
    }

    /// Look up a validator by tool name.
    pub fn get(&self, name: &str) -> Option<&ValidatorDefinition> {
        self.validators.get(name)
    }

    /// All known tool names, sorted.
    pub fn known_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.validators.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}
