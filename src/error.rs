//! Error types for envcheck operations.
//!
//! This module defines [`EnvCheckError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `EnvCheckError` for pre-flight failures (manifest, config) that abort a run
//! - Per-requirement failures are never errors; they become an [`Outcome`](crate::check::Outcome)
//! - Use `anyhow::Error` (via `EnvCheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envcheck operations.
#[derive(Debug, Error)]
pub enum EnvCheckError {
    /// Manifest file not found at expected location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse the manifest file.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParseError { path: PathBuf, message: String },

    /// The manifest declares no engines.
    #[error("No engines found in {path}")]
    NoEngines { path: PathBuf },

    /// Explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Shell command could not be started.
    #[error("Failed to run '{command}': {message}")]
    CommandFailed { command: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EnvCheckError {
    /// Whether this error is a pre-flight configuration problem.
    ///
    /// These abort the run before any requirement is evaluated.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            EnvCheckError::ManifestNotFound { .. }
                | EnvCheckError::ManifestParseError { .. }
                | EnvCheckError::NoEngines { .. }
                | EnvCheckError::ConfigNotFound { .. }
                | EnvCheckError::ConfigParseError { .. }
                | EnvCheckError::ConfigValidationError { .. }
        )
    }
}

/// Result type alias for envcheck operations.
pub type Result<T> = std::result::Result<T, EnvCheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_not_found_displays_path() {
        let err = EnvCheckError::ManifestNotFound {
            path: PathBuf::from("/app/package.json"),
        };
        assert!(err.to_string().contains("/app/package.json"));
    }

    #[test]
    fn manifest_parse_error_displays_path_and_message() {
        let err = EnvCheckError::ManifestParseError {
            path: PathBuf::from("/package.json"),
            message: "expected value at line 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/package.json"));
        assert!(msg.contains("expected value at line 1"));
    }

    #[test]
    fn no_engines_displays_path() {
        let err = EnvCheckError::NoEngines {
            path: PathBuf::from("package.json"),
        };
        assert_eq!(err.to_string(), "No engines found in package.json");
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = EnvCheckError::ConfigValidationError {
            message: "bad pattern".into(),
        };
        assert!(err.to_string().contains("bad pattern"));
    }

    #[test]
    fn command_failed_displays_command_and_reason() {
        let err = EnvCheckError::CommandFailed {
            command: "node --version".into(),
            message: "No such file or directory (os error 2)".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("node --version"));
        assert!(msg.contains("No such file or directory"));
    }

    #[test]
    fn configuration_errors_are_classified() {
        assert!(EnvCheckError::NoEngines {
            path: PathBuf::from("package.json")
        }
        .is_configuration());
        assert!(EnvCheckError::ConfigParseError {
            path: PathBuf::from(".envcheck.yml"),
            message: "oops".into(),
        }
        .is_configuration());
        assert!(!EnvCheckError::CommandFailed {
            command: "x".into(),
            message: "denied".into()
        }
        .is_configuration());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: EnvCheckError = io_err.into();
        assert!(matches!(err, EnvCheckError::Io(_)));
        assert!(!err.is_configuration());
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(EnvCheckError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
