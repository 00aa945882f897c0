//! Configuration file discovery and loading.

use crate::config::schema::EnvCheckConfig;
use crate::error::{EnvCheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = ".envcheck.yml";

/// Location of the project config for `project_root`.
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_FILE_NAME)
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<EnvCheckConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EnvCheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EnvCheckError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`EnvCheckConfig`].
///
/// An empty file yields the default configuration.
pub fn parse_config(content: &str, source_path: &Path) -> Result<EnvCheckConfig> {
    if content.trim().is_empty() {
        return Ok(EnvCheckConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| EnvCheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load configuration for a project.
///
/// An `explicit` path must exist. Otherwise `.envcheck.yml` in the project
/// root is used when present, and defaults apply when it is not.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<EnvCheckConfig> {
    if let Some(path) = explicit {
        tracing::debug!("Loading config from {}", path.display());
        return load_config_file(path);
    }

    let path = project_config_path(project_root);
    if path.exists() {
        tracing::debug!("Loading config from {}", path.display());
        load_config_file(&path)
    } else {
        tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
        Ok(EnvCheckConfig::default())
    }
}
