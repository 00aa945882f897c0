//! Project manifest loading.
//!
//! The manifest declares which engines a project needs and which versions
//! it accepts. `package.json` is read from its `engines` object; YAML
//! manifests use a top-level `engines:` mapping. Declaration order is kept
//! so reports list tools in the order the project wrote them.

use crate::error::{EnvCheckError, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default manifest file name.
pub const DEFAULT_MANIFEST: &str = "package.json";

/// One declared engine and the version constraint it must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Requirement {
    /// Tool name (e.g., "node", "npm")
    pub name: String,
    /// Expected version constraint (e.g., ">=14")
    pub expected: String,
}

impl Requirement {
    /// Create a requirement.
    pub fn new(name: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expected: expected.into(),
        }
    }
}

/// The requirements declared by a project manifest.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    requirements: Vec<Requirement>,
}

impl Manifest {
    /// Load a manifest from disk.
    ///
    /// # Errors
    ///
    /// Returns `ManifestNotFound` if the file doesn't exist,
    /// `ManifestParseError` if it cannot be parsed, and `NoEngines` if it
    /// declares no engines.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EnvCheckError::ManifestNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                EnvCheckError::Io(e)
            }
        })?;

        if is_yaml(path) {
            Self::from_yaml_str(&content, path)
        } else {
            Self::from_json_str(&content, path)
        }
    }

    /// Parse `package.json`-style content.
    pub fn from_json_str(content: &str, path: &Path) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| parse_error(path, e.to_string()))?;

        let engines = match value.get("engines") {
            None | Some(serde_json::Value::Null) => return Err(no_engines(path)),
            Some(serde_json::Value::Object(map)) => map,
            Some(_) => return Err(parse_error(path, "'engines' must be an object".to_string())),
        };

        let requirements = engines
            .iter()
            .map(|(name, expected)| match expected {
                serde_json::Value::String(s) => Ok(Requirement::new(name, s.as_str())),
                _ => Err(not_a_string(path, name)),
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_requirements(path, requirements)
    }

    /// Parse YAML content with a top-level `engines:` mapping.
    pub fn from_yaml_str(content: &str, path: &Path) -> Result<Self> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| parse_error(path, e.to_string()))?;

        let engines = match value.get("engines") {
            None | Some(serde_yaml::Value::Null) => return Err(no_engines(path)),
            Some(serde_yaml::Value::Mapping(map)) => map,
            Some(_) => return Err(parse_error(path, "'engines' must be a mapping".to_string())),
        };

        let mut requirements = Vec::with_capacity(engines.len());
        for (key, expected) in engines {
            let name = scalar_to_string(key)
                .ok_or_else(|| parse_error(path, "engine names must be strings".to_string()))?;
            let expected = scalar_to_string(expected).ok_or_else(|| not_a_string(path, &name))?;
            requirements.push(Requirement::new(name, expected));
        }

        Self::from_requirements(path, requirements)
    }

    fn from_requirements(path: &Path, requirements: Vec<Requirement>) -> Result<Self> {
        if requirements.is_empty() {
            return Err(no_engines(path));
        }
        tracing::debug!(
            "Loaded {} engine(s) from {}",
            requirements.len(),
            path.display()
        );
        Ok(Self {
            path: path.to_path_buf(),
            requirements,
        })
    }

    /// Path the manifest was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Declared requirements, in declaration order.
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    )
}

/// YAML writes `node: 18` as a number; accept scalars as constraint text.
fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_error(path: &Path, message: String) -> EnvCheckError {
    EnvCheckError::ManifestParseError {
        path: path.to_path_buf(),
        message,
    }
}

fn not_a_string(path: &Path, name: &str) -> EnvCheckError {
    parse_error(path, format!("engine '{}' must be a version string", name))
}

fn no_engines(path: &Path) -> EnvCheckError {
    EnvCheckError::NoEngines {
        path: path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn json(content: &str) -> Result<Manifest> {
        Manifest::from_json_str(content, Path::new("package.json"))
    }

    #[test]
    fn reads_engines_in_declaration_order() {
        let manifest = json(
            r#"{"name": "app", "engines": {"npm": "^6.0.0", "node": ">=14", "docker": ">=20"}}"#,
        )
        .unwrap();
        let names: Vec<_> = manifest
            .requirements()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["npm", "node", "docker"]);
        assert_eq!(manifest.requirements()[1].expected, ">=14");
    }

    #[test]
    fn missing_engines_is_no_engines() {
        let err = json(r#"{"name": "app"}"#).unwrap_err();
        assert!(matches!(err, EnvCheckError::NoEngines { .. }));
    }

    #[test]
    fn empty_engines_is_no_engines() {
        let err = json(r#"{"engines": {}}"#).unwrap_err();
        assert!(matches!(err, EnvCheckError::NoEngines { .. }));
    }

    #[test]
    fn non_string_constraint_is_parse_error() {
        let err = json(r#"{"engines": {"node": 14}}"#).unwrap_err();
        assert!(matches!(err, EnvCheckError::ManifestParseError { .. }));
        assert!(err.to_string().contains("node"));
    }

    #[test]
    fn engines_must_be_object() {
        let err = json(r#"{"engines": ["node"]}"#).unwrap_err();
        assert!(matches!(err, EnvCheckError::ManifestParseError { .. }));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = json("{not json").unwrap_err();
        assert!(matches!(err, EnvCheckError::ManifestParseError { .. }));
    }

    #[test]
    fn yaml_manifest_accepts_numbers() {
        let manifest = Manifest::from_yaml_str(
            "engines:\n  node: 18\n  python: '>=3.10'\n",
            Path::new("engines.yml"),
        )
        .unwrap();
        assert_eq!(
            manifest.requirements(),
            &[
                Requirement::new("node", "18"),
                Requirement::new("python", ">=3.10"),
            ]
        );
    }

    #[test]
    fn yaml_manifest_without_engines() {
        let err =
            Manifest::from_yaml_str("name: app\n", Path::new("engines.yml")).unwrap_err();
        assert!(matches!(err, EnvCheckError::NoEngines { .. }));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = Manifest::load(&temp.path().join("package.json")).unwrap_err();
        assert!(matches!(err, EnvCheckError::ManifestNotFound { .. }));
    }

    #[test]
    fn load_dispatches_on_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("engines.yaml");
        fs::write(&path, "engines:\n  git: '>=2'\n").unwrap();

        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.path(), path.as_path());
        assert_eq!(manifest.requirements()[0].name, "git");
    }
}
