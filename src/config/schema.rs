//! Configuration schema definitions.
//!
//! These structs map to the optional `.envcheck.yml` file in the project root.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Root configuration structure for `.envcheck.yml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvCheckConfig {
    /// Seconds each probe may run before it is killed (0 = no limit)
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Shell used to run probe commands (defaults to `$SHELL`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,

    /// Project-specific validators, keyed by engine name
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub validators: HashMap<String, CustomValidator>,
}

impl Default for EnvCheckConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            shell: None,
            validators: HashMap::new(),
        }
    }
}

impl EnvCheckConfig {
    /// The probe timeout, or `None` when disabled.
    pub fn probe_timeout(&self) -> Option<Duration> {
        match self.timeout {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

/// A project-specific validator definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomValidator {
    /// Command that prints the installed version
    pub command: String,

    /// Regex locating the version in the output (group 1 if present)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_thirty_second_timeout() {
        let config = EnvCheckConfig::default();
        assert_eq!(config.timeout, 30);
        assert_eq!(config.probe_timeout(), Some(Duration::from_secs(30)));
        assert!(config.validators.is_empty());
        assert!(config.shell.is_none());
    }

    #[test]
    fn zero_timeout_disables_limit() {
        let config = EnvCheckConfig {
            timeout: 0,
            ..Default::default()
        };
        assert_eq!(config.probe_timeout(), None);
    }

    #[test]
    fn parses_full_config() {
        let yaml = r#"
timeout: 5
shell: /bin/bash
validators:
  internal-cli:
    command: internal-cli --version
    pattern: 'internal-cli (\d+\.\d+)'
"#;
        let config: EnvCheckConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.timeout, 5);
        assert_eq!(config.shell.as_deref(), Some("/bin/bash"));
        let v = &config.validators["internal-cli"];
        assert_eq!(v.command, "internal-cli --version");
        assert_eq!(v.pattern.as_deref(), Some(r"internal-cli (\d+\.\d+)"));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: EnvCheckConfig = serde_yaml::from_str("validators: {}").unwrap();
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn validator_without_command_is_rejected() {
        let yaml = "validators:\n  tool:\n    pattern: x\n";
        let result: Result<EnvCheckConfig, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }
}
