//! Check command implementation.
//!
//! The `envcheck check` command evaluates every engine in the manifest and
//! exits with the verdict.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::check::Aggregator;
use crate::cli::args::Cli;
use crate::config::load_config;
use crate::error::Result;
use crate::manifest::{Manifest, DEFAULT_MANIFEST};
use crate::shell::ShellRunner;
use crate::ui::Reporter;
use crate::validators::ValidatorRegistry;

use super::dispatcher::{Command, CommandResult, EXIT_CONFIG};

/// Flags that shape a check run.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Manifest path, relative to the project root
    pub manifest: Option<PathBuf>,
    /// Config path, relative to the project root
    pub config: Option<PathBuf>,
    /// Probe timeout override in seconds
    pub timeout: Option<u64>,
}

impl CheckOptions {
    /// Collect the check flags from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            manifest: cli.manifest.clone(),
            config: cli.config.clone(),
            timeout: cli.timeout,
        }
    }
}

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    options: CheckOptions,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, options: CheckOptions) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            options,
        }
    }

    /// The manifest this command reads.
    pub fn manifest_path(&self) -> PathBuf {
        match &self.options.manifest {
            Some(path) => self.project_root.join(path),
            None => self.project_root.join(DEFAULT_MANIFEST),
        }
    }

    fn prepare(&self) -> Result<(Manifest, Aggregator)> {
        let config_path = self
            .options
            .config
            .as_ref()
            .map(|path| self.project_root.join(path));
        let config = load_config(&self.project_root, config_path.as_deref())?;

        let registry = ValidatorRegistry::builtin().with_custom(&config.validators)?;
        let manifest = Manifest::load(&self.manifest_path())?;

        let timeout = match self.options.timeout {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => config.probe_timeout(),
        };
        tracing::debug!(
            "Checking {} engine(s) from {} with timeout {:?}",
            manifest.requirements().len(),
            manifest.path().display(),
            timeout
        );

        let runner = ShellRunner::new()
            .with_timeout(timeout)
            .with_shell(config.shell.clone());

        Ok((manifest, Aggregator::new(Arc::new(registry), Arc::new(runner))))
    }
}

impl Command for CheckCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let (manifest, aggregator) = match self.prepare() {
            Ok(prepared) => prepared,
            Err(e) if e.is_configuration() => {
                reporter.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_CONFIG));
            }
            Err(e) => return Err(e),
        };

        let report = aggregator.run(manifest.requirements(), reporter);
        Ok(CommandResult::from_verdict(report.verdict()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Outcome;
    use crate::ui::MockReporter;
    use std::fs;
    use tempfile::TempDir;

    const CONFIG: &str = r#"
shell: /bin/sh
validators:
  node:
    command: echo v16.2.0
  npm:
    command: echo 5.8.0
  docker:
    command: "echo 'command not found' >&2; exit 127"
"#;

    fn project(engines: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            format!(r#"{{ "name": "demo", "engines": {} }}"#, engines),
        )
        .unwrap();
        fs::write(temp.path().join(".envcheck.yml"), CONFIG).unwrap();
        temp
    }

    #[test]
    fn passing_engines_exit_zero() {
        let temp = project(r#"{ "node": ">=14" }"#);
        let cmd = CheckCommand::new(temp.path(), CheckOptions::default());
        let mut reporter = MockReporter::new();

        let result = cmd.execute(&mut reporter).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
        assert_eq!(reporter.finished(), Some(true));
    }

    #[test]
    fn mismatch_exits_one() {
        let temp = project(r#"{ "node": ">=14", "npm": "^6.0.0" }"#);
        let cmd = CheckCommand::new(temp.path(), CheckOptions::default());
        let mut reporter = MockReporter::new();

        let result = cmd.execute(&mut reporter).unwrap();

        assert_eq!(result.exit_code, 1);
        let npm = reporter
            .outcomes()
            .iter()
            .find(|o| o.name == "npm")
            .unwrap();
        assert_eq!(
            npm.outcome,
            Outcome::Failed {
                reason: "5.8.0".to_string()
            }
        );
    }

    #[test]
    fn probe_error_keeps_sibling_passing() {
        let temp = project(r#"{ "docker": ">=20", "node": ">=14" }"#);
        let cmd = CheckCommand::new(temp.path(), CheckOptions::default());
        let mut reporter = MockReporter::new();

        let result = cmd.execute(&mut reporter).unwrap();

        assert_eq!(result.exit_code, 1);
        let docker = reporter
            .outcomes()
            .iter()
            .find(|o| o.name == "docker")
            .unwrap();
        assert_eq!(
            docker.outcome,
            Outcome::Errored {
                tool_name: "docker".to_string(),
                cause: "command not found".to_string()
            }
        );
        assert!(reporter
            .outcomes()
            .iter()
            .any(|o| o.name == "node" && o.outcome.is_passed()));
    }

    #[test]
    fn no_engines_is_configuration_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), r#"{ "name": "demo" }"#).unwrap();
        let cmd = CheckCommand::new(temp.path(), CheckOptions::default());
        let mut reporter = MockReporter::new();

        let result = cmd.execute(&mut reporter).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(reporter.errors()[0].contains("No engines found"));
        assert_eq!(reporter.started(), None);
    }

    #[test]
    fn missing_manifest_is_configuration_error() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(temp.path(), CheckOptions::default());
        let mut reporter = MockReporter::new();

        let result = cmd.execute(&mut reporter).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(reporter.errors()[0].contains("Manifest not found"));
    }

    #[test]
    fn explicit_manifest_path_is_used() {
        let temp = project(r#"{ "npm": "^6.0.0" }"#);
        fs::write(
            temp.path().join("engines.yml"),
            "engines:\n  node: \">=14\"\n",
        )
        .unwrap();
        let options = CheckOptions {
            manifest: Some(PathBuf::from("engines.yml")),
            ..Default::default()
        };
        let cmd = CheckCommand::new(temp.path(), options);
        let mut reporter = MockReporter::new();

        let result = cmd.execute(&mut reporter).unwrap();

        assert_eq!(result.exit_code, 0);
        assert_eq!(cmd.manifest_path(), temp.path().join("engines.yml"));
    }

    #[test]
    fn timeout_flag_overrides_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{ "engines": { "slow": "1" } }"#,
        )
        .unwrap();
        fs::write(
            temp.path().join(".envcheck.yml"),
            "shell: /bin/sh\ntimeout: 0\nvalidators:\n  slow:\n    command: sleep 5; echo 1.0.0\n",
        )
        .unwrap();
        let options = CheckOptions {
            timeout: Some(1),
            ..Default::default()
        };
        let cmd = CheckCommand::new(temp.path(), options);
        let mut reporter = MockReporter::new();

        let result = cmd.execute(&mut reporter).unwrap();

        assert_eq!(result.exit_code, 1);
        match &reporter.outcomes()[0].outcome {
            Outcome::Errored { cause, .. } => assert!(cause.contains("timed out")),
            other => panic!("expected timeout, got {:?}", other),
        }
    }
}
