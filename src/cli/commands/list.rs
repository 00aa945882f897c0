//! List command implementation.
//!
//! The `envcheck list` command lists known validators.

use std::path::{Path, PathBuf};

use serde_json::json;

use crate::config::load_config;
use crate::error::Result;
use crate::ui::theme::EnvCheckTheme;
use crate::ui::{should_use_colors, Reporter};
use crate::validators::ValidatorRegistry;

use super::dispatcher::{Command, CommandResult, EXIT_CONFIG};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config: Option<PathBuf>,
    json: bool,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, config: Option<PathBuf>, json: bool) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            json,
        }
    }

    /// Built-in validators plus any the project config adds.
    pub fn registry(&self) -> Result<ValidatorRegistry> {
        let config_path = self.config.as_ref().map(|path| self.project_root.join(path));
        let config = load_config(&self.project_root, config_path.as_deref())?;
        ValidatorRegistry::builtin().with_custom(&config.validators)
    }
}

/// One `name  command` line per validator, names padded to align.
pub fn format_listing(registry: &ValidatorRegistry, theme: &EnvCheckTheme) -> Vec<String> {
    let names = registry.known_names();
    let width = names.iter().map(|n| n.len()).max().unwrap_or(0);

    names
        .into_iter()
        .filter_map(|name| {
            registry.get(name).map(|definition| {
                format!(
                    "  {}  {}",
                    theme.highlight.apply_to(format!("{:width$}", name, width = width)),
                    theme.dim.apply_to(&definition.probe_command)
                )
            })
        })
        .collect()
}

impl Command for ListCommand {
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        let registry = match self.registry() {
            Ok(registry) => registry,
            Err(e) if e.is_configuration() => {
                reporter.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_CONFIG));
            }
            Err(e) => return Err(e),
        };

        if self.json {
            let entries: Vec<_> = registry
                .known_names()
                .into_iter()
                .filter_map(|name| {
                    registry
                        .get(name)
                        .map(|d| json!({ "name": name, "command": d.probe_command }))
                })
                .collect();
            let text = serde_json::to_string_pretty(&entries)
                .map_err(|e| anyhow::anyhow!("failed to serialize validators: {}", e))?;
            println!("{}", text);
        } else {
            let theme = if should_use_colors() {
                EnvCheckTheme::new()
            } else {
                EnvCheckTheme::plain()
            };
            for line in format_listing(&registry, &theme) {
                println!("{}", line);
            }
        }

        Ok(CommandResult::success())
    }
}
