//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::Reporter;

use super::check::{CheckCommand, CheckOptions};
use super::completions::CompletionsCommand;
use super::list::ListCommand;

/// Exit code when every requirement passed.
pub const EXIT_VALID: i32 = 0;
/// Exit code when at least one requirement did not pass.
pub const EXIT_INVALID: i32 = 1;
/// Exit code when the run could not start.
pub const EXIT_CONFIG: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `reporter` - Receives check progress and pre-flight errors
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, reporter: &mut dyn Reporter) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: EXIT_VALID,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Map a verdict to its exit code.
    pub fn from_verdict(valid: bool) -> Self {
        if valid {
            Self::success()
        } else {
            Self::failure(EXIT_INVALID)
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Dispatch and execute a command.
    ///
    /// With no subcommand, `check` runs.
    pub fn dispatch(&self, cli: &Cli, reporter: &mut dyn Reporter) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check) | None => {
                let cmd = CheckCommand::new(&self.project_root, CheckOptions::from_cli(cli));
                cmd.execute(reporter)
            }
            Some(Commands::List) => {
                let cmd = ListCommand::new(&self.project_root, cli.config.clone(), cli.json);
                cmd.execute(reporter)
            }
            Some(Commands::Completions(args)) => {
                let cmd = CompletionsCommand::new(args.clone());
                cmd.execute(reporter)
            }
        }
    }
}
