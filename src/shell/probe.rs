//! Version probes.
//!
//! A probe runs one version command (e.g. `node --version`) and reports what
//! it printed. The [`ProbeRunner`] trait is the seam the evaluator uses, so
//! tests can substitute canned output for real processes.

use std::fmt;
use std::time::Duration;

use super::command::{execute, CommandOptions};

/// Why a probe did not produce trustworthy output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The shell could not be started at all.
    Spawn { message: String },
    /// The command ran and exited with a failure status.
    Exited { code: Option<i32>, stderr: String },
    /// The command was killed after running past its timeout.
    TimedOut { after: Duration },
}

impl ProbeError {
    /// The human-readable cause reported for an errored requirement.
    ///
    /// For failed commands this is the trimmed stderr text, falling back to
    /// the exit code when the command printed nothing.
    pub fn cause(&self) -> String {
        match self {
            ProbeError::Spawn { message } => message.trim().to_string(),
            ProbeError::Exited { code, stderr } => {
                let trimmed = stderr.trim();
                if !trimmed.is_empty() {
                    trimmed.to_string()
                } else if let Some(code) = code {
                    format!("exited with code {}", code)
                } else {
                    "terminated by signal".to_string()
                }
            }
            ProbeError::TimedOut { after } => {
                format!("timed out after {}s", after.as_secs_f64())
            }
        }
    }
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cause())
    }
}

/// Output of a single probe command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// Captured standard output.
    pub stdout: String,
    /// Set when the command failed; `stdout` is not trusted in that case.
    pub exit_error: Option<ProbeError>,
}

impl ProbeResult {
    /// A probe that exited successfully with the given output.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            exit_error: None,
        }
    }

    /// A probe that failed.
    pub fn failed(error: ProbeError) -> Self {
        Self {
            stdout: String::new(),
            exit_error: Some(error),
        }
    }
}

/// Runs probe commands.
///
/// Implementations are shared across evaluation threads, hence `Send + Sync`.
pub trait ProbeRunner: Send + Sync {
    /// Run one probe command to completion.
    fn run(&self, command: &str) -> ProbeResult;
}

/// Runs probes through the host shell.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    shell: Option<String>,
    timeout: Option<Duration>,
}

impl ShellRunner {
    /// Create a runner using the detected shell and no timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill probes that run longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a specific shell executable instead of `$SHELL`.
    pub fn with_shell(mut self, shell: Option<String>) -> Self {
        self.shell = shell;
        self
    }
}

impl ProbeRunner for ShellRunner {
    fn run(&self, command: &str) -> ProbeResult {
        let options = CommandOptions {
            shell: self.shell.clone(),
            timeout: self.timeout,
            ..Default::default()
        };

        match execute(command, &options) {
            Ok(result) if result.timed_out => ProbeResult::failed(ProbeError::TimedOut {
                after: self.timeout.unwrap_or(result.duration),
            }),
            Ok(result) if result.success => ProbeResult::ok(result.stdout),
            Ok(result) => {
                // Probes that fold stderr into stdout (`2>&1`) report there.
                let stderr = if result.stderr.trim().is_empty() {
                    result.stdout.clone()
                } else {
                    result.stderr
                };
                ProbeResult {
                    stdout: result.stdout,
                    exit_error: Some(ProbeError::Exited {
                        code: result.exit_code,
                        stderr,
                    }),
                }
            }
            Err(e) => ProbeResult::failed(ProbeError::Spawn {
                message: e.to_string(),
            }),
        }
    }
}
