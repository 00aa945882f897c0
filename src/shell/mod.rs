//! Shell command execution and version probes.

pub mod command;
pub mod platform;
pub mod probe;

pub use command::{execute, CommandOptions, CommandResult};
pub use platform::{detect_shell, is_ci};
pub use probe::{ProbeError, ProbeResult, ProbeRunner, ShellRunner};
