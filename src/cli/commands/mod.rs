//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`envcheck check`, `envcheck list`)
//! - Shared initialization logic
//! - Consistent global flag handling

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod list;

pub use check::{CheckCommand, CheckOptions};
pub use dispatcher::{
    Command, CommandDispatcher, CommandResult, EXIT_CONFIG, EXIT_INVALID, EXIT_VALID,
};
