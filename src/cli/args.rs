//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// envcheck - Verify local tool versions against a manifest's engines.
#[derive(Debug, Parser)]
#[command(name = "envcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Path to the manifest (defaults to package.json in the project root)
    #[arg(short, long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Path to config file (overrides default .envcheck.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seconds each probe may run (0 disables the limit)
    #[arg(
        short,
        long,
        global = true,
        env = "ENVCHECK_TIMEOUT",
        value_name = "SECONDS"
    )]
    pub timeout: Option<u64>,

    /// Print the report as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Show verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show problems and the verdict
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check installed versions against the manifest (default)
    Check,

    /// List known validators and their probe commands
    List,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
