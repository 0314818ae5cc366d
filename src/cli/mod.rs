//! cli
//!
//! Command-line interface layer for Leaderboard.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve inputs from flags, config, and defaults
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, loads the roster
//! and config, and hands plain data to [`crate::core`] for ranking and to
//! [`crate::ui`] for rendering.

pub mod args;
pub mod commands;

pub use args::{BoardArgs, Cli, Shell};

use crate::ui::output::Verbosity;
use anyhow::{Context as _, Result};
use std::path::PathBuf;

/// Execution context shared by all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Working directory override
    pub cwd: Option<PathBuf>,
    /// Debug output enabled
    pub debug: bool,
    /// Minimal output
    pub quiet: bool,
}

impl Context {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// The directory commands run in.
    pub fn working_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("Failed to determine current directory"),
        }
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command, &ctx)
}
