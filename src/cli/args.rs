//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::ranking::TieBreak;
use crate::ui::render::OutputFormat;

/// Leaderboard - ranked community contributors with a podium view
#[derive(Parser, Debug)]
#[command(name = "leaderboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if leaderboard was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Inputs shared by every command that ranks a roster.
#[derive(Args, Debug, Clone, Default)]
pub struct BoardArgs {
    /// Roster file (JSON array of users); defaults to the demo roster
    #[arg(long, value_name = "FILE")]
    pub roster: Option<PathBuf>,

    /// Id of the viewing user, highlighted in the output
    #[arg(long, value_name = "ID")]
    pub current_user: Option<String>,

    /// Ordering among equal contribution counts [xp, input-order]
    #[arg(long, value_name = "POLICY")]
    pub tie_break: Option<TieBreak>,

    /// Output format [text, markdown, json]
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Omit the title and subtitle
    #[arg(long)]
    pub no_header: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the full leaderboard: podium plus all remaining ranks
    #[command(
        name = "show",
        long_about = "Show the full leaderboard.\n\n\
            Contributors are ranked by contribution count, highest first. The top \
            three stand on the podium with first place in the center; everyone \
            else is listed below with their rank. The viewing user's row is \
            marked with (You).",
        after_help = "\
WORKFLOW EXAMPLES:
    # Demo roster, viewed as the demo user
    leaderboard show

    # Your own roster, viewed as user 42
    leaderboard show --roster community.json --current-user 42

    # Markdown for a README or wiki page
    leaderboard show --format markdown"
    )]
    Show {
        #[command(flatten)]
        board: BoardArgs,
    },

    /// Show only the top three
    #[command(name = "podium")]
    Podium {
        #[command(flatten)]
        board: BoardArgs,
    },

    /// Print a single user's rank
    #[command(
        name = "rank",
        after_help = "\
EXAMPLES:
    leaderboard rank 5
    leaderboard rank 42 --roster community.json"
    )]
    Rank {
        /// User id to look up
        id: String,

        #[command(flatten)]
        board: BoardArgs,
    },

    /// Print the podium layout for a rank
    #[command(
        name = "layout",
        long_about = "Print the display parameters for a podium rank.\n\n\
            Shows the height tier, color gradient, icon, slot, and winner \
            emphasis used to draw the given place."
    )]
    Layout {
        /// Podium rank (1, 2, or 3)
        #[arg(value_parser = clap::value_parser!(u32).range(1..=3))]
        rank: u32,

        /// Output format [text, markdown, json]
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
    },

    /// Get, set, or list configuration values
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    leaderboard completion bash > ~/.local/share/bash-completion/completions/leaderboard
    leaderboard completion zsh > ~/.zfunc/_leaderboard"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
        /// Write to the global config instead of the project config
        #[arg(long)]
        global: bool,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
