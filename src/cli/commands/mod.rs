//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves inputs (roster, config, flags)
//! 2. Calls into [`crate::core`] to rank and lay out
//! 3. Formats and displays output through [`crate::ui`]

mod board;
mod completion;
mod config_cmd;
mod layout;
mod rank;
mod show;

// Re-export command functions for testing and direct invocation
pub use board::{load_board, Board};
pub use completion::{completion, write_completion};
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use layout::layout;
pub use rank::rank;
pub use show::{podium, show};

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;
use crate::ui::output;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    output::debug(format!("command: {:?}", command), ctx.verbosity());

    match command {
        Command::Show { board } => show::show(ctx, &board),
        Command::Podium { board } => show::podium(ctx, &board),
        Command::Rank { id, board } => rank::rank(ctx, &id, &board),
        Command::Layout { rank, format } => layout::layout(ctx, rank, format),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_cmd::get(ctx, &key),
            ConfigAction::Set { key, value, global } => config_cmd::set(ctx, &key, &value, global),
            ConfigAction::List => config_cmd::list(ctx),
        },
        Command::Completion { shell } => completion::completion(shell),
    }
}
