//! rank command - Print a single user's rank

use crate::cli::{BoardArgs, Context};
use crate::core::podium::PodiumRank;
use crate::core::types::UserId;
use crate::ui::output::format_count;
use crate::ui::render::OutputFormat;
use anyhow::{bail, Context as _, Result};

use super::board::load_board;

/// Print the rank of the user with the given id.
///
/// # Errors
///
/// Fails if the id is invalid or not present in the roster.
pub fn rank(ctx: &Context, id: &str, args: &BoardArgs) -> Result<()> {
    let id = UserId::new(id).context("Invalid user id")?;
    let board = load_board(ctx, args)?;

    let Some(entry) = board.standings.find(&id) else {
        bail!("User '{}' is not in the roster", id);
    };
    let total = board.standings.total_contributors();

    match board.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "rank": entry.rank,
                "of": total,
                "on_podium": PodiumRank::try_from(entry.rank).is_ok(),
                "is_current": entry.is_current,
                "user": entry.user,
                "tie_break": board.tie_break,
                "current_user": board.current_user,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text | OutputFormat::Markdown => {
            if ctx.quiet {
                println!("{}", entry.rank);
            } else {
                println!(
                    "{} is ranked {} of {} with {}",
                    entry.user.name,
                    entry.rank,
                    total,
                    format_count(entry.user.total_contributions(), "contribution")
                );
            }
        }
    }

    Ok(())
}
