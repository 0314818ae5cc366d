//! show and podium commands - Render the ranked board

use crate::cli::{BoardArgs, Context};
use crate::ui::badge::BadgeStyles;
use crate::ui::render::{self, RenderOptions};
use anyhow::{Context as _, Result};

use super::board::load_board;

/// Render the full leaderboard.
pub fn show(ctx: &Context, args: &BoardArgs) -> Result<()> {
    render_board(ctx, args, false)
}

/// Render only the podium.
pub fn podium(ctx: &Context, args: &BoardArgs) -> Result<()> {
    render_board(ctx, args, true)
}

fn render_board(ctx: &Context, args: &BoardArgs, podium_only: bool) -> Result<()> {
    let board = load_board(ctx, args)?;
    let options = RenderOptions {
        podium_only,
        header: !args.no_header,
    };

    let rendered = render::render(board.format, &board.standings, &BadgeStyles::default(), options)
        .context("Failed to render leaderboard")?;
    println!("{}", rendered);

    Ok(())
}
