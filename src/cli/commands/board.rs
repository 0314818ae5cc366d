//! Shared input resolution for commands that rank a roster.
//!
//! Every value resolves in the same order: CLI flag, then config, then a
//! built-in default.

use crate::cli::{BoardArgs, Context};
use crate::core::config::Config;
use crate::core::ranking::{Standings, TieBreak};
use crate::core::roster::{self, Roster};
use crate::core::types::UserId;
use crate::ui::output;
use crate::ui::render::OutputFormat;
use anyhow::{Context as _, Result};

/// Ranked standings plus the resolved rendering choices.
#[derive(Debug)]
pub struct Board {
    pub standings: Standings,
    pub format: OutputFormat,
    pub tie_break: TieBreak,
    pub current_user: Option<UserId>,
}

/// Load config and roster, then rank.
pub fn load_board(ctx: &Context, args: &BoardArgs) -> Result<Board> {
    let verbosity = ctx.verbosity();
    let cwd = ctx.working_dir()?;

    let loaded = Config::load(Some(&cwd)).context("Failed to load config")?;
    for warning in &loaded.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            verbosity,
        );
    }
    let config = loaded.config;
    if let Some(path) = config.global_config_loaded_from() {
        output::debug(format!("global config: {}", path.display()), verbosity);
    }
    if let Some(path) = config.project_config_loaded_from() {
        output::debug(format!("project config: {}", path.display()), verbosity);
    }

    let roster_path = args
        .roster
        .as_ref()
        .map(|p| if p.is_relative() { cwd.join(p) } else { p.clone() })
        .or_else(|| config.roster());

    let (roster, default_user) = match roster_path {
        Some(path) => {
            output::debug(format!("roster: {}", path.display()), verbosity);
            let roster = Roster::load(&path)
                .with_context(|| format!("Failed to load roster '{}'", path.display()))?;
            (roster, None)
        }
        None => {
            output::debug("roster: built-in demo", verbosity);
            (
                roster::demo().context("Failed to build demo roster")?,
                Some(roster::DEMO_CURRENT_USER),
            )
        }
    };

    let current_user = match args.current_user.as_deref() {
        Some(id) => Some(UserId::new(id).context("Invalid --current-user")?),
        None => config
            .current_user()
            .or_else(|| default_user.and_then(|id| UserId::new(id).ok())),
    };

    if let Some(id) = &current_user {
        if !roster.contains(id) {
            output::debug(format!("current user '{}' is not in the roster", id), verbosity);
        }
    }

    let tie_break = args.tie_break.unwrap_or_else(|| config.tie_break());
    let format = match args.format {
        Some(format) => format,
        None => config
            .format()
            .parse()
            .map_err(anyhow::Error::msg)
            .context("Invalid format in config")?,
    };

    output::debug(
        format!(
            "ranking {} users (tie-break: {})",
            roster.len(),
            tie_break
        ),
        verbosity,
    );

    let standings = Standings::from_users(roster.users(), current_user.as_ref(), tie_break);

    Ok(Board {
        standings,
        format,
        tie_break,
        current_user,
    })
}
