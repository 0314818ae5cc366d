//! ui::render
//!
//! Pure functions that turn [`Standings`] into text, markdown, or JSON.
//!
//! # Design
//!
//! Renderers take immutable inputs (standings, badge styles, options) and
//! return strings. They never rank or reorder: podium places come from
//! [`Standings::podium_in_display_order`], so rank 1 always lands in the
//! center column.
//!
//! # Text layout
//!
//! The text podium prints three fixed-width columns. Each place shows its
//! icon and rank, the name, contributions and XP, then a block whose height
//! follows the place's height tier. Columns are bottom-aligned so the
//! blocks share a base line, and an empty place renders as blank space.

use serde::Serialize;
use thiserror::Error;

use super::badge::{BadgeStyle, BadgeStyles};
use super::output::format_count;
use crate::core::podium::PodiumLayout;
use crate::core::ranking::{RankedUser, Standings};
use crate::core::types::{Badge, User};
use std::fmt;
use std::str::FromStr;

/// Page title.
pub const TITLE: &str = "Leaderboard";

/// Page subtitle.
pub const SUBTITLE: &str = "Top contributors in our community";

/// Width of one podium column in text output.
pub const COLUMN_WIDTH: usize = 20;

/// Errors from rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize leaderboard: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "invalid format '{}', must be one of: text, markdown, json",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
        })
    }
}

/// What to include in the rendered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render the podium only, without the remaining ranks and footer
    pub podium_only: bool,
    /// Include the title and subtitle
    pub header: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            podium_only: false,
            header: true,
        }
    }
}

/// Render standings in the requested format.
pub fn render(
    format: OutputFormat,
    standings: &Standings,
    styles: &BadgeStyles,
    options: RenderOptions,
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => Ok(render_text(standings, options)),
        OutputFormat::Markdown => Ok(render_markdown(standings, styles, options)),
        OutputFormat::Json => render_json(standings, styles, options),
    }
}

// =============================================================================
// Text
// =============================================================================

/// Render the board for a terminal.
pub fn render_text(standings: &Standings, options: RenderOptions) -> String {
    let mut lines = Vec::new();

    if options.header {
        lines.push(TITLE.to_string());
        lines.push(SUBTITLE.to_string());
        lines.push(String::new());
    }

    if standings.is_empty() {
        lines.push("No contributors yet.".to_string());
        return lines.join("\n");
    }

    lines.extend(text_podium(standings));

    if !options.podium_only {
        if !standings.remainder().is_empty() {
            lines.push(String::new());
            lines.push("All Rankings".to_string());
            lines.extend(standings.remainder().iter().map(text_row));
        }
        lines.push(String::new());
        lines.push(footer(standings));
    }

    lines.join("\n")
}

/// Podium columns side by side, bottom-aligned so the blocks share a base.
fn text_podium(standings: &Standings) -> Vec<String> {
    let columns: Vec<Vec<String>> = standings
        .podium_in_display_order()
        .map(|(layout, entry)| podium_column(layout, entry))
        .collect();

    let height = columns.iter().map(Vec::len).max().unwrap_or(0);
    let blank = " ".repeat(COLUMN_WIDTH);

    (0..height)
        .map(|row| {
            columns
                .iter()
                .map(|column| {
                    let offset = height - column.len();
                    if row < offset {
                        blank.as_str()
                    } else {
                        column[row - offset].as_str()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
                .trim_end()
                .to_string()
        })
        .collect()
}

/// One podium column, top to bottom. Empty places have no lines.
fn podium_column(layout: &PodiumLayout, entry: Option<&RankedUser>) -> Vec<String> {
    let Some(entry) = entry else {
        return Vec::new();
    };
    let user = &entry.user;

    let mut lines = Vec::new();
    if layout.crown_overlay() {
        lines.push(centered("<crown>"));
    }
    lines.push(centered(&format!("{} #{}", layout.icon.name(), layout.rank)));
    lines.push(centered(&display_name(user, entry.is_current)));
    lines.push(centered(&format_count(
        user.total_contributions(),
        "contribution",
    )));
    lines.push(centered(&format!("{} XP", user.xp())));

    let label = format!(" {} ", layout.rank);
    for row in 0..layout.height_tier.rows() {
        if row == 0 {
            lines.push(format!("{:█^width$}", label, width = COLUMN_WIDTH));
        } else {
            lines.push("█".repeat(COLUMN_WIDTH));
        }
    }

    lines
}

/// A row in the remainder list.
fn text_row(entry: &RankedUser) -> String {
    let user = &entry.user;
    let marker = if entry.is_current { ">" } else { " " };
    let mut row = format!(
        "{}{:>3}. {} · {} · {} XP",
        marker,
        entry.rank,
        display_name(user, entry.is_current),
        format_count(user.total_contributions(), "contribution"),
        user.xp()
    );
    if let Some(badge) = user.primary_badge() {
        row.push_str(&format!(" · [{}]", badge.name));
    }
    row
}

fn display_name(user: &User, is_current: bool) -> String {
    if is_current {
        format!("{} (You)", user.name)
    } else {
        user.name.clone()
    }
}

/// Center text in a podium column, truncating long names.
fn centered(text: &str) -> String {
    let fitted: String = if text.chars().count() > COLUMN_WIDTH {
        text.chars()
            .take(COLUMN_WIDTH - 1)
            .chain(std::iter::once('…'))
            .collect()
    } else {
        text.to_string()
    };
    format!("{:^width$}", fitted, width = COLUMN_WIDTH)
}

fn footer(standings: &Standings) -> String {
    format!("Total Contributors: {}", standings.total_contributors())
}

// =============================================================================
// Markdown
// =============================================================================

/// Render the board as markdown tables.
pub fn render_markdown(standings: &Standings, styles: &BadgeStyles, options: RenderOptions) -> String {
    let mut lines = Vec::new();

    if options.header {
        lines.push(format!("## 🏆 {}", TITLE));
        lines.push(String::new());
        lines.push(SUBTITLE.to_string());
        lines.push(String::new());
    }

    if standings.is_empty() {
        lines.push("_No contributors yet._".to_string());
        return lines.join("\n");
    }

    lines.push("### Podium".to_string());
    lines.push(String::new());

    let places: Vec<_> = standings.podium_in_display_order().collect();
    let header: Vec<String> = places
        .iter()
        .map(|(layout, _)| format!("{} {}", layout.icon.glyph(), layout.rank))
        .collect();
    lines.push(format!("| {} |", header.join(" | ")));
    lines.push("|:---:|:---:|:---:|".to_string());
    lines.push(podium_row(&places, |layout, entry| {
        let name = markdown_name(&entry.user, entry.is_current);
        if layout.crown_overlay() {
            format!("**{}** 👑", name)
        } else {
            name
        }
    }));
    lines.push(podium_row(&places, |_, entry| {
        format!(
            "{} · {} XP",
            format_count(entry.user.total_contributions(), "contribution"),
            entry.user.xp()
        )
    }));

    if !options.podium_only {
        if !standings.remainder().is_empty() {
            lines.push(String::new());
            lines.push("### All Rankings".to_string());
            lines.push(String::new());
            lines.push("| Rank | Contributor | Contributions | XP | Badge |".to_string());
            lines.push("|---:|---|---:|---:|---|".to_string());
            for entry in standings.remainder() {
                lines.push(markdown_row(entry, styles));
            }
        }
        lines.push(String::new());
        lines.push(footer(standings));
    }

    lines.join("\n")
}

/// One podium table row; empty places get an empty cell.
fn podium_row(
    places: &[(&PodiumLayout, Option<&RankedUser>)],
    cell: impl Fn(&PodiumLayout, &RankedUser) -> String,
) -> String {
    let cells: Vec<String> = places
        .iter()
        .map(|&(layout, entry)| entry.map(|e| cell(layout, e)).unwrap_or_default())
        .collect();
    format!("| {} |", cells.join(" | "))
}

fn markdown_row(entry: &RankedUser, styles: &BadgeStyles) -> String {
    let user = &entry.user;
    let name = markdown_name(user, entry.is_current);
    let name = if entry.is_current {
        format!("**{}**", name)
    } else {
        name
    };
    let badge = user
        .primary_badge()
        .map(|b| markdown_badge(b, styles.lookup(&b.color)))
        .unwrap_or_default();

    format!(
        "| {} | {} | {} | {} | {} |",
        entry.rank,
        name,
        user.total_contributions(),
        user.xp(),
        badge
    )
}

fn markdown_name(user: &User, is_current: bool) -> String {
    escape_cell(&display_name(user, is_current))
}

fn markdown_badge(badge: &Badge, style: BadgeStyle) -> String {
    format!(
        "<span class=\"bg-{} text-{}\">{}</span>",
        style.background,
        style.text,
        escape_cell(&badge.name)
    )
}

/// Escape characters that would break a table cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

// =============================================================================
// JSON
// =============================================================================

#[derive(Serialize)]
struct BoardView<'a> {
    podium: Vec<PodiumPlaceView<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remainder: Option<Vec<EntryView<'a>>>,
    total_contributors: usize,
    current_user: Option<EntryView<'a>>,
}

#[derive(Serialize)]
struct PodiumPlaceView<'a> {
    layout: &'a PodiumLayout,
    avatar_size: crate::core::podium::AvatarSize,
    border_color: &'static str,
    entry: Option<EntryView<'a>>,
}

#[derive(Serialize)]
struct EntryView<'a> {
    #[serde(flatten)]
    entry: &'a RankedUser,
    badge_style: Option<BadgeStyle>,
}

impl<'a> EntryView<'a> {
    fn new(entry: &'a RankedUser, styles: &BadgeStyles) -> Self {
        Self {
            entry,
            badge_style: entry.user.primary_badge().map(|b| styles.lookup(&b.color)),
        }
    }
}

/// Render the board as pretty-printed JSON.
///
/// Podium places are listed in display order; empty places have a `null`
/// entry.
pub fn render_json(
    standings: &Standings,
    styles: &BadgeStyles,
    options: RenderOptions,
) -> Result<String, RenderError> {
    let view = BoardView {
        podium: standings
            .podium_in_display_order()
            .map(|(layout, entry)| PodiumPlaceView {
                layout,
                avatar_size: layout.avatar_size(),
                border_color: layout.border_color(),
                entry: entry.map(|e| EntryView::new(e, styles)),
            })
            .collect(),
        remainder: (!options.podium_only).then(|| {
            standings
                .remainder()
                .iter()
                .map(|e| EntryView::new(e, styles))
                .collect()
        }),
        total_contributors: standings.total_contributors(),
        current_user: standings.current_user().map(|e| EntryView::new(e, styles)),
    };

    Ok(serde_json::to_string_pretty(&view)?)
}
