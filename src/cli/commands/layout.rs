//! layout command - Print the podium layout for a rank

use crate::cli::Context;
use crate::core::podium::{resolve, PodiumLayout, PodiumRank, PODIUM_SIZE};
use crate::ui::output;
use crate::ui::render::OutputFormat;
use anyhow::{Context as _, Result};

/// Print the display parameters for a podium rank.
pub fn layout(ctx: &Context, rank: u32, format: Option<OutputFormat>) -> Result<()> {
    let rank = PodiumRank::try_from(rank)?;
    let layout = resolve(rank);
    output::debug(format!("layout: {:?}", layout), ctx.verbosity());

    println!("{}", describe(layout, format.unwrap_or_default())?);
    Ok(())
}

/// Render a layout in the requested format.
fn describe(layout: &PodiumLayout, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "layout": layout,
                "avatar_size": layout.avatar_size(),
                "crown_overlay": layout.crown_overlay(),
                "border_color": layout.border_color(),
            });
            serde_json::to_string_pretty(&value).context("Failed to serialize layout")
        }
        OutputFormat::Text => Ok(fields(layout)
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Markdown => {
            let mut lines = vec![
                "| Field | Value |".to_string(),
                "|---|---|".to_string(),
            ];
            lines.extend(
                fields(layout)
                    .iter()
                    .map(|(key, value)| format!("| {} | {} |", key, value)),
            );
            Ok(lines.join("\n"))
        }
    }
}

fn fields(layout: &PodiumLayout) -> Vec<(&'static str, String)> {
    let (from, to) = layout.gradient.stops();
    vec![
        ("Rank", layout.rank.to_string()),
        (
            "Slot",
            format!(
                "{} ({} of {})",
                layout.slot.name(),
                layout.slot.position(),
                PODIUM_SIZE
            ),
        ),
        ("Height", layout.height_tier.name().to_string()),
        (
            "Gradient",
            format!("{} ({} -> {})", layout.gradient.name(), from, to),
        ),
        ("Icon", layout.icon.name().to_string()),
        (
            "Winner",
            if layout.is_winner { "yes" } else { "no" }.to_string(),
        ),
        ("Avatar", layout.avatar_size().name().to_string()),
        ("Border", layout.border_color().to_string()),
    ]
}
