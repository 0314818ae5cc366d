//! ui::badge
//!
//! Badge color lookup.
//!
//! A badge carries a free-form color key. The renderer resolves it through
//! a [`BadgeStyles`] table; unknown keys fall back to the gray style, so
//! every badge renders.

use serde::Serialize;

/// Background and text color keys for a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeStyle {
    pub background: &'static str,
    pub text: &'static str,
}

/// Known badge colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeColor {
    Gold,
    Silver,
    Bronze,
    Blue,
    Green,
    Purple,
    Indigo,
    Gray,
}

impl BadgeColor {
    /// Parse a color key. Returns `None` for unrecognized keys.
    pub fn from_key(key: &str) -> Option<Self> {
        let color = match key {
            "gold" => BadgeColor::Gold,
            "silver" => BadgeColor::Silver,
            "bronze" => BadgeColor::Bronze,
            "blue" => BadgeColor::Blue,
            "green" => BadgeColor::Green,
            "purple" => BadgeColor::Purple,
            "indigo" => BadgeColor::Indigo,
            "gray" => BadgeColor::Gray,
            _ => return None,
        };
        Some(color)
    }
}

/// Lookup table from badge color to style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeStyles {
    entries: Vec<(BadgeColor, BadgeStyle)>,
    fallback: BadgeStyle,
}

impl BadgeStyles {
    /// Build a table with an explicit fallback for unknown keys.
    pub fn new(entries: Vec<(BadgeColor, BadgeStyle)>, fallback: BadgeStyle) -> Self {
        Self { entries, fallback }
    }

    /// Style for a color key, or the fallback.
    pub fn lookup(&self, key: &str) -> BadgeStyle {
        BadgeColor::from_key(key)
            .and_then(|color| {
                self.entries
                    .iter()
                    .find(|(c, _)| *c == color)
                    .map(|(_, style)| *style)
            })
            .unwrap_or(self.fallback)
    }
}

impl Default for BadgeStyles {
    fn default() -> Self {
        const fn style(background: &'static str, text: &'static str) -> BadgeStyle {
            BadgeStyle { background, text }
        }
        let gray = style("gray-400", "white");

        Self::new(
            vec![
                (BadgeColor::Gold, style("yellow-500", "yellow-900")),
                (BadgeColor::Silver, style("gray-300", "gray-800")),
                (BadgeColor::Bronze, style("orange-600", "white")),
                (BadgeColor::Blue, style("blue-500", "white")),
                (BadgeColor::Green, style("green-500", "white")),
                (BadgeColor::Purple, style("purple-500", "white")),
                (BadgeColor::Indigo, style("indigo-500", "white")),
                (BadgeColor::Gray, gray),
            ],
            gray,
        )
    }
}
