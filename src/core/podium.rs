//! core::podium
//!
//! Podium layout resolution.
//!
//! # Overview
//!
//! Each of the three podium ranks maps to a fixed display tuple: the
//! height of its block, the color gradient, the icon, the slot it occupies
//! left to right, and whether it gets winner emphasis.
//!
//! The mapping lives in a single table, [`PODIUM_LAYOUTS`]. Rank 1 sorts
//! first but is displayed in the center slot, so the visual order is
//! `[rank 2, rank 1, rank 3]`.
//!
//! # Example
//!
//! ```
//! use leaderboard::core::podium::{display_order, resolve, PodiumRank, Slot};
//!
//! let winner = resolve(PodiumRank::First);
//! assert!(winner.is_winner);
//! assert_eq!(winner.slot, Slot::Center);
//!
//! assert_eq!(
//!     display_order(),
//!     [PodiumRank::Second, PodiumRank::First, PodiumRank::Third]
//! );
//! ```

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Number of places on the podium.
pub const PODIUM_SIZE: usize = 3;

/// Errors from podium rank conversion.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PodiumError {
    #[error("rank {0} is not a podium rank (expected 1, 2, or 3)")]
    OutOfRange(u32),
}

/// A rank that earns a podium place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u32")]
pub enum PodiumRank {
    First,
    Second,
    Third,
}

impl PodiumRank {
    /// All podium ranks in rank order.
    pub const ALL: [PodiumRank; PODIUM_SIZE] =
        [PodiumRank::First, PodiumRank::Second, PodiumRank::Third];

    /// The 1-based rank number.
    pub fn number(self) -> u32 {
        match self {
            PodiumRank::First => 1,
            PodiumRank::Second => 2,
            PodiumRank::Third => 3,
        }
    }

    /// Zero-based index into rank-ordered arrays.
    pub fn index(self) -> usize {
        self.number() as usize - 1
    }
}

impl TryFrom<u32> for PodiumRank {
    type Error = PodiumError;

    fn try_from(rank: u32) -> Result<Self, Self::Error> {
        match rank {
            1 => Ok(PodiumRank::First),
            2 => Ok(PodiumRank::Second),
            3 => Ok(PodiumRank::Third),
            other => Err(PodiumError::OutOfRange(other)),
        }
    }
}

impl From<PodiumRank> for u32 {
    fn from(rank: PodiumRank) -> Self {
        rank.number()
    }
}

impl fmt::Display for PodiumRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Height of a podium block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightTier {
    Short,
    Medium,
    Tall,
}

impl HeightTier {
    pub fn name(self) -> &'static str {
        match self {
            HeightTier::Short => "short",
            HeightTier::Medium => "medium",
            HeightTier::Tall => "tall",
        }
    }

    /// Block height in rows for text rendering.
    pub fn rows(self) -> usize {
        match self {
            HeightTier::Short => 2,
            HeightTier::Medium => 3,
            HeightTier::Tall => 4,
        }
    }
}

/// Color gradient of a podium block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gradient {
    Gold,
    Silver,
    Bronze,
}

impl Gradient {
    pub fn name(self) -> &'static str {
        match self {
            Gradient::Gold => "gold",
            Gradient::Silver => "silver",
            Gradient::Bronze => "bronze",
        }
    }

    /// Start and end color keys, top to bottom.
    pub fn stops(self) -> (&'static str, &'static str) {
        match self {
            Gradient::Gold => ("yellow-400", "yellow-600"),
            Gradient::Silver => ("gray-300", "gray-500"),
            Gradient::Bronze => ("orange-500", "orange-700"),
        }
    }

    /// Avatar border color key for this tier.
    pub fn border(self) -> &'static str {
        match self {
            Gradient::Gold => "yellow-400",
            Gradient::Silver => "gray-400",
            Gradient::Bronze => "orange-600",
        }
    }
}

/// Icon shown on a podium block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Crown,
    Medal,
    Award,
}

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Crown => "crown",
            Icon::Medal => "medal",
            Icon::Award => "award",
        }
    }

    /// Emoji used by the markdown renderer.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Crown => "👑",
            Icon::Medal => "🥈",
            Icon::Award => "🥉",
        }
    }
}

/// Horizontal podium slot, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Left,
    Center,
    Right,
}

impl Slot {
    pub fn name(self) -> &'static str {
        match self {
            Slot::Left => "left",
            Slot::Center => "center",
            Slot::Right => "right",
        }
    }

    /// 1-based slot position.
    pub fn position(self) -> u32 {
        match self {
            Slot::Left => 1,
            Slot::Center => 2,
            Slot::Right => 3,
        }
    }
}

/// Avatar size on the podium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarSize {
    Regular,
    Large,
}

impl AvatarSize {
    pub fn name(self) -> &'static str {
        match self {
            AvatarSize::Regular => "regular",
            AvatarSize::Large => "large",
        }
    }
}

/// Display parameters for one podium place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PodiumLayout {
    pub rank: PodiumRank,
    pub height_tier: HeightTier,
    pub gradient: Gradient,
    pub icon: Icon,
    pub slot: Slot,
    pub is_winner: bool,
}

impl PodiumLayout {
    /// Winners get the large avatar.
    pub fn avatar_size(&self) -> AvatarSize {
        if self.is_winner {
            AvatarSize::Large
        } else {
            AvatarSize::Regular
        }
    }

    /// Whether a crown is overlaid on the avatar.
    pub fn crown_overlay(&self) -> bool {
        self.is_winner
    }

    /// Avatar border color key.
    pub fn border_color(&self) -> &'static str {
        self.gradient.border()
    }
}

/// Layouts indexed by `rank - 1`.
pub const PODIUM_LAYOUTS: [PodiumLayout; PODIUM_SIZE] = [
    PodiumLayout {
        rank: PodiumRank::First,
        height_tier: HeightTier::Tall,
        gradient: Gradient::Gold,
        icon: Icon::Crown,
        slot: Slot::Center,
        is_winner: true,
    },
    PodiumLayout {
        rank: PodiumRank::Second,
        height_tier: HeightTier::Medium,
        gradient: Gradient::Silver,
        icon: Icon::Medal,
        slot: Slot::Left,
        is_winner: false,
    },
    PodiumLayout {
        rank: PodiumRank::Third,
        height_tier: HeightTier::Short,
        gradient: Gradient::Bronze,
        icon: Icon::Award,
        slot: Slot::Right,
        is_winner: false,
    },
];

/// Resolve the layout for a podium rank.
pub fn resolve(rank: PodiumRank) -> &'static PodiumLayout {
    &PODIUM_LAYOUTS[rank.index()]
}

/// Resolve the layout for a raw rank number.
///
/// Only podium members are ever laid out, so a rank outside `1..=3` is a
/// caller bug.
///
/// # Panics
///
/// Panics if `rank` is not 1, 2, or 3. Use [`PodiumRank::try_from`] for
/// input that has not been checked.
pub fn resolve_rank(rank: u32) -> &'static PodiumLayout {
    match PodiumRank::try_from(rank) {
        Ok(rank) => resolve(rank),
        Err(e) => panic!("podium layout requested for non-podium rank: {e}"),
    }
}

/// Podium ranks ordered by slot, left to right.
pub fn display_order() -> [PodiumRank; PODIUM_SIZE] {
    let mut ranks = PodiumRank::ALL;
    ranks.sort_by_key(|rank| resolve(*rank).slot);
    ranks
}
