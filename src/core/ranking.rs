//! core::ranking
//!
//! Ranking of contributors and the podium/remainder split.
//!
//! # Ordering
//!
//! Users are ordered by contribution count, highest first. Users with no
//! stats count as zero contributions. Equal counts are ordered by the
//! configured [`TieBreak`], so every roster has exactly one ranking.
//!
//! Ranks are dense and 1-based: the i-th user in the ordering has rank i.
//!
//! # Partition
//!
//! Ranks 1-3 fill the podium, ranks 4 and up form the remainder. A roster
//! with fewer than three users leaves trailing podium places empty.
//!
//! # Example
//!
//! ```
//! use leaderboard::core::ranking::{Standings, TieBreak};
//! use leaderboard::core::types::{User, UserId};
//!
//! let users: Vec<User> = [("a", 10), ("b", 30), ("c", 20), ("d", 5)]
//!     .into_iter()
//!     .map(|(id, n)| User::new(UserId::new(id).unwrap(), id).with_stats(n, 0))
//!     .collect();
//!
//! let standings = Standings::from_users(&users, None, TieBreak::default());
//! let winner = standings.podium_entry(1).unwrap();
//! assert_eq!(winner.user.id.as_str(), "b");
//! assert_eq!(standings.remainder()[0].rank, 4);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::podium::{self, PodiumLayout, PodiumRank, PODIUM_SIZE};
use super::types::{User, UserId};

/// Ordering among users with equal contribution counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Higher XP first, then ascending user id
    #[default]
    Xp,
    /// Keep roster order
    InputOrder,
}

impl TieBreak {
    /// Valid names as accepted in config and on the command line.
    pub const NAMES: &'static [&'static str] = &["xp", "input-order"];

    /// Compare two users with equal contribution counts.
    fn compare(self, a: &User, b: &User) -> Ordering {
        match self {
            TieBreak::Xp => b.xp().cmp(&a.xp()).then_with(|| a.id.cmp(&b.id)),
            TieBreak::InputOrder => Ordering::Equal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TieBreak::Xp => "xp",
            TieBreak::InputOrder => "input-order",
        }
    }
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xp" => Ok(TieBreak::Xp),
            "input-order" => Ok(TieBreak::InputOrder),
            other => Err(format!(
                "invalid tie-break '{}', must be one of: {}",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user with an assigned rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedUser {
    pub rank: u32,
    pub is_current: bool,
    pub user: User,
}

/// Order users and assign dense ranks.
///
/// The input slice is never reordered; ranking works on a copy.
pub fn rank_users(
    users: &[User],
    current_user: Option<&UserId>,
    tie_break: TieBreak,
) -> Vec<RankedUser> {
    let mut ordered = users.to_vec();
    // sort_by is stable, which is what InputOrder relies on
    ordered.sort_by(|a, b| {
        b.total_contributions()
            .cmp(&a.total_contributions())
            .then_with(|| tie_break.compare(a, b))
    });

    ordered
        .into_iter()
        .zip(1u32..)
        .map(|(user, rank)| RankedUser {
            rank,
            is_current: current_user.is_some_and(|id| *id == user.id),
            user,
        })
        .collect()
}

/// A ranked roster split into podium and remainder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Standings {
    podium: [Option<RankedUser>; PODIUM_SIZE],
    remainder: Vec<RankedUser>,
}

impl Standings {
    /// Rank a roster and split it.
    pub fn from_users(users: &[User], current_user: Option<&UserId>, tie_break: TieBreak) -> Self {
        Self::from_ranked(rank_users(users, current_user, tie_break))
    }

    /// Split an already-ranked list.
    pub fn from_ranked(ranked: Vec<RankedUser>) -> Self {
        let mut podium: [Option<RankedUser>; PODIUM_SIZE] = Default::default();
        let mut ranked = ranked.into_iter();
        for place in podium.iter_mut() {
            *place = ranked.next();
        }
        Self {
            podium,
            remainder: ranked.collect(),
        }
    }

    /// Podium places indexed by `rank - 1`. Trailing places may be empty.
    pub fn podium(&self) -> &[Option<RankedUser>; PODIUM_SIZE] {
        &self.podium
    }

    /// Users ranked 4 and below.
    pub fn remainder(&self) -> &[RankedUser] {
        &self.remainder
    }

    /// The user at a podium rank, if that place is filled.
    ///
    /// Returns `None` for empty places and for ranks outside 1..=3.
    pub fn podium_entry(&self, rank: u32) -> Option<&RankedUser> {
        let rank = PodiumRank::try_from(rank).ok()?;
        self.podium[rank.index()].as_ref()
    }

    /// Podium places in display order, left to right, with their layouts.
    pub fn podium_in_display_order(
        &self,
    ) -> impl Iterator<Item = (&'static PodiumLayout, Option<&RankedUser>)> + '_ {
        podium::display_order()
            .into_iter()
            .map(move |rank| (podium::resolve(rank), self.podium[rank.index()].as_ref()))
    }

    /// All ranked users in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &RankedUser> {
        self.podium.iter().flatten().chain(self.remainder.iter())
    }

    /// The entry flagged as the viewing user, if present.
    pub fn current_user(&self) -> Option<&RankedUser> {
        self.iter().find(|entry| entry.is_current)
    }

    /// Look up a ranked user by id.
    pub fn find(&self, id: &UserId) -> Option<&RankedUser> {
        self.iter().find(|entry| entry.user.id == *id)
    }

    /// Number of ranked users.
    pub fn total_contributors(&self) -> usize {
        self.podium.iter().flatten().count() + self.remainder.len()
    }

    pub fn is_empty(&self) -> bool {
        self.podium[0].is_none()
    }
}
