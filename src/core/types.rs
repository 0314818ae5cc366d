//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`UserId`] - Validated contributor identifier
//! - [`User`] - A contributor as supplied by the roster
//! - [`Stats`] - Contribution and XP counters
//! - [`Badge`] - A named badge with a free-form color key
//!
//! # Validation
//!
//! Identifiers are validated at construction time. Numeric stats are
//! lenient: a missing or `null` counter reads as zero, and a user with no
//! `stats` object at all is treated as having zero of everything.
//!
//! # Examples
//!
//! ```
//! use leaderboard::core::types::{User, UserId};
//!
//! let id = UserId::new("42").unwrap();
//! let user = User::new(id, "Ada");
//! assert_eq!(user.total_contributions(), 0);
//!
//! assert!(UserId::new("").is_err());
//! assert!(UserId::new(" padded ").is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid user id: {0}")]
    InvalidUserId(String),
}

/// A validated contributor identifier.
///
/// Identifiers must be non-empty, must not carry leading or trailing
/// whitespace, and must not contain control characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a new validated user id.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidUserId` if the id is empty, padded, or
    /// contains control characters.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    fn validate(id: &str) -> Result<(), TypeError> {
        if id.is_empty() {
            return Err(TypeError::InvalidUserId("user id cannot be empty".into()));
        }
        if id.trim() != id {
            return Err(TypeError::InvalidUserId(format!(
                "user id '{id}' has leading or trailing whitespace"
            )));
        }
        if id.chars().any(|c| c.is_control()) {
            return Err(TypeError::InvalidUserId(
                "user id cannot contain control characters".into(),
            ));
        }
        Ok(())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Contribution counters for a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of contributions; drives the ranking
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_contributions: u64,

    /// Experience points; secondary ordering key
    #[serde(default, deserialize_with = "null_as_zero")]
    pub xp: u64,
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or_default())
}

/// A badge shown next to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Display name
    pub name: String,
    /// Color key, resolved by the presentation layer
    pub color: String,
}

impl Badge {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// A contributor as supplied by the roster.
///
/// Users are immutable inputs; ranking never writes back onto them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
    #[serde(default)]
    pub badges: Vec<Badge>,
}

impl User {
    /// Create a user with no avatar, stats, or badges.
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar: String::new(),
            stats: None,
            badges: Vec::new(),
        }
    }

    /// Set the stats (builder style).
    pub fn with_stats(mut self, total_contributions: u64, xp: u64) -> Self {
        self.stats = Some(Stats {
            total_contributions,
            xp,
        });
        self
    }

    /// Set the avatar reference (builder style).
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    /// Append a badge (builder style).
    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badges.push(badge);
        self
    }

    /// Contribution count, zero when stats are absent.
    pub fn total_contributions(&self) -> u64 {
        self.stats.map(|s| s.total_contributions).unwrap_or(0)
    }

    /// XP, zero when stats are absent.
    pub fn xp(&self) -> u64 {
        self.stats.map(|s| s.xp).unwrap_or(0)
    }

    /// The badge shown for this user, if any.
    ///
    /// Only the first badge is displayed.
    pub fn primary_badge(&self) -> Option<&Badge> {
        self.badges.first()
    }
}
