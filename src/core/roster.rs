//! core::roster
//!
//! Loading the list of users to rank.
//!
//! # Format
//!
//! A roster file is a JSON array of user records:
//!
//! ```json
//! [
//!   {
//!     "id": "1",
//!     "name": "Sarah Chen",
//!     "avatar": "https://example.com/sarah.svg",
//!     "stats": { "totalContributions": 247, "xp": 2470 },
//!     "badges": [{ "name": "Top Contributor", "color": "gold" }]
//!   }
//! ]
//! ```
//!
//! `avatar`, `stats`, and `badges` are optional. User ids must be unique
//! within a roster.
//!
//! When no roster file is given, the built-in [`demo`] roster is used.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::types::{Badge, TypeError, User, UserId};

/// Errors from roster loading.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster '{path}'")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse roster '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("duplicate user id '{0}' in roster")]
    DuplicateId(UserId),

    #[error(transparent)]
    InvalidUser(#[from] TypeError),
}

/// An ordered list of users with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    users: Vec<User>,
}

impl Roster {
    /// Build a roster, rejecting duplicate ids.
    pub fn new(users: Vec<User>) -> Result<Self, RosterError> {
        let mut seen = HashSet::new();
        for user in &users {
            if !seen.insert(&user.id) {
                return Err(RosterError::DuplicateId(user.id.clone()));
            }
        }
        Ok(Self { users })
    }

    /// Parse a roster from JSON text.
    ///
    /// `origin` is only used in error messages.
    pub fn from_json(contents: &str, origin: &Path) -> Result<Self, RosterError> {
        let users: Vec<User> =
            serde_json::from_str(contents).map_err(|e| RosterError::ParseError {
                path: origin.to_path_buf(),
                message: e.to_string(),
            })?;
        Self::new(users)
    }

    /// Load a roster file.
    pub fn load(path: &Path) -> Result<Self, RosterError> {
        let contents = fs::read_to_string(path).map_err(|e| RosterError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&contents, path)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.users.iter().any(|u| u.id == *id)
    }
}

/// Id of the viewing user in the demo roster.
pub const DEMO_CURRENT_USER: &str = "5";

/// The built-in demo roster of eight community contributors.
///
/// # Errors
///
/// Fails only if a built-in entry is malformed; every entry is checked
/// by the same rules as a roster file.
pub fn demo() -> Result<Roster, RosterError> {
    const ENTRIES: [(&str, &str, u64, &str, &str); 8] = [
        ("1", "Sarah Chen", 247, "Top Contributor", "gold"),
        ("2", "Alex Rivera", 189, "Rising Star", "silver"),
        ("3", "Jordan Lee", 156, "Dedicated", "bronze"),
        ("4", "Taylor Kim", 134, "Active Member", "blue"),
        ("5", "Morgan Davis", 98, "Contributor", "green"),
        ("6", "Casey Wilson", 87, "Helper", "purple"),
        ("7", "Riley Martinez", 76, "Enthusiast", "indigo"),
        ("8", "Jamie Anderson", 65, "Member", "gray"),
    ];

    let users = ENTRIES
        .iter()
        .map(|&(id, name, contributions, badge, color)| {
            let seed = name.split_whitespace().next().unwrap_or(name);
            let user = User::new(UserId::new(id)?, name)
                .with_avatar(format!(
                    "https://api.dicebear.com/7.x/avataaars/svg?seed={seed}"
                ))
                .with_stats(contributions, contributions * 10)
                .with_badge(Badge::new(badge, color));
            Ok(user)
        })
        .collect::<Result<Vec<_>, TypeError>>()?;

    Roster::new(users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn demo_has_eight_unique_users() {
        let roster = demo().unwrap();
        assert_eq!(roster.len(), 8);
        let ids: Vec<&str> = roster.users().iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8"]);
        assert!(roster.contains(&UserId::new(DEMO_CURRENT_USER).unwrap()));
    }

    #[test]
    fn demo_stats() {
        let roster = demo().unwrap();
        let sarah = &roster.users()[0];
        assert_eq!(sarah.name, "Sarah Chen");
        assert_eq!(sarah.total_contributions(), 247);
        assert_eq!(sarah.xp(), 2470);
        assert!(sarah.avatar.ends_with("seed=Sarah"));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let json = r#"[{ "id": "1", "name": "A" }, { "id": "1", "name": "B" }]"#;
        let result = Roster::from_json(json, Path::new("roster.json"));
        assert!(matches!(result, Err(RosterError::DuplicateId(id)) if id.as_str() == "1"));
    }

    #[test]
    fn parse_error_names_file() {
        let err = Roster::from_json("{ not json", Path::new("bad.json")).unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn empty_array_is_empty_roster() {
        let roster = Roster::from_json("[]", Path::new("empty.json")).unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("roster.json");
        fs::write(
            &path,
            r#"[
                { "id": "a", "name": "A", "stats": { "totalContributions": 3 } },
                { "id": "b", "name": "B" }
            ]"#,
        )
        .unwrap();

        let roster = Roster::load(&path).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.users()[0].total_contributions(), 3);
        assert_eq!(roster.users()[0].xp(), 0);
    }

    #[test]
    fn load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = Roster::load(&temp.path().join("missing.json"));
        assert!(matches!(result, Err(RosterError::ReadError { .. })));
    }

    #[test]
    fn read_error_keeps_io_cause_as_source() {
        let temp = TempDir::new().unwrap();
        let err = Roster::load(&temp.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
        assert!(!err.to_string().contains("os error"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
