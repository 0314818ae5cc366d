//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Locations
//!
//! Global config is searched at (in order):
//! 1. `$LEADERBOARD_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/leaderboard/config.toml`
//! 3. `~/.leaderboard/config.toml` (canonical write location)
//!
//! Project config lives at `<dir>/.leaderboard/config.toml`.
//!
//! Both scopes share one schema; project values override global ones.
//!
//! # Validation
//!
//! Config values are validated after parsing (e.g., `current_user` must be
//! a valid user id).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::ConfigError;
use crate::core::ranking::TieBreak;
use crate::core::types::UserId;

/// Leaderboard configuration (either scope).
///
/// # Example
///
/// ```toml
/// current_user = "5"
/// tie_break = "xp"
/// roster = "community.json"
/// format = "text"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Id of the viewing user
    pub current_user: Option<String>,

    /// Ordering among equal contribution counts ("xp" or "input-order")
    pub tie_break: Option<String>,

    /// Roster file to load instead of the demo roster
    pub roster: Option<PathBuf>,

    /// Default output format ("text", "markdown", or "json")
    pub format: Option<String>,
}

impl FileConfig {
    /// Valid output format names, including the `md` alias.
    pub const VALID_FORMATS: &'static [&'static str] = &["text", "markdown", "md", "json"];

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(id) = &self.current_user {
            UserId::new(id.as_str())
                .map_err(|e| ConfigError::InvalidValue(format!("invalid current_user: {}", e)))?;
        }

        if let Some(tie_break) = &self.tie_break {
            tie_break
                .parse::<TieBreak>()
                .map_err(ConfigError::InvalidValue)?;
        }

        if let Some(format) = &self.format {
            if !Self::VALID_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid format '{}', must be one of: {}",
                    format,
                    Self::VALID_FORMATS.join(", ")
                )));
            }
        }

        if let Some(roster) = &self.roster {
            if roster.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "roster path cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FileConfig::default();
        assert!(config.current_user.is_none());
        assert!(config.tie_break.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn valid_values() {
        let config = FileConfig {
            current_user: Some("5".to_string()),
            tie_break: Some("input-order".to_string()),
            roster: Some(PathBuf::from("roster.json")),
            format: Some("markdown".to_string()),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_current_user() {
        let config = FileConfig {
            current_user: Some(String::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn invalid_tie_break() {
        let config = FileConfig {
            tie_break: Some("alphabetical".to_string()),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("input-order"));
    }

    #[test]
    fn invalid_format() {
        let config = FileConfig {
            format: Some("html".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn md_alias_accepted() {
        let config = FileConfig {
            format: Some("md".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_roster_rejected() {
        let config = FileConfig {
            roster: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn roundtrip() {
        let config = FileConfig {
            current_user: Some("5".to_string()),
            tie_break: Some("xp".to_string()),
            roster: Some(PathBuf::from("data/roster.json")),
            format: Some("json".to_string()),
        };

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: FileConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn reject_unknown_fields() {
        let toml = r#"
            current_user = "5"
            unknown_field = true
        "#;

        let result: Result<FileConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }
}
