//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Leaderboard has two configuration scopes:
//! - **Global**: User-level settings
//! - **Project**: Per-directory overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Project config file
//! 4. CLI flags (not handled here)
//!
//! # Example
//!
//! ```no_run
//! use leaderboard::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(Some(Path::new("/path/to/project"))).unwrap();
//! let config = result.config;
//!
//! println!("Tie-break: {}", config.tie_break());
//! if let Some(id) = config.current_user() {
//!     println!("Viewing as: {}", id);
//! }
//! ```

pub mod schema;

pub use schema::FileConfig;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::ranking::TieBreak;
use crate::core::types::UserId;

/// Environment variable naming an explicit global config file.
pub const CONFIG_ENV: &str = "LEADERBOARD_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}'")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}'")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence automatically: project config overrides
/// global config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub global: FileConfig,
    pub project: Option<FileConfig>,
    global_path: Option<PathBuf>,
    project_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `project_dir` is provided, also loads its project config.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed.
    /// Missing config files are not an error (defaults are used).
    pub fn load(project_dir: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let global_path = Self::find_global();
        Self::load_from(global_path.as_deref(), project_dir)
    }

    /// Load configuration from an explicit global file and project directory.
    pub fn load_from(
        global_path: Option<&Path>,
        project_dir: Option<&Path>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let global = match global_path {
            Some(path) => Self::read_config(path)?,
            None => FileConfig::default(),
        };

        let (project, project_path) = match project_dir {
            Some(dir) => {
                let path = Self::project_config_path(dir);
                if path.exists() {
                    (Some(Self::read_config(&path)?), Some(path))
                } else {
                    (None, None)
                }
            }
            None => (None, None),
        };

        global.validate()?;
        if let Some(ref p) = project {
            p.validate()?;
        }

        let config = Config {
            global,
            project,
            global_path: global_path.map(Path::to_path_buf),
            project_path,
        };

        if let Some((roster, Some(origin))) = config.resolved_roster() {
            if !roster.exists() {
                warnings.push(ConfigWarning {
                    message: format!("roster '{}' does not exist", roster.display()),
                    path: origin.to_path_buf(),
                });
            }
        }

        Ok(ConfigLoadResult { config, warnings })
    }

    /// Find the global config file in standard locations.
    fn find_global() -> Option<PathBuf> {
        // 1. $LEADERBOARD_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. $XDG_CONFIG_HOME/leaderboard/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("leaderboard/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. ~/.leaderboard/config.toml
        let path = dirs::home_dir()?.join(".leaderboard/config.toml");
        path.exists().then_some(path)
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for global config.
    ///
    /// Returns `~/.leaderboard/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".leaderboard/config.toml"))
    }

    /// Get the path for project config in `dir`.
    pub fn project_config_path(dir: &Path) -> PathBuf {
        dir.join(".leaderboard/config.toml")
    }

    /// Write global config atomically.
    pub fn write_global(config: &FileConfig) -> Result<PathBuf, ConfigError> {
        let path = Self::global_config_path()?;
        Self::write_config_atomic(&path, config)?;
        Ok(path)
    }

    /// Write project config atomically.
    pub fn write_project(dir: &Path, config: &FileConfig) -> Result<PathBuf, ConfigError> {
        let path = Self::project_config_path(dir);
        Self::write_config_atomic(&path, config)?;
        Ok(path)
    }

    /// Write a config file via temp file and rename.
    fn write_config_atomic(path: &Path, config: &FileConfig) -> Result<(), ConfigError> {
        config.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    fn pick<'a, T: ?Sized>(
        &'a self,
        field: impl Fn(&'a FileConfig) -> Option<&'a T>,
    ) -> Option<&'a T> {
        self.project
            .as_ref()
            .and_then(&field)
            .or_else(|| field(&self.global))
    }

    /// Get the viewing user's id.
    ///
    /// Returns `None` if not configured. Values are validated at load time.
    pub fn current_user(&self) -> Option<UserId> {
        self.pick(|c| c.current_user.as_deref())
            .and_then(|id| UserId::new(id).ok())
    }

    /// Get the tie-break policy.
    ///
    /// Defaults to `xp` if not configured.
    pub fn tie_break(&self) -> TieBreak {
        self.pick(|c| c.tie_break.as_deref())
            .and_then(|t| t.parse().ok())
            .unwrap_or_default()
    }

    /// Get the roster path.
    ///
    /// A relative path from project config is joined onto the project
    /// directory; one from global config is joined onto the directory of
    /// the global config file. Returns `None` if not configured.
    pub fn roster(&self) -> Option<PathBuf> {
        self.resolved_roster().map(|(path, _)| path)
    }

    /// The configured roster path and the config file it came from.
    fn resolved_roster(&self) -> Option<(PathBuf, Option<&Path>)> {
        let (roster, origin, base) = match self.project.as_ref().and_then(|p| p.roster.as_ref()) {
            Some(roster) => {
                let origin = self.project_path.as_deref();
                // <dir>/.leaderboard/config.toml resolves against <dir>
                let base = origin.and_then(Path::parent).and_then(Path::parent);
                (roster, origin, base)
            }
            None => {
                let roster = self.global.roster.as_ref()?;
                let origin = self.global_path.as_deref();
                (roster, origin, origin.and_then(Path::parent))
            }
        };

        let resolved = match base {
            Some(dir) if roster.is_relative() => dir.join(roster),
            _ => roster.clone(),
        };
        Some((resolved, origin))
    }

    /// Get the default output format name.
    ///
    /// Defaults to "text" if not configured.
    pub fn format(&self) -> &str {
        self.pick(|c| c.format.as_deref()).unwrap_or("text")
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded project config file.
    pub fn project_config_loaded_from(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }
}
