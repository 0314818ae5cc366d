//! config command - Get, set, or list configuration values
//!
//! Keys: `current_user`, `tie_break`, `roster`, `format`.

use crate::cli::Context;
use crate::core::config::{Config, FileConfig};
use crate::ui::output;
use anyhow::{bail, Context as _, Result};
use std::path::PathBuf;

/// Known configuration keys.
pub const KEYS: &[&str] = &["current_user", "tie_break", "roster", "format"];

/// Get a configuration value (with precedence applied).
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let cwd = ctx.working_dir()?;
    let config = Config::load(Some(&cwd))
        .context("Failed to load config")?
        .config;

    if let Some(value) = effective_value(&config, key)? {
        println!("{}", value);
    }
    // Key exists but has no value - exit silently
    Ok(())
}

/// Set a configuration value in the project (or global) config.
pub fn set(ctx: &Context, key: &str, value: &str, global: bool) -> Result<()> {
    let cwd = ctx.working_dir()?;
    let loaded = Config::load(Some(&cwd))
        .context("Failed to load config")?
        .config;

    let mut file = if global {
        loaded.global.clone()
    } else {
        loaded.project.clone().unwrap_or_default()
    };
    apply(&mut file, key, value)?;

    let path = if global {
        Config::write_global(&file)
    } else {
        Config::write_project(&cwd, &file)
    }
    .context("Failed to write config")?;

    output::print(
        format!("Set {} = {} ({})", key, value, path.display()),
        ctx.verbosity(),
    );

    Ok(())
}

/// List all configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    let cwd = ctx.working_dir()?;
    let config = Config::load(Some(&cwd))
        .context("Failed to load config")?
        .config;

    println!("# Leaderboard Configuration");
    if let Some(path) = config.global_config_loaded_from() {
        println!("# global: {}", path.display());
    }
    if let Some(path) = config.project_config_loaded_from() {
        println!("# project: {}", path.display());
    }

    for key in KEYS {
        let value = effective_value(&config, key)?.unwrap_or_else(|| "(not set)".to_string());
        println!("{} = {}", key, value);
    }

    Ok(())
}

fn effective_value(config: &Config, key: &str) -> Result<Option<String>> {
    let value = match key {
        "current_user" => config.current_user().map(|id| id.to_string()),
        "tie_break" => Some(config.tie_break().to_string()),
        "roster" => config.roster().map(|p| p.display().to_string()),
        "format" => Some(config.format().to_string()),
        _ => bail!(
            "Unknown configuration key: {} (expected one of: {})",
            key,
            KEYS.join(", ")
        ),
    };
    Ok(value)
}

/// Set `key` on a config file, validating the result.
fn apply(file: &mut FileConfig, key: &str, value: &str) -> Result<()> {
    match key {
        "current_user" => file.current_user = Some(value.to_string()),
        "tie_break" => file.tie_break = Some(value.to_string()),
        "roster" => file.roster = Some(PathBuf::from(value)),
        "format" => file.format = Some(value.to_string()),
        _ => bail!(
            "Unknown configuration key: {} (expected one of: {})",
            key,
            KEYS.join(", ")
        ),
    }
    file.validate().context("Invalid config value")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_sets_known_keys() {
        let mut file = FileConfig::default();
        apply(&mut file, "current_user", "7").unwrap();
        apply(&mut file, "tie_break", "input-order").unwrap();
        apply(&mut file, "format", "markdown").unwrap();
        assert_eq!(file.current_user.as_deref(), Some("7"));
        assert_eq!(file.tie_break.as_deref(), Some("input-order"));
        assert_eq!(file.format.as_deref(), Some("markdown"));
    }

    #[test]
    fn apply_rejects_unknown_key() {
        let mut file = FileConfig::default();
        assert!(apply(&mut file, "podium_size", "5").is_err());
    }

    #[test]
    fn apply_rejects_invalid_value() {
        let mut file = FileConfig::default();
        assert!(apply(&mut file, "tie_break", "random").is_err());
    }

    #[test]
    fn effective_defaults() {
        let config = Config::default();
        assert_eq!(
            effective_value(&config, "tie_break").unwrap().as_deref(),
            Some("xp")
        );
        assert_eq!(
            effective_value(&config, "format").unwrap().as_deref(),
            Some("text")
        );
        assert!(effective_value(&config, "current_user").unwrap().is_none());
        assert!(effective_value(&config, "bogus").is_err());
    }
}
