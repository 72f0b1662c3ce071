use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use toml::Value;

use crate::error::{Error, Result};

pub const DEFAULT_ICON: &str = ":bar_chart:";

/// Read-only context for one invocation, resolved from one profile table of
/// the config file.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the stats API, no trailing slash.
    pub api: String,
    /// Static bearer token sent as `Authorization: Token <token>`.
    pub token: String,
    /// Always-visible menu-bar title.
    pub icon: String,
    /// Base URL for building detail links (falls back to `api`).
    pub base: String,
    /// Whether countdowns whose timestamp already passed stay in the menu.
    pub expired: bool,
}

#[derive(Debug, Deserialize)]
struct RawProfile {
    api: String,
    token: String,
    icon: Option<String>,
    base: Option<String>,
    expired: Option<bool>,
}

pub fn default_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join("statbar").join("config.toml"))
        .ok_or_else(|| Error::config("cannot determine the user config directory"))
}

pub fn mute_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join("statbar").join("mute.json"))
        .ok_or_else(|| Error::config("cannot determine the user config directory"))
}

/// Load `profile` from the config file, falling back to the `default` table
/// when no table with that name exists. The profile is normally the invoked
/// binary name, so one config file can serve several menu-bar entries.
pub fn load(path: &Path, profile: &str) -> Result<Config> {
    let data = fs::read_to_string(path)
        .map_err(|e| Error::config(format!("failed to read config {}: {e}", path.display())))?;
    let value: Value = toml::from_str(&data)
        .map_err(|e| Error::config(format!("TOML parse error in {}: {e}", path.display())))?;

    let table = value
        .as_table()
        .and_then(|t| t.get(profile).or_else(|| t.get("default")))
        .ok_or_else(|| {
            Error::config(format!(
                "no '{}' or 'default' table in {}",
                profile,
                path.display()
            ))
        })?;

    let raw: RawProfile = table.clone().try_into().map_err(|e| {
        Error::config(format!(
            "invalid '{}' profile in {}: {e}",
            profile,
            path.display()
        ))
    })?;

    let api = raw.api.trim_end_matches('/').to_string();
    let base = raw
        .base
        .map(|b| b.trim_end_matches('/').to_string())
        .unwrap_or_else(|| api.clone());
    Ok(Config {
        api,
        token: raw.token,
        icon: raw.icon.unwrap_or_else(|| DEFAULT_ICON.to_string()),
        base,
        expired: raw.expired.unwrap_or(true),
    })
}
