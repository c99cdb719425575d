//! Config storage in the platform config directory.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use marquee_core::Hero;

/// Stored configuration. Every field is optional.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StoredConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movies_path: Option<String>,

    /// Base URL of the booking site, used to print full booking links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<Hero>,
}

/// Get the config file path.
pub fn config_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "marquee").context("Could not determine config directory")?;

    Ok(dirs.config_dir().join("config.json"))
}

/// Load the stored config, or the default when none exists.
pub fn load_config() -> Result<StoredConfig> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(StoredConfig::default());
    }

    let json = fs::read_to_string(&path).context("Failed to read config file")?;
    let config = serde_json::from_str(&json).context("Invalid config file")?;
    Ok(config)
}

/// Save the config to disk.
pub fn save_config(config: &StoredConfig) -> Result<()> {
    let path = config_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create config directory")?;
    }

    let json = serde_json::to_string_pretty(config)?;
    fs::write(&path, json).context("Failed to write config file")?;

    Ok(())
}

/// Remove the stored config.
pub fn clear_config() -> Result<()> {
    let path = config_path()?;

    if path.exists() {
        fs::remove_file(&path).context("Failed to remove config file")?;
    }

    Ok(())
}
