// SPDX-License-Identifier: MPL-2.0
//! Application configuration, loaded from and saved to `settings.toml`.
//!
//! # Path resolution
//!
//! 1. Explicit path via `load_from_path()`/`save_to_path()` (used in tests).
//! 2. `POSTPRESS_STUDIO_CONFIG_DIR` environment variable.
//! 3. The platform config directory under `postpress-studio/`.
//!
//! A missing file yields defaults silently; a malformed file yields defaults
//! plus a warning the caller can surface, so a broken config never prevents
//! startup.

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "POSTPRESS_STUDIO_CONFIG_DIR";
const APP_DIR: &str = "postpress-studio";

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Base URL of the portfolio backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// In-memory cache sizing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheConfig {
    /// Number of decoded remote images kept resident.
    #[serde(default = "default_image_cache_entries")]
    pub image_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            image_entries: default_image_cache_entries(),
        }
    }
}

/// Root configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Resolves the directory holding `settings.toml`.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration, returning defaults plus an optional warning when
/// the file exists but cannot be used.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = config_file_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("ignoring {}: {err}", path.display())),
        ),
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Saves the configuration to the resolved config directory.
pub fn save(config: &Config) -> Result<()> {
    let Some(path) = config_file_path() else {
        return Ok(());
    };
    save_to_path(config, &path)
}

/// Saves the configuration to an explicit path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = Config::default();
        assert_eq!(config.server.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.server.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.cache.image_entries, DEFAULT_IMAGE_CACHE_ENTRIES);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("tempdir failed");
        let path = dir.path().join("settings.toml");

        let mut config = Config::default();
        config.server.base_url = "https://portfolio.example".to_string();
        config.server.timeout_secs = 5;

        save_to_path(&config, &path).expect("save failed");
        let loaded = load_from_path(&path).expect("load failed");
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().expect("tempdir failed");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[server]\nbase_url = \"http://10.0.0.2:5000\"\n")
            .expect("write failed");

        let loaded = load_from_path(&path).expect("load failed");
        assert_eq!(loaded.server.base_url, "http://10.0.0.2:5000");
        assert_eq!(loaded.server.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(loaded.cache.image_entries, DEFAULT_IMAGE_CACHE_ENTRIES);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().expect("tempdir failed");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "server = \"not a table\"").expect("write failed");

        assert!(load_from_path(&path).is_err());
    }
}
