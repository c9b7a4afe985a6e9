//! Configuration management for the elearn client.
//!
//! Loads configuration from ${ELEARN_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default config template with comments, embedded at compile time.
const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("default_config.toml");

pub mod paths {
    //! Path resolution for elearn configuration and session data.
    //!
    //! ELEARN_HOME resolution order:
    //! 1. ELEARN_HOME environment variable (if set)
    //! 2. ~/.config/elearn (default)

    use std::path::PathBuf;

    /// Returns the elearn home directory.
    ///
    /// Checks ELEARN_HOME env var first, falls back to ~/.config/elearn
    pub fn elearn_home() -> PathBuf {
        if let Ok(home) = std::env::var("ELEARN_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("elearn"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        elearn_home().join("config.toml")
    }

    /// Returns the path to the persisted session file.
    pub fn session_path() -> PathBuf {
        elearn_home().join("session.json")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the e-learning REST API
    pub base_url: String,
}

impl Config {
    const DEFAULT_BASE_URL: &str = "http://localhost:8000";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    /// Writes the commented default template to `path` unless it exists.
    ///
    /// Returns true if a new file was written.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn write_default(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        fs::write(path, DEFAULT_CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(true)
    }

    /// Resolves the effective base URL.
    ///
    /// Resolution order:
    /// 1. `ELEARN_BASE_URL` env var (if set and non-empty)
    /// 2. Config file value
    pub fn resolve_base_url(&self) -> String {
        if let Ok(url) = std::env::var("ELEARN_BASE_URL") {
            let trimmed = url.trim();
            if !trimmed.is_empty() {
                return trimmed.trim_end_matches('/').to_string();
            }
        }

        self.base_url.trim_end_matches('/').to_string()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }
}
