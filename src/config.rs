//! Configuration module
//!
//! Persisted defaults for `FileAttributes` handles, stored with `confy`
//! in the OS-specific config directory.

use crate::constant::{APP_NAME, DEFAULT_FOLLOW_SYMLINKS, DEFAULT_NAMESPACE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: Settings,
}

impl Config {
    /// Load configuration from disk, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let settings: Settings = confy::load(APP_NAME, None)?;
        info!("Load config from {:?}", Self::config_path()?);
        Ok(Self { settings })
    }

    /// Save current configuration to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, &self.settings)?;
        info!("Save config to {:?}", Self::config_path()?);
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(confy::get_configuration_file_path(APP_NAME, None)?)
    }

    /// Load configuration, falling back to defaults when the file is unreadable
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Prefix added to attribute names lacking it, e.g. "user."
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Act on the symlink target rather than the link itself
    #[serde(default = "default_follow_symlinks")]
    pub follow_symlinks: bool,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_follow_symlinks() -> bool {
    DEFAULT_FOLLOW_SYMLINKS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            follow_symlinks: default_follow_symlinks(),
        }
    }
}
