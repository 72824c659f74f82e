//! Configuration management for Doppel.
//!
//! Configuration is loaded from a TOML file with sensible defaults. Every
//! tunable of the comparison pipeline lives here — grid sizes, timeouts,
//! weights, and confidence thresholds — so the detector itself holds no
//! magic numbers.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for Doppel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Image loading settings
    pub loader: LoaderConfig,

    /// Perceptual hash settings
    pub hash: HashConfig,

    /// Dominant color palette settings
    pub palette: PaletteConfig,

    /// Similarity weighting
    pub scoring: ScoringConfig,

    /// Match and confidence thresholds
    pub thresholds: ThresholdConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.doppel.doppel/config.toml
    /// - Linux: ~/.config/doppel/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\doppel\config\config.toml
    ///
    /// Falls back to ~/.doppel/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "doppel", "doppel")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".doppel").join("config.toml")
            })
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}
