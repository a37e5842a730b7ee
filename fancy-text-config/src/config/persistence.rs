//! Config persistence, path resolution and validation for `Config`.
//!
//! Covers:
//! - `load` / `load_from` / `save` / `save_to` (YAML file I/O with atomic write)
//! - XDG-style path helpers (`config_path`, `config_dir`)
//! - `validate` (semantic checks after parsing)

use super::config_struct::Config;
use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use unicode_normalization::char::is_combining_mark;

impl Config {
    /// Load configuration from the default path, or defaults when the file
    /// does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, or defaults when the file
    /// does not exist. Missing files are never created here; see [`Config::save`].
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        log::info!("Config path: {:?}", config_path);

        if !config_path.exists() {
            log::info!("Config file not found at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        log::info!("Loading existing config from {:?}", config_path);
        let contents = fs::read_to_string(config_path)?;

        // An empty file is a valid "all defaults" config
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml_ng::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = config_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml_ng::to_string(self)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = config_path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, config_path)?;

        log::info!("Saved config to {:?}", config_path);
        Ok(())
    }

    /// Check field values that YAML parsing alone cannot reject.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fallback = self.fallback_char;
        if fallback.is_control() {
            return Err(ConfigError::Validation(format!(
                "fallback_char U+{:04X} is a control character",
                fallback as u32
            )));
        }
        // Combining marks would attach to the previous glyph instead of
        // standing in for the missing one.
        if is_combining_mark(fallback) {
            return Err(ConfigError::Validation(format!(
                "fallback_char U+{:04X} is a combining mark",
                fallback as u32
            )));
        }
        Ok(())
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("fancy-text")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // Use XDG convention on all platforms: ~/.config/fancy-text/config.yaml
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("fancy-text")
            } else {
                PathBuf::from(".")
            }
        }
    }
}
