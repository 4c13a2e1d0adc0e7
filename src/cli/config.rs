//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::render::DEFAULT_THEME;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default notes snapshot file
    pub notes: Option<PathBuf>,

    /// Preferred theme identifier
    pub theme: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/quill/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quill")
            .join("config.toml")
    }

    /// Resolve the snapshot path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--notes` argument
    /// 2. Config file `notes` setting
    /// 3. None (use the built-in samples)
    pub fn snapshot_path(&self, cli_notes: Option<&PathBuf>) -> Option<PathBuf> {
        cli_notes.cloned().or_else(|| self.notes.clone())
    }

    /// Resolve the preferred theme.
    ///
    /// Precedence order:
    /// 1. Config file `theme` setting
    /// 2. The built-in default
    pub fn theme(&self) -> String {
        self.theme
            .clone()
            .unwrap_or_else(|| DEFAULT_THEME.to_string())
    }
}
