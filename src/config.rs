//! Configuration file handling.
//!
//! The config lives at `<config dir>/typecast/config.toml`, or wherever
//! `TYPECAST_CONFIG` points. A missing file means defaults; missing fields in
//! an existing file fall back to their defaults too.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::animator::AnimatorOptions;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "TYPECAST_CONFIG";

/// Player presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Theme name: `default`, `classic` or `ocean`
    pub theme: String,
    /// Prompt drawn before input lines
    pub prompt: String,
    /// Initial playback speed multiplier
    pub speed: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            prompt: "$ ".to_string(),
            speed: 1.0,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub animator: AnimatorOptions,
    pub player: PlayerConfig,
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("typecast").join("config.toml"))
    }

    /// Load the config, returning defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config file: {:?}", path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse config TOML")?;
        let speed = config.player.speed;
        if !speed.is_finite() || speed <= 0.0 {
            bail!("player.speed must be a positive number, got {}", speed);
        }
        Ok(config)
    }

    /// Write the config, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content).with_context(|| format!("Failed to write config: {:?}", path))?;
        Ok(())
    }
}
