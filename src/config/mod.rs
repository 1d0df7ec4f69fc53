//! Configuration file support for cerne.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/cerne/config.toml`. Settings cover
//! the stroke editor defaults (eraser size, stroke width, starting mode) and
//! the canvas size to assume before the host reports one.
//!
//! If no config file exists, defaults are used automatically.

pub mod types;

pub use types::{CanvasConfig, EditorConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [editor]
/// eraser_diameter = 20.0
/// stroke_width = 3.0
/// initial_mode = "draw"
/// clamp_to_canvas = true
///
/// [canvas]
/// width = 1080
/// height = 1920
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Stroke editor settings
    #[serde(default)]
    pub editor: EditorConfig,

    /// Canvas size hints
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Validated ranges:
    /// - `editor.eraser_diameter`: 1.0 - 200.0
    /// - `editor.stroke_width`: 0.5 - 50.0
    ///
    /// Non-finite values fall back to the defaults.
    fn validate_and_clamp(&mut self) {
        let defaults = EditorConfig::default();

        self.editor.eraser_diameter = clamp_setting(
            "eraser_diameter",
            self.editor.eraser_diameter,
            1.0,
            200.0,
            defaults.eraser_diameter,
        );
        self.editor.stroke_width = clamp_setting(
            "stroke_width",
            self.editor.stroke_width,
            0.5,
            50.0,
            defaults.stroke_width,
        );
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/cerne/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("cerne");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if
    /// the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or if
    /// the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the
    /// file does not exist. Loaded values are validated and clamped.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from TOML text and validates it.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Saves the configuration to `config_path` as TOML, creating the parent
    /// directory if needed.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

fn clamp_setting(name: &str, value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if !value.is_finite() {
        warn!("Invalid {name} {value}, falling back to {fallback:.1}");
        return fallback;
    }
    if !(min..=max).contains(&value) {
        warn!("Invalid {name} {value:.1}, clamping to {min:.1}-{max:.1} range");
        return value.clamp(min, max);
    }
    value
}
