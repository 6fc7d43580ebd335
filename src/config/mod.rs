// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[animation]` - Tween time scale and reduced motion
//!
//! # Path Resolution
//!
//! See [`paths`]: explicit override, then `REACTION_PICKER_CONFIG_DIR`,
//! then the platform config directory.
//!
//! # Examples
//!
//! ```no_run
//! use reaction_picker::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load_with_override(None);
//!
//! // Slow every animation down
//! config.animation.time_scale = Some(2.0);
//!
//! config::save_with_override(&config, None).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::ui::TimeScale;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimationConfig {
    /// Multiplier applied to every tween duration.
    #[serde(default = "default_time_scale", skip_serializing_if = "Option::is_none")]
    pub time_scale: Option<f32>,

    /// Land every tween instantly.
    #[serde(
        default = "default_reduced_motion",
        skip_serializing_if = "Option::is_none"
    )]
    pub reduced_motion: Option<bool>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            time_scale: default_time_scale(),
            reduced_motion: default_reduced_motion(),
        }
    }
}

impl AnimationConfig {
    /// Validated time scale, clamped into range.
    #[must_use]
    pub fn time_scale(&self) -> TimeScale {
        self.time_scale.map(TimeScale::new).unwrap_or_default()
    }

    #[must_use]
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion.unwrap_or(DEFAULT_REDUCED_MOTION)
    }
}

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub animation: AnimationConfig,
}

fn default_time_scale() -> Option<f32> {
    Some(DEFAULT_TIME_SCALE)
}

fn default_reduced_motion() -> Option<bool> {
    Some(DEFAULT_REDUCED_MOTION)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(D::Error::custom)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional directory override.
fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from a custom directory, or the default one.
///
/// Returns a tuple of (config, optional_warning). A missing file yields the
/// defaults silently; an unreadable or invalid file yields the defaults and
/// the i18n key of a warning.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded configuration");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default configuration");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to a custom directory, or the default one.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
