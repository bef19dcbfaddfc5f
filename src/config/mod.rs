// SPDX-License-Identifier: MPL-2.0
//! This module handles the lightbox configuration, loading and saving user
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[viewer]` - Zoom step
//! - `[slideshow]` - Auto-advance period
//! - `[gallery]` - Pagination defaults
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_LIGHTBOX_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_lightbox::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key pushed as a toast when `settings.toml` cannot be parsed.
pub const CONFIG_LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Image viewer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerConfig {
    /// Zoom step percentage for zoom in/out.
    #[serde(default = "default_zoom_step", skip_serializing_if = "Option::is_none")]
    pub zoom_step: Option<f32>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_step: default_zoom_step(),
        }
    }
}

/// Slideshow settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlideshowConfig {
    /// Auto-advance period in milliseconds.
    #[serde(
        default = "default_slideshow_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval_ms: Option<u64>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_slideshow_interval_ms(),
        }
    }
}

/// Gallery pagination settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Items per gallery page, used when `--per-page` is not given.
    #[serde(
        default = "default_items_per_page",
        skip_serializing_if = "Option::is_none"
    )]
    pub items_per_page: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Lightbox configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub viewer: ViewerConfig,

    #[serde(default)]
    pub slideshow: SlideshowConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Zoom step in percent, clamped to the supported range. NaN and
    /// infinities fall back to the default.
    #[must_use]
    pub fn zoom_step_percent(&self) -> f32 {
        self.viewer
            .zoom_step
            .filter(|step| step.is_finite())
            .unwrap_or(DEFAULT_ZOOM_STEP_PERCENT)
            .clamp(MIN_ZOOM_STEP_PERCENT, MAX_ZOOM_STEP_PERCENT)
    }

    /// Slideshow period, clamped to the supported range.
    #[must_use]
    pub fn slideshow_interval(&self) -> Duration {
        let millis = self
            .slideshow
            .interval_ms
            .unwrap_or(DEFAULT_SLIDESHOW_INTERVAL_MS)
            .clamp(MIN_SLIDESHOW_INTERVAL_MS, MAX_SLIDESHOW_INTERVAL_MS);
        Duration::from_millis(millis)
    }

    /// Items per page; zero falls back to the default.
    #[must_use]
    pub fn items_per_page(&self) -> usize {
        match self.gallery.items_per_page {
            Some(0) | None => DEFAULT_ITEMS_PER_PAGE,
            Some(count) => count.min(MAX_ITEMS_PER_PAGE),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_zoom_step() -> Option<f32> {
    Some(DEFAULT_ZOOM_STEP_PERCENT)
}

fn default_slideshow_interval_ms() -> Option<u64> {
    Some(DEFAULT_SLIDESHOW_INTERVAL_MS)
}

fn default_items_per_page() -> Option<usize> {
    Some(DEFAULT_ITEMS_PER_PAGE)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring {}: {}", path.display(), err);
                    return (Config::default(), Some(CONFIG_LOAD_ERROR_KEY.to_string()));
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

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
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
