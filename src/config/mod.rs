// SPDX-License-Identifier: MPL-2.0
//! This module handles the preview's configuration, loading and saving user
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[gestures]` - Feature switches for pan, pinch, double-tap and dismiss
//! - `[pagination]` - Indicator strip visibility
//! - `[animation]` - Modal and image entry/exit transitions
//! - `[limits]` - Swipe, dismiss and double-tap distances
//!
//! Every key is optional; missing keys fall back to [`defaults`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. `--config-dir` on the command line
//! 3. The `ICED_PREVIEW_CONFIG_DIR` environment variable
//! 4. The platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_preview::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.pagination.show = Some(false);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::app::paths;
use crate::domain::gesture::GestureToggles;
use crate::domain::media::ImageRef;
use crate::domain::ui::{GestureLimits, ModalAnimation};
use crate::error::{Error, Result};
use crate::ui::preview::PreviewOptions;
use defaults::{DEFAULT_DISMISS_DISTANCE, DEFAULT_DOUBLE_TAP_SCALE, DEFAULT_MAX_OFFSET};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Gesture feature switches.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GesturesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinch: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_tap_to_zoom: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_to_dismiss: Option<bool>,

    /// Bias pinch zoom towards the fingers instead of the image center.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focal_zoom: Option<bool>,
}

/// Pagination strip settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
}

/// Entry and exit transitions, by name (`fade`, `slide-up`, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnimationConfig {
    #[serde(default, with = "animation_name", skip_serializing_if = "Option::is_none")]
    pub modal_in: Option<ModalAnimation>,

    #[serde(default, with = "animation_name", skip_serializing_if = "Option::is_none")]
    pub modal_out: Option<ModalAnimation>,

    #[serde(default, with = "animation_name", skip_serializing_if = "Option::is_none")]
    pub image_in: Option<ModalAnimation>,

    #[serde(default, with = "animation_name", skip_serializing_if = "Option::is_none")]
    pub image_out: Option<ModalAnimation>,
}

/// Gesture distances.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LimitsConfig {
    /// Horizontal swipe distance that navigates; also the zoomed pan overhang.
    #[serde(default = "default_max_offset", skip_serializing_if = "Option::is_none")]
    pub max_offset: Option<f32>,

    /// Vertical drag distance that dismisses the preview.
    #[serde(
        default = "default_dismiss_distance",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_distance: Option<f32>,

    #[serde(
        default = "default_double_tap_scale",
        skip_serializing_if = "Option::is_none"
    )]
    pub double_tap_scale: Option<f32>,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_offset: default_max_offset(),
            dismiss_distance: default_dismiss_distance(),
            double_tap_scale: default_double_tap_scale(),
        }
    }
}

/// Complete configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub gestures: GesturesConfig,

    #[serde(default)]
    pub pagination: PaginationConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub limits: LimitsConfig,
}

impl Config {
    /// Gesture switches with unset keys enabled.
    #[must_use]
    pub fn toggles(&self) -> GestureToggles {
        let g = &self.gestures;
        let defaults = GestureToggles::default();
        GestureToggles {
            pan: g.pan.unwrap_or(defaults.pan),
            pinch: g.pinch.unwrap_or(defaults.pinch),
            double_tap_to_zoom: g.double_tap_to_zoom.unwrap_or(defaults.double_tap_to_zoom),
            swipe_to_dismiss: g.swipe_to_dismiss.unwrap_or(defaults.swipe_to_dismiss),
            focal_zoom: g.focal_zoom.unwrap_or(defaults.focal_zoom),
        }
    }

    #[must_use]
    pub fn limits(&self) -> GestureLimits {
        GestureLimits::new(
            self.limits.max_offset.unwrap_or(DEFAULT_MAX_OFFSET),
            self.limits.dismiss_distance.unwrap_or(DEFAULT_DISMISS_DISTANCE),
            self.limits.double_tap_scale.unwrap_or(DEFAULT_DOUBLE_TAP_SCALE),
        )
    }

    /// Builds preview options over `images` from this configuration.
    #[must_use]
    pub fn to_options(&self, images: Vec<ImageRef>) -> PreviewOptions {
        let a = &self.animation;
        PreviewOptions::new(images)
            .toggles(self.toggles())
            .show_pagination(self.pagination.show.unwrap_or(true))
            .modal_animations(a.modal_in.unwrap_or_default(), a.modal_out.unwrap_or_default())
            .image_animations(a.image_in.unwrap_or_default(), a.image_out.unwrap_or_default())
            .limits(self.limits())
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_max_offset() -> Option<f32> {
    Some(DEFAULT_MAX_OFFSET)
}

fn default_dismiss_distance() -> Option<f32> {
    Some(DEFAULT_DISMISS_DISTANCE)
}

fn default_double_tap_scale() -> Option<f32> {
    Some(DEFAULT_DOUBLE_TAP_SCALE)
}

/// Animation names as strings, accepting every spelling `ModalAnimation` parses.
mod animation_name {
    use crate::domain::ui::ModalAnimation;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(value: &Option<ModalAnimation>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(animation) => serializer.serialize_str(animation.name()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<ModalAnimation>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let raw = String::deserialize(deserializer)?;
        raw.parse().map(Some).map_err(D::Error::custom)
    }
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
/// the default config with a warning explaining what went wrong.
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
                    return (
                        Config::default(),
                        Some(format!("ignoring {}: {err}", path.display())),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            gestures: GesturesConfig {
                pan: Some(false),
                focal_zoom: Some(false),
                ..GesturesConfig::default()
            },
            pagination: PaginationConfig { show: Some(false) },
            animation: AnimationConfig {
                modal_in: Some(ModalAnimation::SlideUp),
                image_out: Some(ModalAnimation::FadeLeft),
                ..AnimationConfig::default()
            },
            limits: LimitsConfig {
                max_offset: Some(80.0),
                ..LimitsConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: Config = toml::from_str("[gestures]\npinch = false\n").expect("valid toml");
        let toggles = config.toggles();
        assert!(!toggles.pinch);
        assert!(toggles.pan && toggles.double_tap_to_zoom && toggles.focal_zoom);
        assert_eq!(config.limits(), GestureLimits::default());
        assert_eq!(config.pagination.show, None);
    }

    #[test]
    fn animation_names_accept_legacy_spelling() {
        let config: Config =
            toml::from_str("[animation]\nmodal_in = \"slideIn-down\"\nimage_in = \"fade-right\"\n")
                .expect("valid toml");
        assert_eq!(config.animation.modal_in, Some(ModalAnimation::SlideDown));
        assert_eq!(config.animation.image_in, Some(ModalAnimation::FadeRight));
    }

    #[test]
    fn unknown_animation_is_a_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[animation]\nmodal_in = \"wobble\"\n").expect("write");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(message.contains("wobble")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(CONFIG_FILE), "not = valid = toml").expect("write");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(config, Config::default());
        assert!(warning.is_some(), "should warn about parse error");
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn options_follow_config() {
        let config = Config {
            pagination: PaginationConfig { show: Some(false) },
            animation: AnimationConfig {
                modal_out: Some(ModalAnimation::SlideDown),
                ..AnimationConfig::default()
            },
            ..Config::default()
        };
        let options = config.to_options(vec![ImageRef::from("https://example.com/a.png")]);
        assert!(!options.show_pagination);
        assert_eq!(options.modal_animation_out, ModalAnimation::SlideDown);
        assert_eq!(options.modal_animation_in, ModalAnimation::Fade);
        assert_eq!(options.images.len(), 1);
    }
}
