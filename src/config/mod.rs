// SPDX-License-Identifier: MPL-2.0
//! This module handles icon configuration, including loading and saving it
//! to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_svg_icon::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Pin the module icons are read from
//! config.host_module = Some("MyApp, Version=1.0.0.0".to_string());
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.host_module, config.host_module);
//! ```

pub mod defaults;

use crate::error::Result;
use crate::module::Locator;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedSvgIcon";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Descriptor of the module used when no host module is resolved.
    #[serde(default = "default_entry_module")]
    pub entry_module: String,
    /// Descriptor of the module owning the icons, bypassing discovery.
    #[serde(default)]
    pub host_module: Option<String>,
    /// Directory exposed as the host module's embedded resources.
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub platform_key_token: Option<String>,
    #[serde(default)]
    pub markup_module: Option<String>,
}

fn default_entry_module() -> String {
    defaults::ENTRY_MODULE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            entry_module: default_entry_module(),
            host_module: None,
            assets_dir: None,
            width: Some(defaults::CANVAS_WIDTH),
            height: Some(defaults::CANVAS_HEIGHT),
            platform_key_token: None,
            markup_module: None,
        }
    }
}

impl Config {
    /// Canvas size, clamped to `1..=MAX_CANVAS_SIDE` per side.
    pub fn canvas_size(&self) -> (u32, u32) {
        let clamp = |value: u32| value.clamp(1, defaults::MAX_CANVAS_SIDE);
        (
            clamp(self.width.unwrap_or(defaults::CANVAS_WIDTH)),
            clamp(self.height.unwrap_or(defaults::CANVAS_HEIGHT)),
        )
    }

    /// Host discovery filters with any configured overrides applied.
    pub fn locator(&self) -> Locator {
        let mut locator = Locator::default();
        if let Some(token) = &self.platform_key_token {
            locator = locator.with_platform_key_token(token.clone());
        }
        if let Some(name) = &self.markup_module {
            locator = locator.with_markup_module(name.clone());
        }
        locator
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a config file. Unparseable content falls back to defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("Ignoring invalid config '{}': {}", path.display(), err);
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = Config {
            entry_module: "Entry, Version=2.0".to_string(),
            host_module: Some("MyApp, Version=1.0.0.0".to_string()),
            assets_dir: Some(PathBuf::from("assets/icons")),
            width: Some(24),
            height: Some(48),
            platform_key_token: Some("feedface".to_string()),
            markup_module: None,
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "width = 32\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.entry_module, defaults::ENTRY_MODULE);
        assert_eq!(loaded.canvas_size(), (32, defaults::CANVAS_HEIGHT));
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn canvas_size_is_clamped() {
        let config = Config {
            width: Some(0),
            height: Some(u32::MAX),
            ..Config::default()
        };
        assert_eq!(config.canvas_size(), (1, defaults::MAX_CANVAS_SIDE));
    }

    #[test]
    fn locator_applies_overrides() {
        let config = Config {
            markup_module: Some("Markup".to_string()),
            ..Config::default()
        };
        let expected = Locator::default().with_markup_module("Markup");
        assert_eq!(config.locator(), expected);
    }
}
