// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Settings are layered: built-in defaults, then the TOML config file, then
//! `PEOPLEMOVER_*` environment variables.

use crate::products::SortBy;
use crate::report::{ReportStyle, DEFAULT_UNKNOWN_PRODUCT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment prefix for overrides, e.g. `PEOPLEMOVER_SORT_BY=location`
pub const ENV_PREFIX: &str = "PEOPLEMOVER";

/// Keys accepted by `peoplemover config`
pub const KEYS: [&str; 4] = ["sort_by", "unknown_product_label", "color", "log_level"];

/// Errors while loading or persisting settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Layered sources could not be merged or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    /// Settings could not be encoded as TOML
    #[error("Failed to encode configuration: {0}")]
    Encode(#[from] toml::ser::Error),
    /// The config file could not be written
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Config file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// Not one of [`KEYS`]
    #[error("Unknown configuration key: {0}. Known keys: {keys}", keys = KEYS.join(", "))]
    UnknownKey(String),
    /// The value does not fit the key
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue {
        /// Key being set
        key: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Default product order for `products`
    pub sort_by: SortBy,
    /// Shown for products missing from a snapshot
    pub unknown_product_label: String,
    /// Colored terminal output
    pub color: bool,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort_by: SortBy::Name,
            unknown_product_label: DEFAULT_UNKNOWN_PRODUCT.to_string(),
            color: true,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Read a single key as text
    pub fn get(&self, key: &str) -> Result<String, SettingsError> {
        match key {
            "sort_by" => Ok(format!("{:?}", self.sort_by).to_lowercase()),
            "unknown_product_label" => Ok(self.unknown_product_label.clone()),
            "color" => Ok(self.color.to_string()),
            "log_level" => Ok(self.log_level.clone()),
            _ => Err(SettingsError::UnknownKey(key.to_string())),
        }
    }

    /// Set a single key from text, validating the value
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        let invalid = |reason: String| SettingsError::InvalidValue {
            key: key.to_string(),
            reason,
        };
        match key {
            "sort_by" => self.sort_by = value.parse().map_err(invalid)?,
            "unknown_product_label" => self.unknown_product_label = value.to_string(),
            "color" => self.color = value.parse().map_err(|e: std::str::ParseBoolError| invalid(e.to_string()))?,
            "log_level" => {
                parse_level(value)?;
                self.log_level = value.to_lowercase();
            }
            _ => return Err(SettingsError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// The configured log level
    pub fn level(&self) -> Result<tracing::Level, SettingsError> {
        parse_level(&self.log_level)
    }

    /// Report rendering options derived from these settings
    #[must_use]
    pub fn report_style(&self, color: bool) -> ReportStyle {
        ReportStyle {
            unknown_product: self.unknown_product_label.clone(),
            color: color && self.color,
        }
    }

    /// Persist as TOML, creating the parent directory
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let write_err = |source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(write_err)
    }
}

fn parse_level(value: &str) -> Result<tracing::Level, SettingsError> {
    value
        .parse::<tracing::Level>()
        .map_err(|e| SettingsError::InvalidValue {
            key: "log_level".to_string(),
            reason: e.to_string(),
        })
}

/// Default config file location
#[must_use]
pub fn default_path() -> PathBuf {
    directories::ProjectDirs::from("com", "peoplemover", "peoplemover")
        .map(|d| d.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("peoplemover.toml"))
}

/// Load settings from defaults, `path` (if it exists) and the environment
pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    let defaults = Settings::default();
    let settings: Settings = config::Config::builder()
        .set_default("sort_by", defaults.get("sort_by")?)?
        .set_default("unknown_product_label", defaults.unknown_product_label)?
        .set_default("color", defaults.color)?
        .set_default("log_level", defaults.log_level)?
        .add_source(config::File::from(path).format(config::FileFormat::Toml).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()?
        .try_deserialize()?;
    settings.level()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let settings = load(&dir.path().join("missing.toml")).unwrap();

        assert_eq!(settings.unknown_product_label, "Unknown Product");
        assert_eq!(settings.sort_by, SortBy::Name);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "sort_by = \"location\"\nunknown_product_label = \"Future Product\"\n").unwrap();

        let settings = load(&path).unwrap();

        assert_eq!(settings.sort_by, SortBy::Location);
        assert_eq!(settings.unknown_product_label, "Future Product");
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_invalid_log_level_in_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_level = \"loud\"\n").unwrap();

        let err = load(&path).unwrap_err();

        assert!(matches!(err, SettingsError::InvalidValue { ref key, .. } if key == "log_level"));
    }

    #[test]
    fn test_set_save_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut settings = Settings::default();

        settings.set("sort_by", "none").unwrap();
        settings.set("color", "false").unwrap();
        settings.save(&path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.sort_by, SortBy::None);
        assert!(!loaded.color);
        assert_eq!(loaded.get("sort_by").unwrap(), "none");
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut settings = Settings::default();

        assert!(matches!(settings.set("colour", "x"), Err(SettingsError::UnknownKey(_))));
        assert!(matches!(
            settings.set("log_level", "loud"),
            Err(SettingsError::InvalidValue { .. })
        ));
        assert!(matches!(
            settings.set("sort_by", "size"),
            Err(SettingsError::InvalidValue { .. })
        ));
        assert_eq!(settings, Settings::default());
    }
}
