//! TOML-based display preferences.
//!
//! Stored at `<data_dir>/preferences.toml`. These only affect how numbers
//! are shown; the work configuration lives in the key-value store.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::StorageError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        })
    }
}

impl FromStr for Theme {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(StorageError::Preferences(format!(
                "unknown theme '{other}' (expected dark or light)"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_theme")]
    pub theme: Theme,
    /// ANSI colours in terminal output.
    #[serde(default = "default_true")]
    pub color: bool,
    /// Show the now-playing line in `watch`.
    #[serde(default)]
    pub now_playing: bool,
}

fn default_theme() -> Theme {
    Theme::Dark
}
fn default_true() -> bool {
    true
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            color: true,
            now_playing: false,
        }
    }
}

impl Preferences {
    pub const KEYS: [&'static str; 3] = ["theme", "color", "now_playing"];

    fn path() -> Result<PathBuf, StorageError> {
        Ok(data_dir()?.join("preferences.toml"))
    }

    /// Load from the data directory, or defaults if the file is missing.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, StorageError> {
        Self::load_from(&Self::path()?)
    }

    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, StorageError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| StorageError::Preferences(e.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Load, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load preferences, using defaults");
            Self::default()
        })
    }

    /// # Errors
    /// Returns an error if the preferences cannot be serialized or written.
    pub fn save(&self) -> Result<(), StorageError> {
        self.save_to(&Self::path()?)
    }

    /// # Errors
    /// Returns an error if the preferences cannot be serialized or written.
    pub fn save_to(&self, path: &Path) -> Result<(), StorageError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| StorageError::Preferences(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "theme" => Some(self.theme.to_string()),
            "color" => Some(self.color.to_string()),
            "now_playing" => Some(self.now_playing.to_string()),
            _ => None,
        }
    }

    /// Set one preference from text. `self` is unchanged on error.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let parse_bool = |v: &str| {
            v.trim()
                .parse::<bool>()
                .map_err(|_| StorageError::Preferences(format!("cannot parse '{v}' as bool")))
        };
        match key {
            "theme" => self.theme = value.parse()?,
            "color" => self.color = parse_bool(value)?,
            "now_playing" => self.now_playing = parse_bool(value)?,
            _ => return Err(StorageError::Preferences(format!("unknown key: {key}"))),
        }
        Ok(())
    }
}
