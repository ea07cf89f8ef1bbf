//! Configuration file support
//!
//! Loads settings from `$SFHL_CONFIG`, or ~/.sfhl.toml
//! (%USERPROFILE%\.sfhl.toml on Windows).
//!
//! Example:
//! ```toml
//! # sfhl configuration
//! color = true
//!
//! [palette]
//! Keyword = "bright-blue bold"
//! String = "bright-green italic"
//! ```
//!
//! Setting `NO_COLOR` in the environment turns color off regardless.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use toml::{Table, Value};

use crate::error::{HighlightError, Result};
use crate::syntax::{Category, Palette, Style};

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether to emit ANSI colors
    pub color: bool,
    /// Style per category
    pub palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            palette: Palette::default(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os("SFHL_CONFIG") {
            return Some(PathBuf::from(path));
        }

        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".sfhl.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".sfhl.toml"))
        }
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Config::default(),
        };

        if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let table = Self::parse(&contents).map_err(|e| HighlightError::config(path, e))?;

        let mut config = Config::default();
        config.apply(&table)?;
        Ok(config)
    }

    /// Parse config file contents into a TOML table
    fn parse(contents: &str) -> std::result::Result<Table, toml::de::Error> {
        contents.parse::<Table>()
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, table: &Table) -> Result<()> {
        for (key, value) in table {
            match (key.as_str(), value) {
                ("color", value) => match parse_bool(value) {
                    Some(color) => self.color = color,
                    None => warn!("ignoring non-boolean color setting: {}", value),
                },
                ("palette", Value::Table(entries)) => self.apply_palette(entries)?,
                ("palette", _) => warn!("ignoring palette: expected a table of category = style"),
                (key, _) => warn!("ignoring unknown config key: {}", key),
            }
        }
        Ok(())
    }

    fn apply_palette(&mut self, entries: &Table) -> Result<()> {
        for (name, value) in entries {
            let category = Category::from_name(name)
                .ok_or_else(|| HighlightError::UnknownCategory(name.clone()))?;
            let Some(spec) = value.as_str() else {
                warn!("ignoring non-string palette entry for {}", name);
                continue;
            };
            self.palette.set(category, Style::parse(spec)?)?;
        }
        Ok(())
    }
}

/// Read a boolean that may also be written as a string ("yes", "off", ...)
fn parse_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Boolean(b) => Some(*b),
        Value::String(s) => match s.to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        },
        Value::Integer(n) => Some(*n != 0),
        _ => None,
    }
}
