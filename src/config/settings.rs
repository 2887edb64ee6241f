//! User settings for SaveIt
//!
//! Manages user preferences: where the account list lives, where reports
//! are exported, the currency symbol and the tag applied when none is given.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::paths::SaveItPaths;
use crate::error::SaveItError;
use crate::models::Tag;

/// User settings for SaveIt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Account list location; relative paths resolve under the base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Report export directory; relative paths resolve under the base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_dir: Option<PathBuf>,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Tag given to entries added without one
    #[serde(default = "default_tag")]
    pub default_tag: Tag,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_tag() -> Tag {
    Tag::default()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            data_file: None,
            report_dir: None,
            currency_symbol: default_currency(),
            default_tag: default_tag(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    pub fn load_or_create(paths: &SaveItPaths) -> Result<Self, SaveItError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SaveItError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SaveItError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SaveItPaths) -> Result<(), SaveItError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SaveItError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            SaveItError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Resolved location of the account list
    pub fn ledger_path(&self, paths: &SaveItPaths) -> PathBuf {
        match &self.data_file {
            Some(file) => under(paths.base_dir(), file),
            None => paths.ledger_file(),
        }
    }

    /// Resolved report export directory
    pub fn report_dir(&self, paths: &SaveItPaths) -> PathBuf {
        match &self.report_dir {
            Some(dir) => under(paths.base_dir(), dir),
            None => paths.reports_dir(),
        }
    }
}

fn under(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
