//! Path management for SaveIt
//!
//! ## Path Resolution Order
//!
//! 1. Explicit base directory (`--data-dir` or `SAVEIT_DATA_DIR`)
//! 2. The platform configuration directory from `directories::ProjectDirs`
//!    (e.g. `~/.config/saveit` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::SaveItError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "SAVEIT_DATA_DIR";

/// Manages all paths used by SaveIt
#[derive(Debug, Clone)]
pub struct SaveItPaths {
    base_dir: PathBuf,
}

impl SaveItPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SaveItError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create SaveItPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Use `base_dir` when given, otherwise resolve from the environment
    pub fn resolve(base_dir: Option<PathBuf>) -> Result<Self, SaveItError> {
        match base_dir {
            Some(dir) => Ok(Self::with_base_dir(dir)),
            None => Self::new(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the default report export directory (<base>/reports/)
    pub fn reports_dir(&self) -> PathBuf {
        self.base_dir.join("reports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default path of the account list
    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir().join("saveit.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), SaveItError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SaveItError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SaveItError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, SaveItError> {
    ProjectDirs::from("", "", "saveit")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SaveItError::Config("Could not determine a home directory".into()))
}
