//! Logic manager
//!
//! Owns the model and the storage handle. Every command line is parsed,
//! executed and then the account list is written back to disk.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::config::{SaveItPaths, Settings};
use crate::error::{SaveItError, SaveItResult};
use crate::models::BaseExp;
use crate::services::{AccountList, Model};
use crate::storage::Storage;

use super::{parse_command, CommandEnv, CommandResult};

/// Runs command lines against the model and persists the result
#[derive(Debug)]
pub struct LogicManager {
    model: Model,
    storage: Storage,
    env: CommandEnv,
}

impl LogicManager {
    pub fn new(model: Model, storage: Storage, env: CommandEnv) -> Self {
        Self {
            model,
            storage,
            env,
        }
    }

    /// Load settings and data from the configured locations, with today as
    /// the active date
    pub fn open(paths: &SaveItPaths) -> SaveItResult<Self> {
        Self::open_at(paths, Local::now().date_naive())
    }

    /// Load settings and data with the given active date
    ///
    /// A data file that cannot be read starts an empty session instead of
    /// failing. It is first copied alongside with a `.bak` suffix, as the
    /// next successful command overwrites it.
    pub fn open_at(paths: &SaveItPaths, today: NaiveDate) -> SaveItResult<Self> {
        let settings = Settings::load_or_create(paths)?;
        let storage = Storage::from_settings(paths, &settings);

        let accounts = match storage.load(today) {
            Ok(accounts) => accounts,
            Err(e) => {
                warn!(
                    path = %storage.path().display(),
                    error = %e,
                    "Data file could not be loaded, starting with an empty account list"
                );
                back_up_unreadable(storage.path());
                AccountList::new(today)
            }
        };

        let env = CommandEnv {
            report_dir: settings.report_dir(paths),
        };
        Ok(Self::new(Model::new(accounts, settings), storage, env))
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn env(&self) -> &CommandEnv {
        &self.env
    }

    /// Entries currently on screen
    pub fn displayed_list(&self) -> Vec<BaseExp> {
        self.model.filtered_base_exp_list()
    }

    /// Parse and run one command line, then save
    ///
    /// When saving fails the in-memory change stays in place and the failure
    /// is returned as an I/O error.
    pub fn execute(&mut self, line: &str) -> SaveItResult<CommandResult> {
        info!(command = line.trim(), "Executing command");

        let command = parse_command(line)?;
        let result = command.execute(&mut self.model, &self.env)?;

        if let Err(e) = self.storage.save(self.model.account_list()) {
            warn!(
                path = %self.storage.path().display(),
                error = %e,
                "Failed to save account list"
            );
            return Err(SaveItError::Io(format!(
                "Could not save data to file: {}",
                e
            )));
        }

        Ok(result)
    }
}

/// Keep a copy of a data file that failed to load next to it
fn back_up_unreadable(path: &Path) {
    if !path.is_file() {
        return;
    }
    let mut backup = path.as_os_str().to_owned();
    backup.push(".bak");
    let backup = PathBuf::from(backup);
    match fs::copy(path, &backup) {
        Ok(_) => warn!(backup = %backup.display(), "Unreadable data file copied"),
        Err(e) => warn!(
            backup = %backup.display(),
            error = %e,
            "Could not copy unreadable data file"
        ),
    }
}
