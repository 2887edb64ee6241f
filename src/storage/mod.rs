//! Storage layer for SaveIt
//!
//! The account list is kept in a single JSON document, written atomically
//! after every command.

pub mod file_io;
pub mod json_adapted;

pub use file_io::{read_json, write_json_atomic};
pub use json_adapted::{
    JsonAdaptedAccount, JsonAdaptedExpenditure, JsonAdaptedRepeat, JsonSerializableAccountList,
};

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{SaveItPaths, Settings};
use crate::error::SaveItResult;
use crate::services::AccountList;

/// Reads and writes the account list file
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Storage at the location chosen by the settings
    pub fn from_settings(paths: &SaveItPaths, settings: &Settings) -> Self {
        Self::new(settings.ledger_path(paths))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the account list; a missing file yields a fresh "default" account
    pub fn load(&self, today: NaiveDate) -> SaveItResult<AccountList> {
        let document: JsonSerializableAccountList = read_json(&self.path)?;
        let accounts = document.to_model()?;
        debug!(
            path = %self.path.display(),
            accounts = accounts.len(),
            "Loaded account list"
        );
        AccountList::from_accounts(accounts, today)
    }

    /// Write the account list
    pub fn save(&self, accounts: &AccountList) -> SaveItResult<()> {
        let document = JsonSerializableAccountList::from_accounts(accounts.accounts());
        write_json_atomic(&self.path, &document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SaveItError;
    use crate::models::{AccountName, Amount, Date, Expenditure, Info, Tag};
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        Date::parse("2020-03-22").unwrap().naive()
    }

    #[test]
    fn test_missing_file_gives_default_account() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(temp_dir.path().join("saveit.json"));

        let list = storage.load(today()).unwrap();
        assert_eq!(list.active_name().as_str(), "default");
        assert_eq!(list.accounts().count(), 1);
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(temp_dir.path().join("data").join("saveit.json"));

        let mut list = AccountList::new(today());
        list.add_expenditure(Expenditure::new(
            Info::new("Lunch").unwrap(),
            Amount::new(12.5).unwrap(),
            Date::parse("2020-03-22").unwrap(),
            Tag::new("Food").unwrap(),
        ))
        .unwrap();
        list.add_account(AccountName::new("school").unwrap()).unwrap();
        storage.save(&list).unwrap();

        let loaded = storage.load(today()).unwrap();
        assert_eq!(loaded.accounts().count(), 2);
        assert_eq!(loaded.active_name().as_str(), "default");
        assert_eq!(loaded.expenditure_list(), list.expenditure_list());
    }

    #[test]
    fn test_corrupt_entry_fails_whole_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("saveit.json");
        std::fs::write(
            &path,
            r#"{"default": {"expenditures": [{"info": "", "amount": 1.0, "date": "2020-03-22"}]}}"#,
        )
        .unwrap();

        let err = Storage::new(path).load(today()).unwrap_err();
        assert!(matches!(err, SaveItError::DataIntegrity(_)));
    }
}
