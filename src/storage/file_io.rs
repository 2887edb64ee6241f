//! JSON document files
//!
//! The ledger is read whole and written through a sibling `.tmp` file that
//! replaces the original by rename.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::SaveItError;

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> SaveItError {
    SaveItError::Storage(format!("{} {}: {}", action, path.display(), err))
}

/// Load a JSON document; a file that is not there yet yields `T::default()`
pub fn read_json<T, P>(path: P) -> Result<T, SaveItError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "No data file, starting empty");
            return Ok(T::default());
        }
        Err(e) => return Err(storage_error("Failed to open", path, e)),
    };

    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| storage_error("Failed to parse", path, e))
}

/// Replace the document at `path` with `data`
///
/// Readers see either the previous file or the complete new one.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), SaveItError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("Failed to create", parent, e))?;
    }

    // must share the target's directory for the rename to be atomic
    let staging = path.with_extension("json.tmp");
    let written = write_staging(&staging, data).and_then(|()| {
        fs::rename(&staging, path).map_err(|e| storage_error("Failed to replace", path, e))
    });
    if written.is_err() {
        let _ = fs::remove_file(&staging);
    }
    written?;

    debug!(path = %path.display(), "Wrote data file");
    Ok(())
}

fn write_staging<T: Serialize>(staging: &Path, data: &T) -> Result<(), SaveItError> {
    let file = File::create(staging).map_err(|e| storage_error("Failed to create", staging, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| storage_error("Failed to serialize into", staging, e))?;
    writer
        .flush()
        .map_err(|e| storage_error("Failed to flush", staging, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| storage_error("Failed to sync", staging, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json_adapted::{
        JsonAdaptedAccount, JsonAdaptedExpenditure, JsonSerializableAccountList,
    };
    use tempfile::TempDir;

    fn ledger_with_lunch() -> JsonSerializableAccountList {
        let mut ledger = JsonSerializableAccountList::default();
        ledger.accounts.insert(
            "default".to_string(),
            JsonAdaptedAccount {
                expenditures: vec![JsonAdaptedExpenditure {
                    info: "Lunch".to_string(),
                    amount: 4.5,
                    date: "2020-03-22".to_string(),
                    tag: Some("Food".to_string()),
                }],
                ..JsonAdaptedAccount::default()
            },
        );
        ledger
    }

    #[test]
    fn test_missing_ledger_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let ledger: JsonSerializableAccountList =
            read_json(temp_dir.path().join("saveit.json")).unwrap();
        assert!(ledger.accounts.is_empty());
    }

    #[test]
    fn test_ledger_written_under_new_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("saveit.json");

        write_json_atomic(&path, &ledger_with_lunch()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"default\""));
        assert!(text.contains("\"Lunch\""));
        let loaded: JsonSerializableAccountList = read_json(&path).unwrap();
        assert_eq!(loaded, ledger_with_lunch());
    }

    #[test]
    fn test_rewrite_replaces_ledger_without_leftovers() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("saveit.json");

        write_json_atomic(&path, &ledger_with_lunch()).unwrap();
        write_json_atomic(&path, &JsonSerializableAccountList::default()).unwrap();

        let loaded: JsonSerializableAccountList = read_json(&path).unwrap();
        assert!(loaded.accounts.is_empty());
        assert!(!temp_dir.path().join("saveit.json.tmp").exists());
    }

    #[test]
    fn test_truncated_ledger_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("saveit.json");
        fs::write(&path, r#"{"default": {"expenditures": ["#).unwrap();

        let err = read_json::<JsonSerializableAccountList, _>(&path).unwrap_err();
        assert!(matches!(err, SaveItError::Storage(_)));
    }
}
