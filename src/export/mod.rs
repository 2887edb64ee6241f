//! Export module for SaveIt
//!
//! Writes report statistics to disk in one of three formats, chosen by the
//! target's file extension:
//! - CSV (default): one row per group plus a total row
//! - JSON: machine-readable report document
//! - YAML: human-readable report document

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_stats_csv;
pub use json::{export_stats_json, StatsExport};
pub use yaml::export_stats_yaml;

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{SaveItError, SaveItResult};
use crate::reports::Stats;

/// Output format for an exported report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Pick the format from the file extension; unknown extensions use CSV
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Csv,
        }
    }
}

/// Resolve an export file name against the report directory
pub fn resolve_target(file: &Path, report_dir: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        report_dir.join(file)
    }
}

/// Write `stats` to `path`, refusing to overwrite an existing file
pub fn export_stats_to_file(stats: &Stats, account: &str, path: &Path) -> SaveItResult<()> {
    let format = ExportFormat::from_path(path);
    write_new_file(path, |writer| match format {
        ExportFormat::Csv => export_stats_csv(stats, writer),
        ExportFormat::Json => export_stats_json(&StatsExport::new(stats, account), writer),
        ExportFormat::Yaml => export_stats_yaml(&StatsExport::new(stats, account), writer),
    })?;

    info!(path = %path.display(), ?format, "Exported report");
    Ok(())
}

/// Create `path` and fill it with `write`; a failed write removes the file
fn write_new_file<F>(path: &Path, write: F) -> SaveItResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> SaveItResult<()>,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SaveItError::Export(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => SaveItError::FileAlreadyExists(path.to_path_buf()),
            _ => SaveItError::Export(format!("Failed to create {}: {}", path.display(), e)),
        })?;

    let mut writer = BufWriter::new(file);
    let written = write(&mut writer).and_then(|()| {
        writer
            .flush()
            .map_err(|e| SaveItError::Export(e.to_string()))
    });
    drop(writer);

    if let Err(e) = written {
        warn!(path = %path.display(), error = %e, "Export failed, removing partial file");
        let _ = fs::remove_file(path);
        return Err(e);
    }
    Ok(())
}
