//! YAML export of report statistics

use std::io::Write;

use crate::error::{SaveItError, SaveItResult};
use crate::export::json::StatsExport;

/// Write the report document as YAML with a short header comment
pub fn export_stats_yaml<W: Write>(export: &StatsExport, mut writer: W) -> SaveItResult<()> {
    writeln!(writer, "# SaveIt report export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .map_err(|e| SaveItError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export)?;
    Ok(())
}
