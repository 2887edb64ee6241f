//! JSON export of report statistics

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::SaveItResult;
use crate::models::{Amount, Date, GraphType, OrganiseBy};
use crate::reports::{StatRow, Stats};

/// Serializable report document shared by the JSON and YAML exporters
#[derive(Debug, Clone, Serialize)]
pub struct StatsExport {
    pub account: String,
    pub start_date: Date,
    pub end_date: Date,
    pub organise_by: OrganiseBy,
    pub graph: GraphType,
    pub total: Amount,
    pub rows: Vec<StatRow>,
    pub exported_at: DateTime<Utc>,
}

impl StatsExport {
    pub fn new(stats: &Stats, account: &str) -> Self {
        let report = stats.report();
        Self {
            account: account.to_string(),
            start_date: report.start(),
            end_date: report.end(),
            organise_by: report.organise(),
            graph: report.graph(),
            total: stats.total(),
            rows: stats.rows(),
            exported_at: Utc::now(),
        }
    }
}

/// Write the report document as pretty-printed JSON
pub fn export_stats_json<W: Write>(export: &StatsExport, writer: W) -> SaveItResult<()> {
    serde_json::to_writer_pretty(writer, export)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AccountName, Report};

    #[test]
    fn test_json_document() {
        let acc = Account::new(AccountName::new("school").unwrap());
        let report = Report::new(
            Date::parse("2020-03-01").unwrap(),
            Date::parse("2020-03-31").unwrap(),
            GraphType::Bar,
            OrganiseBy::Month,
        )
        .unwrap();
        let stats = Stats::generate(&report, &acc).unwrap();

        let mut out = Vec::new();
        export_stats_json(&StatsExport::new(&stats, "school"), &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["account"], "school");
        assert_eq!(value["organise_by"], "month");
        assert_eq!(value["start_date"], "2020-03-01");
        assert_eq!(value["total"], 0.0);
        assert!(value["rows"].as_array().unwrap().is_empty());
    }
}
