//! CSV export of report statistics

use std::io::Write;

use crate::error::SaveItResult;
use crate::reports::Stats;

/// Write one row per group followed by a total row
pub fn export_stats_csv<W: Write>(stats: &Stats, writer: W) -> SaveItResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let report = stats.report();

    csv_writer.write_record(["Start Date", "End Date", "Group", "Amount", "Percentage"])?;

    let start = report.start().to_string();
    let end = report.end().to_string();

    for row in stats.rows() {
        let amount = format!("{:.2}", row.amount.value());
        let percentage = format!("{:.2}", row.percentage);
        csv_writer.write_record([
            start.as_str(),
            end.as_str(),
            row.key.as_str(),
            amount.as_str(),
            percentage.as_str(),
        ])?;
    }

    let total = format!("{:.2}", stats.total().value());
    let share = if stats.is_empty() { "0.00" } else { "100.00" };
    csv_writer.write_record([start.as_str(), end.as_str(), "TOTAL", total.as_str(), share])?;

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Account, AccountName, Amount, Date, Expenditure, GraphType, Info, OrganiseBy, Report, Tag,
    };

    #[test]
    fn test_csv_rows() {
        let mut acc = Account::new(AccountName::new("default").unwrap());
        for (amount, tag) in [(30.0, "Food"), (10.0, "Fun")] {
            acc.add_expenditure(Expenditure::new(
                Info::new("Item").unwrap(),
                Amount::new(amount).unwrap(),
                Date::parse("2020-03-05").unwrap(),
                Tag::new(tag).unwrap(),
            ))
            .unwrap();
        }
        let report = Report::new(
            Date::parse("2020-03-01").unwrap(),
            Date::parse("2020-03-31").unwrap(),
            GraphType::Bar,
            OrganiseBy::Tag,
        )
        .unwrap();
        let stats = Stats::generate(&report, &acc).unwrap();

        let mut out = Vec::new();
        export_stats_csv(&stats, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Start Date,End Date,Group,Amount,Percentage");
        assert_eq!(lines[1], "2020-03-01,2020-03-31,Food,30.00,75.00");
        assert_eq!(lines[2], "2020-03-01,2020-03-31,Fun,10.00,25.00");
        assert_eq!(lines[3], "2020-03-01,2020-03-31,TOTAL,40.00,100.00");
    }
}
