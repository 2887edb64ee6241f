//! Report formatting for terminal output
//!
//! Renders spending statistics as a text bar chart or a text pie (a
//! proportional strip plus a legend of shares).

use tabled::{settings::Style, Table, Tabled};

use crate::models::GraphType;
use crate::reports::{StatRow, Stats};

const CHART_WIDTH: usize = 72;
const BAR_WIDTH: usize = 30;
const LABEL_WIDTH: usize = 20;

/// Fill characters for successive pie slices
const SLICE_GLYPHS: [char; 8] = ['█', '▓', '▒', '░', '#', '*', '+', '='];

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Render statistics with the chart style chosen in the report
pub fn format_chart(stats: &Stats, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", stats.report()));
    output.push_str(&double_separator(CHART_WIDTH));
    output.push('\n');

    if stats.is_empty() {
        output.push_str("No expenditures in this period.\n");
        return output;
    }

    let rows = stats.rows();
    match stats.report().graph() {
        GraphType::Bar => output.push_str(&format_bar_chart(&rows, symbol)),
        GraphType::Pie => output.push_str(&format_pie_chart(&rows, symbol)),
    }

    output.push_str(&separator(CHART_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<width$} {:>12}\n",
        "Total",
        stats.total().format_with_symbol(symbol),
        width = LABEL_WIDTH + BAR_WIDTH + 1
    ));
    output
}

fn format_bar_chart(rows: &[StatRow], symbol: &str) -> String {
    let max = rows
        .iter()
        .map(|r| r.amount.value())
        .fold(0.0_f64, f64::max);

    rows.iter()
        .map(|row| {
            format!(
                "{:<lw$} {} {:>12} {:>6}\n",
                truncate(&row.key, LABEL_WIDTH),
                format_bar(row.amount.value(), max, BAR_WIDTH),
                row.amount.format_with_symbol(symbol),
                format_percentage(row.percentage),
                lw = LABEL_WIDTH
            )
        })
        .collect()
}

fn format_pie_chart(rows: &[StatRow], symbol: &str) -> String {
    let mut strip = String::new();
    let mut used = 0;
    for (i, row) in rows.iter().enumerate() {
        let glyph = SLICE_GLYPHS[i % SLICE_GLYPHS.len()];
        let cells = if i + 1 == rows.len() {
            CHART_WIDTH.saturating_sub(used)
        } else {
            ((row.percentage / 100.0) * CHART_WIDTH as f64).round() as usize
        };
        let cells = cells.min(CHART_WIDTH.saturating_sub(used));
        strip.extend(std::iter::repeat(glyph).take(cells));
        used += cells;
    }

    let mut output = format!("{}\n\n", strip);
    for (i, row) in rows.iter().enumerate() {
        output.push_str(&format!(
            "{} {:<lw$} {:>12} {:>6}\n",
            SLICE_GLYPHS[i % SLICE_GLYPHS.len()],
            truncate(&row.key, LABEL_WIDTH),
            row.amount.format_with_symbol(symbol),
            format_percentage(row.percentage),
            lw = LABEL_WIDTH
        ));
    }
    output
}

#[derive(Tabled)]
struct StatTableRow {
    #[tabled(rename = "Group")]
    key: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Printable page: heading, data table and chart
pub fn format_printable(stats: &Stats, account: &str, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("SaveIt report for account '{}'\n\n", account));

    let rows: Vec<StatTableRow> = stats
        .rows()
        .into_iter()
        .map(|row| StatTableRow {
            key: row.key,
            amount: row.amount.format_with_symbol(symbol),
            share: format_percentage(row.percentage),
        })
        .collect();

    if !rows.is_empty() {
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        output.push_str(&table.to_string());
        output.push_str("\n\n");
    }

    output.push_str(&format_chart(stats, symbol));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Account, AccountName, Amount, Date, Expenditure, Info, OrganiseBy, Report, Tag,
    };

    fn stats(graph: GraphType) -> Stats {
        let mut acc = Account::new(AccountName::new("default").unwrap());
        for (info, amount, tag) in [("Lunch", 30.0, "Food"), ("Bus", 10.0, "Transport")] {
            acc.add_expenditure(Expenditure::new(
                Info::new(info).unwrap(),
                Amount::new(amount).unwrap(),
                Date::parse("2020-03-05").unwrap(),
                Tag::new(tag).unwrap(),
            ))
            .unwrap();
        }
        let report = Report::new(
            Date::parse("2020-03-01").unwrap(),
            Date::parse("2020-03-31").unwrap(),
            graph,
            OrganiseBy::Tag,
        )
        .unwrap();
        Stats::generate(&report, &acc).unwrap()
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("éééééé", 5), "éé...");
    }

    #[test]
    fn test_bar_chart_lists_every_group() {
        let out = format_chart(&stats(GraphType::Bar), "$");
        assert!(out.contains("Food"));
        assert!(out.contains("Transport"));
        assert!(out.contains("$40.00"));
        assert!(out.contains("75%"));
    }

    #[test]
    fn test_pie_strip_fills_width() {
        let out = format_chart(&stats(GraphType::Pie), "$");
        let strip = out.lines().nth(2).unwrap();
        assert_eq!(strip.chars().count(), CHART_WIDTH);
        assert!(out.contains("25%"));
    }

    #[test]
    fn test_printable_has_table_and_heading() {
        let out = format_printable(&stats(GraphType::Bar), "default", "$");
        assert!(out.starts_with("SaveIt report for account 'default'"));
        assert!(out.contains("Group"));
        assert!(out.contains("Share"));
    }
}
