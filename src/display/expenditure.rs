//! Expenditure list formatting
//!
//! Shows the entries for the active date as a numbered table. The numbers
//! are the 1-based indexes that `exp edit`, `exp delete` and the repeat
//! commands accept.

use tabled::{settings::Style, Table, Tabled};

use crate::models::BaseExp;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Info")]
    info: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Tag")]
    tag: String,
}

impl EntryRow {
    fn new(index: usize, item: &BaseExp, symbol: &str) -> Self {
        let when = match item {
            BaseExp::Expenditure(e) => e.date.to_string(),
            BaseExp::Repeat(r) => format!("{} to {} ({})", r.start_date(), r.end_date(), r.period()),
        };

        Self {
            index,
            kind: item.kind(),
            info: item.info().to_string(),
            amount: item.amount().format_with_symbol(symbol),
            when,
            tag: item.tag().to_string(),
        }
    }
}

/// Format the entries shown for the active date
pub fn format_base_exp_list(items: &[BaseExp], symbol: &str) -> String {
    if items.is_empty() {
        return "No expenditures to show.".to_string();
    }

    let rows: Vec<EntryRow> = items
        .iter()
        .enumerate()
        .map(|(i, item)| EntryRow::new(i + 1, item, symbol))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, Date, Expenditure, Info, Period, Repeat, Tag};

    #[test]
    fn test_empty_list() {
        assert_eq!(format_base_exp_list(&[], "$"), "No expenditures to show.");
    }

    #[test]
    fn test_rows_are_numbered_from_one() {
        let items = vec![
            BaseExp::from(Expenditure::new(
                Info::new("Lunch").unwrap(),
                Amount::new(12.5).unwrap(),
                Date::parse("2020-03-22").unwrap(),
                Tag::new("Food").unwrap(),
            )),
            BaseExp::from(
                Repeat::new(
                    Info::new("Gym").unwrap(),
                    Amount::new(2.0).unwrap(),
                    Date::parse("2020-03-01").unwrap(),
                    Date::parse("2020-03-31").unwrap(),
                    Tag::new("Health").unwrap(),
                    Period::Weekly,
                )
                .unwrap(),
            ),
        ];

        let out = format_base_exp_list(&items, "$");
        assert!(out.contains("Lunch"));
        assert!(out.contains("$12.50"));
        assert!(out.contains("2020-03-01 to 2020-03-31 (weekly)"));
        assert!(out.lines().any(|l| l.contains(" 1 ") && l.contains("Lunch")));
        assert!(out.lines().any(|l| l.contains(" 2 ") && l.contains("Gym")));
    }
}
