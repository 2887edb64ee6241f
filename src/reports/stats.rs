//! Spending statistics
//!
//! Aggregates an account's spending over a date range, keyed by tag or by
//! calendar month. Repeats contribute their amount once for every day they
//! are active inside the range, whatever their period.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::SaveItResult;
use crate::models::{Account, Amount, Date, OrganiseBy, Report, YearMonth};

/// One aggregated row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRow {
    /// Tag name or `YYYY-MM`
    pub key: String,
    pub amount: Amount,
    /// Share of the total, 0-100
    pub percentage: f64,
}

/// Aggregated spending for a report
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    report: Report,
    totals: BTreeMap<String, Amount>,
}

/// Aggregate `account` according to `report`
pub fn generate_stats(report: &Report, account: &Account) -> SaveItResult<Stats> {
    Stats::generate(report, account)
}

impl Stats {
    /// Build statistics for the report's range and grouping
    pub fn generate(report: &Report, account: &Account) -> SaveItResult<Self> {
        let start = report.start();
        let end = report.end();
        let mut totals: BTreeMap<String, Amount> = BTreeMap::new();

        for (_, day) in account.expenditures_between(&start, &end)? {
            for exp in day {
                let key = match report.organise() {
                    OrganiseBy::Tag => exp.tag.to_string(),
                    OrganiseBy::Month => exp.date.year_month().to_string(),
                };
                *totals.entry(key).or_default() += exp.amount;
            }
        }

        for (repeat, days) in account.repeats_between(&start, &end)? {
            match report.organise() {
                OrganiseBy::Tag => {
                    *totals.entry(repeat.tag().to_string()).or_default() += repeat.amount() * days;
                }
                OrganiseBy::Month => {
                    let from = repeat.start_date().max(start);
                    let to = repeat.end_date().min(end);
                    for (month, month_days) in days_per_month(from, to) {
                        *totals.entry(month.to_string()).or_default() +=
                            repeat.amount() * month_days;
                    }
                }
            }
        }

        Ok(Self {
            report: *report,
            totals,
        })
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Totals by key, in key order
    pub fn totals(&self) -> &BTreeMap<String, Amount> {
        &self.totals
    }

    pub fn get(&self, key: &str) -> Option<Amount> {
        self.totals.get(key).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Sum of every group
    pub fn total(&self) -> Amount {
        self.totals.values().copied().sum()
    }

    /// Share of the total for `key`, 0-100
    pub fn percentage(&self, key: &str) -> f64 {
        let total = self.total();
        match self.totals.get(key) {
            Some(amount) if !total.is_zero() => amount.value() / total.value() * 100.0,
            _ => 0.0,
        }
    }

    /// Rows in key order with percentages filled in
    pub fn rows(&self) -> Vec<StatRow> {
        self.totals
            .iter()
            .map(|(key, amount)| StatRow {
                key: key.clone(),
                amount: *amount,
                percentage: self.percentage(key),
            })
            .collect()
    }
}

/// Split `[from, to]` into calendar months with day counts
fn days_per_month(from: Date, to: Date) -> Vec<(YearMonth, u32)> {
    let mut out = Vec::new();
    let mut cursor = from;

    while cursor.is_on_or_before(&to) {
        let month = cursor.year_month();
        let month_end = Date::from(month.last_day()).min(to);
        out.push((month, cursor.days_through(&month_end)));

        match month_end.naive().succ_opt() {
            Some(next) => cursor = Date::from(next),
            None => break,
        }
    }

    out
}
