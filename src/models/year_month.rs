//! Calendar month representation
//!
//! Budgets are kept per calendar month, keyed by `YYYY-MM`.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// A calendar month (e.g., "2020-03")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a month, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, YearMonthError> {
        if !(1..=12).contains(&month) {
            return Err(YearMonthError(format!("{}-{}", year, month)));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Parse from "YYYY-MM"
    pub fn parse(s: &str) -> Result<Self, YearMonthError> {
        let s = s.trim();
        let err = || YearMonthError(s.to_string());

        let (year_str, month_str) = s.split_once('-').ok_or_else(err)?;
        if year_str.len() != 4 || month_str.len() != 2 {
            return Err(err());
        }

        let year: i32 = year_str.parse().map_err(|_| err())?;
        let month: u32 = month_str.parse().map_err(|_| err())?;

        Self::new(year, month).map_err(|_| err())
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        // year/month are validated on construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month
    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error for text that is not a `YYYY-MM` month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearMonthError(pub String);

impl fmt::Display for YearMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Year-month should be in a format of (YYYY-MM) (got '{}')",
            self.0
        )
    }
}

impl std::error::Error for YearMonthError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let ym = YearMonth::parse("2020-03").unwrap();
        assert_eq!(ym.year(), 2020);
        assert_eq!(ym.month(), 3);
        assert_eq!(ym.to_string(), "2020-03");

        assert!(YearMonth::parse("2020-13").is_err());
        assert!(YearMonth::parse("2020-3").is_err());
        assert!(YearMonth::parse("March").is_err());
    }

    #[test]
    fn test_month_bounds() {
        let feb = YearMonth::parse("2020-02").unwrap();
        assert_eq!(feb.first_day(), NaiveDate::from_ymd_opt(2020, 2, 1).unwrap());
        assert_eq!(feb.last_day(), NaiveDate::from_ymd_opt(2020, 2, 29).unwrap());

        let dec = YearMonth::parse("2021-12").unwrap();
        assert_eq!(dec.last_day(), NaiveDate::from_ymd_opt(2021, 12, 31).unwrap());
    }

    #[test]
    fn test_ordering() {
        let a = YearMonth::parse("2019-12").unwrap();
        let b = YearMonth::parse("2020-01").unwrap();
        assert!(a < b);
    }
}
