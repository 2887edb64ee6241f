//! Calendar date value object
//!
//! Dates are written as strict ISO-8601 calendar dates (`YYYY-MM-DD`). Only
//! the canonical zero-padded form is accepted, which keeps the textual and
//! calendar representations in one-to-one correspondence.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::year_month::YearMonth;

/// Message shown when a date fails validation
pub const DATE_CONSTRAINTS: &str = "Date should be in a format of (YYYY-MM-DD), and it should not be blank";

const FORMAT: &str = "%Y-%m-%d";

/// A validated calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    /// Parse a strict `YYYY-MM-DD` date
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let s = s.trim();
        let parsed =
            NaiveDate::parse_from_str(s, FORMAT).map_err(|_| DateError(s.to_string()))?;

        // chrono tolerates unpadded fields; require the canonical spelling
        if parsed.format(FORMAT).to_string() != s {
            return Err(DateError(s.to_string()));
        }

        Ok(Self(parsed))
    }

    /// Get the underlying calendar date
    pub const fn naive(&self) -> NaiveDate {
        self.0
    }

    /// The month this date falls in
    pub fn year_month(&self) -> YearMonth {
        YearMonth::from_date(self.0)
    }

    /// True when `self` is on or before `other`
    pub fn is_on_or_before(&self, other: &Date) -> bool {
        self.0 <= other.0
    }

    /// Inclusive day count from `self` to `end`; zero if `end` is earlier
    pub fn days_through(&self, end: &Date) -> u32 {
        let days = (end.0 - self.0).num_days() + 1;
        u32::try_from(days.max(0)).unwrap_or(u32::MAX)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Error returned for text that is not a canonical ISO date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateError(pub String);

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (got '{}')", DATE_CONSTRAINTS, self.0)
    }
}

impl std::error::Error for DateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for s in ["2020-03-22", "1999-12-31", "2024-02-29", "2000-01-01"] {
            assert_eq!(Date::parse(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(Date::parse("").is_err());
        assert!(Date::parse("2020-02-30").is_err());
        assert!(Date::parse("2021-02-29").is_err());
        assert!(Date::parse("22-03-2020").is_err());
        assert!(Date::parse("2020-3-5").is_err());
        assert!(Date::parse("yesterday").is_err());
    }

    #[test]
    fn test_ordering_is_calendar_order() {
        let a = Date::parse("2019-12-31").unwrap();
        let b = Date::parse("2020-01-01").unwrap();
        assert!(a < b);
        assert!(a.is_on_or_before(&b));
        assert!(a.is_on_or_before(&a));
        assert!(!b.is_on_or_before(&a));
    }

    #[test]
    fn test_days_through() {
        let start = Date::parse("2020-03-01").unwrap();
        let end = Date::parse("2020-03-31").unwrap();
        assert_eq!(start.days_through(&end), 31);
        assert_eq!(start.days_through(&start), 1);
        assert_eq!(end.days_through(&start), 0);
    }

    #[test]
    fn test_year_month() {
        let date = Date::parse("2020-03-22").unwrap();
        assert_eq!(date.year_month().to_string(), "2020-03");
    }

    #[test]
    fn test_serialization() {
        let date = Date::parse("2020-03-22").unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2020-03-22\"");
    }
}
