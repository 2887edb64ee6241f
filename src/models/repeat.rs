//! Recurring expenditure template
//!
//! A repeat describes a cost that recurs over an inclusive date range. It is
//! never expanded into individual expenditures; statistics count one
//! occurrence per active day.

use chrono::NaiveDate;
use std::fmt;

use super::amount::Amount;
use super::date::Date;
use super::fields::{Info, Period, Tag};
use super::unique_list::ListItem;

/// A recurring expenditure over `[start_date, end_date]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Repeat {
    info: Info,
    amount: Amount,
    start_date: Date,
    end_date: Date,
    tag: Tag,
    period: Period,
}

impl Repeat {
    /// Create a repeat, rejecting a start date after the end date
    pub fn new(
        info: Info,
        amount: Amount,
        start_date: Date,
        end_date: Date,
        tag: Tag,
        period: Period,
    ) -> Result<Self, RepeatError> {
        if !start_date.is_on_or_before(&end_date) {
            return Err(RepeatError::EndBeforeStart {
                start: start_date,
                end: end_date,
            });
        }

        Ok(Self {
            info,
            amount,
            start_date,
            end_date,
            tag,
            period,
        })
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn start_date(&self) -> Date {
        self.start_date
    }

    pub fn end_date(&self) -> Date {
        self.end_date
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// True when `date` lies within the active range
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date.naive() <= date && date <= self.end_date.naive()
    }

    /// Number of days in `[start, end]` on which this repeat is active
    pub fn active_days_within(&self, start: &Date, end: &Date) -> u32 {
        let from = self.start_date.max(*start);
        let to = self.end_date.min(*end);
        from.days_through(&to)
    }
}

impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Amount: {} From: {} To: {} Period: {} Tag: {}",
            self.info, self.amount, self.start_date, self.end_date, self.period, self.tag
        )
    }
}

impl ListItem for Repeat {
    const ENTITY: &'static str = "Repeat";
}

/// Errors constructing a repeat
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepeatError {
    EndBeforeStart { start: Date, end: Date },
}

impl fmt::Display for RepeatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndBeforeStart { start, end } => write!(
                f,
                "Start date {} must not be after end date {}",
                start, end
            ),
        }
    }
}

impl std::error::Error for RepeatError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    fn gym(start: &str, end: &str) -> Repeat {
        Repeat::new(
            Info::new("Gym").unwrap(),
            Amount::new(2.0).unwrap(),
            date(start),
            date(end),
            Tag::new("Health").unwrap(),
            Period::Daily,
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_inverted_range() {
        let result = Repeat::new(
            Info::new("Gym").unwrap(),
            Amount::new(2.0).unwrap(),
            date("2020-03-10"),
            date("2020-03-01"),
            Tag::default(),
            Period::Weekly,
        );
        assert!(matches!(result, Err(RepeatError::EndBeforeStart { .. })));
    }

    #[test]
    fn test_single_day_range_allowed() {
        let r = gym("2020-03-10", "2020-03-10");
        assert!(r.is_active_on(date("2020-03-10").naive()));
        assert!(!r.is_active_on(date("2020-03-11").naive()));
    }

    #[test]
    fn test_active_days_within() {
        let r = gym("2020-03-10", "2020-03-20");

        // fully inside
        assert_eq!(r.active_days_within(&date("2020-03-01"), &date("2020-03-31")), 11);
        // partial overlaps at both ends
        assert_eq!(r.active_days_within(&date("2020-03-15"), &date("2020-03-31")), 6);
        assert_eq!(r.active_days_within(&date("2020-03-01"), &date("2020-03-10")), 1);
        // disjoint
        assert_eq!(r.active_days_within(&date("2020-04-01"), &date("2020-04-30")), 0);
    }
}
