//! Expenditure model
//!
//! A single dated transaction. Two expenditures are the same when every
//! field is equal; there is no separate identifier.

use chrono::NaiveDate;
use std::fmt;

use super::amount::Amount;
use super::date::Date;
use super::fields::{Info, Tag};
use super::unique_list::ListItem;

/// A single dated transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expenditure {
    pub info: Info,
    pub amount: Amount,
    pub date: Date,
    pub tag: Tag,
}

impl Expenditure {
    pub fn new(info: Info, amount: Amount, date: Date, tag: Tag) -> Self {
        Self {
            info,
            amount,
            date,
            tag,
        }
    }

    /// Check if this expenditure falls on the given day
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date.naive() == date
    }

    /// Check if this expenditure falls within `[start, end]`
    pub fn is_between(&self, start: &Date, end: &Date) -> bool {
        start.is_on_or_before(&self.date) && self.date.is_on_or_before(end)
    }
}

impl fmt::Display for Expenditure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Amount: {} Date: {} Tag: {}",
            self.info, self.amount, self.date, self.tag
        )
    }
}

impl ListItem for Expenditure {
    const ENTITY: &'static str = "Expenditure";
}
