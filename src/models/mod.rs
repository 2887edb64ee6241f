//! Core data models for SaveIt
//!
//! This module contains the value objects (amounts, dates, tags), the
//! records built from them (expenditures and repeats) and the accounts that
//! own those records.

pub mod account;
pub mod amount;
pub mod base_exp;
pub mod date;
pub mod expenditure;
pub mod fields;
pub mod repeat;
pub mod report;
pub mod unique_list;
pub mod year_month;

pub use account::{Account, AccountName, MonthlySpending, DEFAULT_ACCOUNT};
pub use amount::Amount;
pub use base_exp::BaseExp;
pub use date::Date;
pub use expenditure::Expenditure;
pub use fields::{Info, Period, Tag, DEFAULT_TAG};
pub use repeat::Repeat;
pub use report::{GraphType, OrganiseBy, Report};
pub use unique_list::{ListItem, UniqueList};
pub use year_month::YearMonth;
