//! Display formatting for terminal output
//!
//! Provides utilities for formatting accounts, expenditure lists and report
//! charts for the terminal.

pub mod account;
pub mod expenditure;
pub mod report;

pub use account::format_account_list;
pub use expenditure::format_base_exp_list;
pub use report::{format_chart, format_printable};
