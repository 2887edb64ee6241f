//! Model facade used by commands
//!
//! Wraps the account list together with the user settings and the current
//! `find` filter. Commands never touch the account list directly.

use chrono::NaiveDate;
use tracing::debug;

use super::account_list::AccountList;
use crate::config::Settings;
use crate::error::SaveItResult;
use crate::models::{
    Account, AccountName, Amount, BaseExp, Expenditure, MonthlySpending, Repeat, YearMonth,
};

/// Keyword filter over entry descriptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoFilter {
    keywords: Vec<String>,
}

impl InfoFilter {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, item: &BaseExp) -> bool {
        item.info().matches_any(&self.keywords)
    }
}

/// Session state shared by every command
#[derive(Debug, Clone)]
pub struct Model {
    accounts: AccountList,
    settings: Settings,
    filter: Option<InfoFilter>,
}

impl Model {
    pub fn new(accounts: AccountList, settings: Settings) -> Self {
        Self {
            accounts,
            settings,
            filter: None,
        }
    }

    pub fn account_list(&self) -> &AccountList {
        &self.accounts
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn active_account(&self) -> &Account {
        self.accounts.active_account()
    }

    pub fn active_date(&self) -> NaiveDate {
        self.accounts.active_date()
    }

    // Filtering

    /// Entries for the active date that pass the current filter
    pub fn filtered_base_exp_list(&self) -> Vec<BaseExp> {
        let items = self.accounts.base_exp_list();
        match &self.filter {
            Some(filter) => items.into_iter().filter(|i| filter.matches(i)).collect(),
            None => items,
        }
    }

    pub fn filter(&self) -> Option<&InfoFilter> {
        self.filter.as_ref()
    }

    pub fn update_filter(&mut self, filter: InfoFilter) {
        debug!(keywords = ?filter.keywords(), "Applying filter");
        self.filter = Some(filter);
    }

    pub fn show_all(&mut self) {
        self.filter = None;
    }

    // Accounts

    pub fn add_account(&mut self, name: AccountName) -> SaveItResult<()> {
        self.accounts.add_account(name)
    }

    pub fn rename_account(&mut self, old: &str, new: AccountName) -> SaveItResult<()> {
        self.accounts.rename_account(old, new)
    }

    pub fn delete_account(&mut self, name: &str) -> SaveItResult<Account> {
        let removed = self.accounts.delete_account(name)?;
        self.show_all();
        Ok(removed)
    }

    pub fn switch_active_account(&mut self, name: &str) -> bool {
        let switched = self.accounts.switch_active_account(name);
        if switched {
            self.show_all();
        }
        switched
    }

    pub fn switch_active_date(&mut self, date: NaiveDate) {
        self.accounts.switch_active_date(date);
    }

    pub fn clear_active_account(&mut self) -> SaveItResult<()> {
        self.accounts.clear_active_account()
    }

    // Entries

    pub fn add_expenditure(&mut self, expenditure: Expenditure) -> SaveItResult<()> {
        self.accounts.add_expenditure(expenditure)?;
        self.show_all();
        Ok(())
    }

    pub fn remove_expenditure(&mut self, expenditure: &Expenditure) -> SaveItResult<Expenditure> {
        self.accounts.remove_expenditure(expenditure)
    }

    pub fn replace_expenditure(
        &mut self,
        old: &Expenditure,
        new: Expenditure,
    ) -> SaveItResult<()> {
        self.accounts.replace_expenditure(old, new)
    }

    pub fn add_repeat(&mut self, repeat: Repeat) -> SaveItResult<()> {
        self.accounts.add_repeat(repeat)?;
        self.show_all();
        Ok(())
    }

    pub fn remove_repeat(&mut self, repeat: &Repeat) -> SaveItResult<Repeat> {
        self.accounts.remove_repeat(repeat)
    }

    pub fn replace_repeat(&mut self, old: &Repeat, new: Repeat) -> SaveItResult<()> {
        self.accounts.replace_repeat(old, new)
    }

    pub fn set_budget(&mut self, year_month: YearMonth, amount: Amount) -> SaveItResult<()> {
        self.accounts.set_budget(year_month, amount)
    }

    pub fn monthly_spending(&self) -> MonthlySpending {
        self.accounts.monthly_spending()
    }
}
