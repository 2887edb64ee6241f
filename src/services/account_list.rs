//! Account list: the session context
//!
//! Holds every account, which one is active, and the date the user is
//! looking at. The expenditure view for the active account and date is
//! rebuilt from scratch after every change so it can never drift from the
//! underlying account.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{SaveItError, SaveItResult};
use crate::models::{
    Account, AccountName, Amount, BaseExp, Expenditure, MonthlySpending, Repeat, YearMonth,
};

/// All accounts plus the active account and date
#[derive(Debug, Clone)]
pub struct AccountList {
    accounts: BTreeMap<AccountName, Account>,
    active: AccountName,
    active_date: NaiveDate,
    view: Vec<Expenditure>,
}

impl AccountList {
    /// A list holding only an empty "default" account
    pub fn new(today: NaiveDate) -> Self {
        let name = AccountName::default_name();
        let mut accounts = BTreeMap::new();
        accounts.insert(name.clone(), Account::new(name.clone()));

        Self::assemble(accounts, name, today)
    }

    /// Build a list from loaded accounts
    ///
    /// "default" becomes active when present, otherwise the first account by
    /// name. An empty input yields a fresh "default" account.
    pub fn from_accounts(accounts: Vec<Account>, today: NaiveDate) -> SaveItResult<Self> {
        let mut by_name = BTreeMap::new();
        for account in accounts {
            let name = account.name().clone();
            if by_name.contains_key(&name) {
                return Err(SaveItError::duplicate_account(name.as_str()));
            }
            by_name.insert(name, account);
        }

        let default_name = AccountName::default_name();
        let active = if by_name.contains_key(&default_name) {
            default_name
        } else {
            match by_name.keys().next() {
                Some(first) => first.clone(),
                None => return Ok(Self::new(today)),
            }
        };

        Ok(Self::assemble(by_name, active, today))
    }

    fn assemble(
        accounts: BTreeMap<AccountName, Account>,
        active: AccountName,
        active_date: NaiveDate,
    ) -> Self {
        let mut list = Self {
            accounts,
            active,
            active_date,
            view: Vec::new(),
        };
        list.refresh_view();
        list
    }

    // Account management

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn account(&self, name: &str) -> Option<&Account> {
        self.accounts.get(name)
    }

    pub fn has_account(&self, name: &str) -> bool {
        self.accounts.contains_key(name)
    }

    pub fn active_account(&self) -> &Account {
        // `active` always names a stored account
        &self.accounts[self.active.as_str()]
    }

    pub fn active_name(&self) -> &AccountName {
        &self.active
    }

    pub fn active_date(&self) -> NaiveDate {
        self.active_date
    }

    /// Add an empty account
    pub fn add_account(&mut self, name: AccountName) -> SaveItResult<()> {
        if self.accounts.contains_key(&name) {
            return Err(SaveItError::duplicate_account(name.as_str()));
        }
        self.accounts.insert(name.clone(), Account::new(name));
        Ok(())
    }

    /// Rename an account; the active pointer follows the rename
    pub fn rename_account(&mut self, old: &str, new: AccountName) -> SaveItResult<()> {
        if !self.accounts.contains_key(old) {
            return Err(SaveItError::account_not_found(old));
        }
        if self.accounts.contains_key(&new) {
            return Err(SaveItError::duplicate_account(new.as_str()));
        }

        let account = self
            .accounts
            .remove(old)
            .ok_or_else(|| SaveItError::account_not_found(old))?;
        let was_active = self.active.as_str() == old;
        self.accounts.insert(new.clone(), account.renamed(new.clone()));
        if was_active {
            self.active = new;
        }

        self.refresh_view();
        Ok(())
    }

    /// Remove an account
    ///
    /// Removing the active account activates "default" (or the first
    /// remaining account). Removing the last account leaves a fresh "default".
    pub fn delete_account(&mut self, name: &str) -> SaveItResult<Account> {
        let removed = self
            .accounts
            .remove(name)
            .ok_or_else(|| SaveItError::account_not_found(name))?;

        if self.accounts.is_empty() {
            let default_name = AccountName::default_name();
            self.accounts
                .insert(default_name.clone(), Account::new(default_name));
        }

        if self.active.as_str() == name {
            let default_name = AccountName::default_name();
            self.active = if self.accounts.contains_key(&default_name) {
                default_name
            } else {
                match self.accounts.keys().next() {
                    Some(first) => first.clone(),
                    None => default_name,
                }
            };
        }

        self.refresh_view();
        Ok(removed)
    }

    /// Make `name` the active account; false if no such account
    pub fn switch_active_account(&mut self, name: &str) -> bool {
        match self.accounts.get_key_value(name) {
            Some((key, _)) => {
                self.active = key.clone();
                self.refresh_view();
                true
            }
            None => false,
        }
    }

    /// Change the date being viewed
    pub fn switch_active_date(&mut self, date: NaiveDate) {
        self.active_date = date;
        self.refresh_view();
    }

    // Active account contents

    pub fn add_expenditure(&mut self, expenditure: Expenditure) -> SaveItResult<()> {
        self.active_account_mut()?.add_expenditure(expenditure)?;
        self.refresh_view();
        Ok(())
    }

    pub fn remove_expenditure(&mut self, expenditure: &Expenditure) -> SaveItResult<Expenditure> {
        let removed = self.active_account_mut()?.remove_expenditure(expenditure)?;
        self.refresh_view();
        Ok(removed)
    }

    pub fn replace_expenditure(
        &mut self,
        old: &Expenditure,
        new: Expenditure,
    ) -> SaveItResult<()> {
        self.active_account_mut()?.replace_expenditure(old, new)?;
        self.refresh_view();
        Ok(())
    }

    pub fn add_repeat(&mut self, repeat: Repeat) -> SaveItResult<()> {
        self.active_account_mut()?.add_repeat(repeat)?;
        self.refresh_view();
        Ok(())
    }

    pub fn remove_repeat(&mut self, repeat: &Repeat) -> SaveItResult<Repeat> {
        let removed = self.active_account_mut()?.remove_repeat(repeat)?;
        self.refresh_view();
        Ok(removed)
    }

    pub fn replace_repeat(&mut self, old: &Repeat, new: Repeat) -> SaveItResult<()> {
        self.active_account_mut()?.replace_repeat(old, new)?;
        self.refresh_view();
        Ok(())
    }

    pub fn set_budget(&mut self, year_month: YearMonth, amount: Amount) -> SaveItResult<()> {
        self.active_account_mut()?.set_budget(year_month, amount);
        Ok(())
    }

    /// Empty the active account
    pub fn clear_active_account(&mut self) -> SaveItResult<()> {
        self.active_account_mut()?.clear();
        self.refresh_view();
        Ok(())
    }

    // Views

    /// Expenditures of the active account on the active date
    pub fn expenditure_list(&self) -> &[Expenditure] {
        &self.view
    }

    /// Expenditures on the active date followed by repeats active on it
    pub fn base_exp_list(&self) -> Vec<BaseExp> {
        let repeats = self.active_account().repeats_on(self.active_date);
        self.view
            .iter()
            .cloned()
            .map(BaseExp::from)
            .chain(repeats.cloned().map(BaseExp::from))
            .collect()
    }

    /// Budget against spending for the active date's month
    pub fn monthly_spending(&self) -> MonthlySpending {
        self.active_account()
            .monthly_spending(YearMonth::from_date(self.active_date))
    }

    fn active_account_mut(&mut self) -> SaveItResult<&mut Account> {
        let name = self.active.as_str();
        self.accounts
            .get_mut(name)
            .ok_or_else(|| SaveItError::account_not_found(name))
    }

    fn refresh_view(&mut self) {
        self.view = self
            .active_account()
            .expenditures_on(self.active_date)
            .cloned()
            .collect();
        debug!(
            account = %self.active,
            date = %self.active_date,
            count = self.view.len(),
            "Refreshed expenditure view"
        );
    }
}
