//! Account model
//!
//! An account is a named ledger owning its expenditures, repeats and
//! monthly budgets. Several accounts can be kept side by side (e.g. "default"
//! and "school") and one of them is active at a time.

use chrono::NaiveDate;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use super::amount::Amount;
use super::date::Date;
use super::expenditure::Expenditure;
use super::repeat::Repeat;
use super::unique_list::UniqueList;
use super::year_month::YearMonth;
use crate::error::{SaveItError, SaveItResult};

/// Name of the account created when none exists
pub const DEFAULT_ACCOUNT: &str = "default";

/// Maximum account name length
pub const MAX_ACCOUNT_NAME_LEN: usize = 20;

/// A validated account name: one word, at most 20 characters
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountName(String);

impl AccountName {
    pub fn new(name: &str) -> Result<Self, AccountValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AccountValidationError::EmptyName);
        }
        if name.chars().any(char::is_whitespace) {
            return Err(AccountValidationError::NameHasWhitespace(name.to_string()));
        }
        let len = name.chars().count();
        if len > MAX_ACCOUNT_NAME_LEN {
            return Err(AccountValidationError::NameTooLong(len));
        }
        Ok(Self(name.to_string()))
    }

    /// The name of the account created on first run
    pub fn default_name() -> Self {
        Self(DEFAULT_ACCOUNT.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AccountName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Budget and spending for one calendar month
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlySpending {
    pub year_month: YearMonth,
    pub budget: Option<Amount>,
    pub total_spending: Amount,
}

impl MonthlySpending {
    /// Budget left over; `None` when no budget is set or it is exceeded
    pub fn remaining(&self) -> Option<Amount> {
        let budget = self.budget?;
        Amount::new(budget.value() - self.total_spending.value()).ok()
    }

    pub fn is_over_budget(&self) -> bool {
        self.budget
            .map(|b| self.total_spending.value() > b.value())
            .unwrap_or(false)
    }
}

impl fmt::Display for MonthlySpending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let budget = match self.budget {
            Some(budget) => budget,
            None => {
                return write!(
                    f,
                    "{}: spent {} (no budget set)",
                    self.year_month, self.total_spending
                )
            }
        };

        write!(
            f,
            "{}: spent {} of budget {}",
            self.year_month, self.total_spending, budget
        )?;
        if self.is_over_budget() {
            write!(f, ", over budget!")
        } else if let Some(left) = self.remaining() {
            write!(f, ", {} remaining", left)
        } else {
            Ok(())
        }
    }
}

/// A named ledger
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    name: AccountName,
    expenditures: UniqueList<Expenditure>,
    repeats: UniqueList<Repeat>,
    budgets: BTreeMap<YearMonth, Amount>,
}

impl Account {
    /// Create an empty account
    pub fn new(name: AccountName) -> Self {
        Self {
            name,
            expenditures: UniqueList::new(),
            repeats: UniqueList::new(),
            budgets: BTreeMap::new(),
        }
    }

    /// Assemble an account from already validated parts
    pub fn with_contents(
        name: AccountName,
        expenditures: UniqueList<Expenditure>,
        repeats: UniqueList<Repeat>,
        budgets: BTreeMap<YearMonth, Amount>,
    ) -> Self {
        Self {
            name,
            expenditures,
            repeats,
            budgets,
        }
    }

    pub fn name(&self) -> &AccountName {
        &self.name
    }

    pub fn expenditures(&self) -> &UniqueList<Expenditure> {
        &self.expenditures
    }

    pub fn repeats(&self) -> &UniqueList<Repeat> {
        &self.repeats
    }

    pub fn budgets(&self) -> &BTreeMap<YearMonth, Amount> {
        &self.budgets
    }

    pub fn add_expenditure(&mut self, expenditure: Expenditure) -> SaveItResult<()> {
        self.expenditures.add(expenditure)
    }

    pub fn remove_expenditure(&mut self, expenditure: &Expenditure) -> SaveItResult<Expenditure> {
        self.expenditures.remove(expenditure)
    }

    pub fn replace_expenditure(
        &mut self,
        old: &Expenditure,
        new: Expenditure,
    ) -> SaveItResult<()> {
        self.expenditures.replace(old, new)
    }

    pub fn add_repeat(&mut self, repeat: Repeat) -> SaveItResult<()> {
        self.repeats.add(repeat)
    }

    pub fn remove_repeat(&mut self, repeat: &Repeat) -> SaveItResult<Repeat> {
        self.repeats.remove(repeat)
    }

    pub fn replace_repeat(&mut self, old: &Repeat, new: Repeat) -> SaveItResult<()> {
        self.repeats.replace(old, new)
    }

    /// Expenditures dated `date`, in insertion order
    pub fn expenditures_on(
        &self,
        date: NaiveDate,
    ) -> impl Iterator<Item = &Expenditure> + Clone + '_ {
        self.expenditures.iter().filter(move |e| e.is_on(date))
    }

    /// Expenditures in `[start, end]` grouped by day
    pub fn expenditures_between(
        &self,
        start: &Date,
        end: &Date,
    ) -> SaveItResult<BTreeMap<Date, UniqueList<Expenditure>>> {
        check_range(start, end)?;

        let mut by_day: BTreeMap<Date, UniqueList<Expenditure>> = BTreeMap::new();
        for exp in self.expenditures.iter().filter(|e| e.is_between(start, end)) {
            by_day.entry(exp.date).or_default().add(exp.clone())?;
        }
        Ok(by_day)
    }

    /// Repeats active on `date`
    pub fn repeats_on(&self, date: NaiveDate) -> impl Iterator<Item = &Repeat> + Clone + '_ {
        self.repeats.iter().filter(move |r| r.is_active_on(date))
    }

    /// Repeats overlapping `[start, end]` with their active day counts
    pub fn repeats_between(&self, start: &Date, end: &Date) -> SaveItResult<Vec<(&Repeat, u32)>> {
        check_range(start, end)?;

        Ok(self
            .repeats
            .iter()
            .map(|r| (r, r.active_days_within(start, end)))
            .filter(|(_, days)| *days > 0)
            .collect())
    }

    /// Set (or overwrite) the budget for a month
    pub fn set_budget(&mut self, year_month: YearMonth, amount: Amount) {
        self.budgets.insert(year_month, amount);
    }

    pub fn budget_for(&self, year_month: &YearMonth) -> Option<Amount> {
        self.budgets.get(year_month).copied()
    }

    /// Budget against total spending for a month
    pub fn monthly_spending(&self, year_month: YearMonth) -> MonthlySpending {
        let start = Date::from(year_month.first_day());
        let end = Date::from(year_month.last_day());

        let one_off: Amount = self
            .expenditures
            .iter()
            .filter(|e| e.is_between(&start, &end))
            .map(|e| e.amount)
            .sum();
        let recurring: Amount = self
            .repeats
            .iter()
            .map(|r| r.amount() * r.active_days_within(&start, &end))
            .sum();

        MonthlySpending {
            year_month,
            budget: self.budget_for(&year_month),
            total_spending: one_off + recurring,
        }
    }

    /// Copy of this account under a new name
    pub fn renamed(&self, name: AccountName) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }

    /// Drop every expenditure, repeat and budget
    pub fn clear(&mut self) {
        self.expenditures.clear();
        self.repeats.clear();
        self.budgets.clear();
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} expenditures, {} repeats)",
            self.name,
            self.expenditures.len(),
            self.repeats.len()
        )
    }
}

fn check_range(start: &Date, end: &Date) -> SaveItResult<()> {
    if start.is_on_or_before(end) {
        Ok(())
    } else {
        Err(SaveItError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        })
    }
}

/// Validation errors for account names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameHasWhitespace(String),
    NameTooLong(usize),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameHasWhitespace(name) => {
                write!(f, "Account name should be a single word (got '{}')", name)
            }
            Self::NameTooLong(len) => write!(
                f,
                "Account name too long ({} chars, max {})",
                len, MAX_ACCOUNT_NAME_LEN
            ),
        }
    }
}

impl std::error::Error for AccountValidationError {}
