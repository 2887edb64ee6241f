//! Account display formatting
//!
//! Formats the account list for terminal output.

use crate::models::Amount;
use crate::services::AccountList;

/// Format every account as a table, marking the active one
pub fn format_account_list(list: &AccountList, symbol: &str) -> String {
    let name_width = list
        .accounts()
        .map(|a| a.name().as_str().chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "  {:<name_width$}  {:>12}  {:>7}  {:>12}\n",
        "Name",
        "Expenditures",
        "Repeats",
        "Total spent",
        name_width = name_width,
    ));

    output.push_str(&format!(
        "  {:-<name_width$}  {:->12}  {:->7}  {:->12}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for account in list.accounts() {
        let marker = if account.name() == list.active_name() {
            '*'
        } else {
            ' '
        };
        let spent: Amount = account.expenditures().iter().map(|e| e.amount).sum();

        output.push_str(&format!(
            "{} {:<name_width$}  {:>12}  {:>7}  {:>12}\n",
            marker,
            account.name(),
            account.expenditures().len(),
            account.repeats().len(),
            spent.format_with_symbol(symbol),
            name_width = name_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountName, Date, Expenditure, Info, Tag};

    #[test]
    fn test_active_account_is_marked() {
        let today = Date::parse("2020-03-22").unwrap();
        let mut list = AccountList::new(today.naive());
        list.add_expenditure(Expenditure::new(
            Info::new("Lunch").unwrap(),
            Amount::new(4.5).unwrap(),
            today,
            Tag::default(),
        ))
        .unwrap();
        list.add_account(AccountName::new("school").unwrap()).unwrap();

        let out = format_account_list(&list, "$");
        let default_line = out.lines().find(|l| l.contains("default")).unwrap();
        let school_line = out.lines().find(|l| l.contains("school")).unwrap();

        assert!(default_line.starts_with('*'));
        assert!(default_line.contains("$4.50"));
        assert!(school_line.starts_with(' '));
    }
}
