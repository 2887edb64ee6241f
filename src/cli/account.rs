//! Account commands
//!
//! Implements `acc add`, `acc rename`, `acc delete`, `acc checkout`,
//! `acc list` and `acc clear`.

use crate::display::format_account_list;
use crate::error::{SaveItError, SaveItResult};
use crate::models::AccountName;
use crate::services::Model;

use super::parser::{missing_sub_command, split_word};
use super::CommandResult;

pub const ADD_USAGE: &str = "acc add: Creates a new account.\n\
    Parameters: NAME\n\
    Example: acc add school";

pub const RENAME_USAGE: &str = "acc rename: Renames an account.\n\
    Parameters: OLD_NAME NEW_NAME\n\
    Example: acc rename school work";

pub const DELETE_USAGE: &str = "acc delete: Deletes an account and everything in it.\n\
    Parameters: NAME\n\
    Example: acc delete school";

pub const CHECKOUT_USAGE: &str = "acc checkout: Switches to another account.\n\
    Parameters: NAME\n\
    Example: acc checkout school";

pub const LIST_USAGE: &str = "acc list: Lists all accounts.";

pub const CLEAR_USAGE: &str =
    "acc clear: Removes every expenditure, repeat and budget from the active account.";

/// Sub-keywords of `acc`
pub const SUB_KEYWORDS: &[&str] = &["add", "rename", "delete", "checkout", "list", "clear"];

/// Parsed `acc` command
#[derive(Debug, Clone, PartialEq)]
pub enum AccountCommand {
    Add { name: AccountName },
    Rename { old: String, new: AccountName },
    Delete { name: String },
    Checkout { name: String },
    List,
    Clear,
}

impl AccountCommand {
    pub fn parse(sub: &str, args: &str) -> SaveItResult<Self> {
        match sub.to_lowercase().as_str() {
            "add" => Ok(Self::Add {
                name: AccountName::new(single_name(args, ADD_USAGE)?)?,
            }),
            "rename" => {
                let (old, rest) = split_word(args);
                let (new, extra) = split_word(rest);
                if old.is_empty() || new.is_empty() || !extra.trim().is_empty() {
                    return Err(SaveItError::parse(
                        "Expected an old and a new account name",
                        RENAME_USAGE,
                    ));
                }
                Ok(Self::Rename {
                    old: old.to_string(),
                    new: AccountName::new(new)?,
                })
            }
            "delete" => Ok(Self::Delete {
                name: single_name(args, DELETE_USAGE)?.to_string(),
            }),
            "checkout" => Ok(Self::Checkout {
                name: single_name(args, CHECKOUT_USAGE)?.to_string(),
            }),
            "list" => Ok(Self::List),
            "clear" => Ok(Self::Clear),
            "" => Err(missing_sub_command(&[
                ADD_USAGE,
                RENAME_USAGE,
                DELETE_USAGE,
                CHECKOUT_USAGE,
                LIST_USAGE,
                CLEAR_USAGE,
            ])),
            _ => Err(SaveItError::UnknownCommand(
                format!("acc {}", sub).trim().to_string(),
            )),
        }
    }

    pub fn execute(self, model: &mut Model) -> SaveItResult<CommandResult> {
        match self {
            Self::Add { name } => {
                let feedback = format!("New account added: {}", name);
                model.add_account(name)?;
                Ok(CommandResult::message(feedback))
            }

            Self::Rename { old, new } => {
                let feedback = format!("Account {} renamed to {}", old, new);
                model.rename_account(&old, new)?;
                Ok(CommandResult::message(feedback))
            }

            Self::Delete { name } => {
                let removed = model.delete_account(&name)?;
                Ok(CommandResult::with_list(format!(
                    "Deleted account: {}\nActive account: {}",
                    removed.name(),
                    model.active_account().name()
                )))
            }

            Self::Checkout { name } => {
                if !model.switch_active_account(&name) {
                    return Err(SaveItError::account_not_found(name));
                }
                Ok(CommandResult::with_list(format!(
                    "Switched to account: {}\n{}",
                    name,
                    model.monthly_spending()
                )))
            }

            Self::List => Ok(CommandResult::message(format_account_list(
                model.account_list(),
                &model.settings().currency_symbol,
            ))),

            Self::Clear => {
                model.clear_active_account()?;
                Ok(CommandResult::with_list(format!(
                    "Account {} has been cleared",
                    model.active_account().name()
                )))
            }
        }
    }
}

/// Exactly one account name
fn single_name<'a>(args: &'a str, usage: &str) -> SaveItResult<&'a str> {
    let (name, extra) = split_word(args);
    if name.is_empty() {
        return Err(SaveItError::parse("Missing account name", usage));
    }
    if !extra.trim().is_empty() {
        return Err(SaveItError::parse(
            "Account names cannot contain spaces",
            usage,
        ));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Amount, Date, Expenditure, Info, Tag};
    use crate::services::AccountList;

    fn model() -> Model {
        let today = Date::parse("2020-03-22").unwrap().naive();
        Model::new(AccountList::new(today), Settings::default())
    }

    fn run(model: &mut Model, line: &str) -> SaveItResult<CommandResult> {
        let (sub, args) = split_word(line);
        AccountCommand::parse(sub, args)?.execute(model)
    }

    #[test]
    fn test_add_and_checkout() {
        let mut m = model();
        run(&mut m, "add school").unwrap();
        run(&mut m, "checkout school").unwrap();
        assert_eq!(m.active_account().name().as_str(), "school");
    }

    #[test]
    fn test_add_duplicate() {
        let mut m = model();
        assert!(run(&mut m, "add default").unwrap_err().is_duplicate());
    }

    #[test]
    fn test_name_with_space_is_parse_error() {
        let mut m = model();
        assert!(run(&mut m, "add my school").unwrap_err().is_parse());
        assert!(run(&mut m, "add").unwrap_err().is_parse());
    }

    #[test]
    fn test_checkout_missing_account() {
        let mut m = model();
        let err = run(&mut m, "checkout nowhere").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(m.active_account().name().as_str(), "default");
    }

    #[test]
    fn test_rename_collision_keeps_both() {
        let mut m = model();
        run(&mut m, "add school").unwrap();
        assert!(run(&mut m, "rename school default").unwrap_err().is_duplicate());
        assert!(m.account_list().has_account("school"));
        assert!(m.account_list().has_account("default"));
    }

    #[test]
    fn test_rename_active_follows() {
        let mut m = model();
        run(&mut m, "rename default personal").unwrap();
        assert_eq!(m.active_account().name().as_str(), "personal");
    }

    #[test]
    fn test_delete_active_falls_back() {
        let mut m = model();
        run(&mut m, "add school").unwrap();
        run(&mut m, "checkout school").unwrap();
        let result = run(&mut m, "delete school").unwrap();

        assert!(result.feedback.contains("Active account: default"));
        assert!(!m.account_list().has_account("school"));
    }

    #[test]
    fn test_clear_empties_active() {
        let mut m = model();
        m.add_expenditure(Expenditure::new(
            Info::new("Lunch").unwrap(),
            Amount::new(3.0).unwrap(),
            Date::parse("2020-03-22").unwrap(),
            Tag::default(),
        ))
        .unwrap();

        run(&mut m, "clear").unwrap();
        assert!(m.active_account().expenditures().is_empty());
        assert!(m.account_list().expenditure_list().is_empty());
    }

    #[test]
    fn test_list_marks_active() {
        let mut m = model();
        run(&mut m, "add school").unwrap();
        let result = run(&mut m, "list").unwrap();
        assert!(result.feedback.contains("school"));
        assert!(result.feedback.contains("default"));
        assert!(!result.show_list);
    }

    #[test]
    fn test_missing_sub_keyword_lists_usages() {
        match AccountCommand::parse("", "").unwrap_err() {
            SaveItError::Parse { usage, .. } => {
                assert!(usage.contains("acc add"));
                assert!(usage.contains("acc checkout"));
                assert!(usage.contains("acc clear"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
