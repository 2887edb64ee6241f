//! General commands
//!
//! `go`, `find`, `list`, `help` and `exit`: the commands that move around the
//! ledger rather than change it.

use crate::error::{SaveItError, SaveItResult};
use crate::models::Date;
use crate::services::{InfoFilter, Model};

use super::{account, expenditure, repeat, report, CommandResult};

pub const GO_USAGE: &str = "go: Moves to another date and shows the entries for that day.\n\
    Parameters: DATE\n\
    Example: go 2020-03-22";

pub const FIND_USAGE: &str =
    "find: Lists entries on the active date whose info contains any of the keywords.\n\
    Parameters: KEYWORD [MORE_KEYWORDS]...\n\
    Example: find chicken rice";

pub const LIST_USAGE: &str = "list: Shows every entry on the active date, clearing any find filter.";

pub const HELP_USAGE: &str = "help: Shows usage for all commands, or for one keyword.\n\
    Parameters: [KEYWORD]\n\
    Example: help exp";

pub const EXIT_USAGE: &str = "exit: Saves and leaves SaveIt.";

/// Parsed general command
#[derive(Debug, Clone, PartialEq)]
pub enum GeneralCommand {
    Go { date: Date },
    Find { keywords: Vec<String> },
    List,
    Help { topic: Option<String> },
    Exit,
}

impl GeneralCommand {
    pub fn parse(keyword: &str, args: &str) -> SaveItResult<Self> {
        let args = args.trim();
        match keyword.to_lowercase().as_str() {
            "go" => {
                if args.is_empty() {
                    return Err(SaveItError::parse("Missing date", GO_USAGE));
                }
                Ok(Self::Go {
                    date: Date::parse(args)?,
                })
            }
            "find" => {
                if args.is_empty() {
                    return Err(SaveItError::parse("Missing keyword", FIND_USAGE));
                }
                Ok(Self::Find {
                    keywords: args.split_whitespace().map(str::to_string).collect(),
                })
            }
            "list" => Ok(Self::List),
            "help" => Ok(Self::Help {
                topic: (!args.is_empty()).then(|| args.to_lowercase()),
            }),
            "exit" => Ok(Self::Exit),
            other => Err(SaveItError::UnknownCommand(other.to_string())),
        }
    }

    pub fn execute(self, model: &mut Model) -> SaveItResult<CommandResult> {
        match self {
            Self::Go { date } => {
                model.switch_active_date(date.naive());
                Ok(CommandResult::with_list(format!(
                    "We are at : {}\n{}",
                    date,
                    model.monthly_spending()
                )))
            }

            Self::Find { keywords } => {
                model.update_filter(InfoFilter::new(keywords));
                let count = model.filtered_base_exp_list().len();
                Ok(CommandResult::with_list(format!(
                    "{} expenditures listed!",
                    count
                )))
            }

            Self::List => {
                model.show_all();
                Ok(CommandResult::with_list("Listed all expenditures"))
            }

            Self::Help { topic } => Ok(CommandResult::message(help_text(topic.as_deref())?)),

            Self::Exit => Ok(CommandResult::exit("Exiting SaveIt as requested ...")),
        }
    }
}

/// Usage text for one keyword, or for every command
pub fn help_text(topic: Option<&str>) -> SaveItResult<String> {
    let sections: Vec<&str> = match topic {
        None => all_usages(),
        Some("exp") => vec![
            expenditure::ADD_USAGE,
            expenditure::EDIT_USAGE,
            expenditure::DELETE_USAGE,
            expenditure::SET_BUDGET_USAGE,
        ],
        Some("repeat") => vec![repeat::ADD_USAGE, repeat::EDIT_USAGE, repeat::DELETE_USAGE],
        Some("acc") => account_usages(),
        Some("report") => vec![report::VIEW_USAGE, report::PRINT_USAGE, report::EXPORT_USAGE],
        Some("go") => vec![GO_USAGE],
        Some("find") => vec![FIND_USAGE],
        Some("list") => vec![LIST_USAGE],
        Some("help") => vec![HELP_USAGE],
        Some("exit") => vec![EXIT_USAGE],
        Some(other) => return Err(SaveItError::UnknownCommand(other.to_string())),
    };

    Ok(sections.join("\n\n"))
}

fn account_usages() -> Vec<&'static str> {
    vec![
        account::ADD_USAGE,
        account::RENAME_USAGE,
        account::DELETE_USAGE,
        account::CHECKOUT_USAGE,
        account::LIST_USAGE,
        account::CLEAR_USAGE,
    ]
}

fn all_usages() -> Vec<&'static str> {
    let mut usages = vec![
        expenditure::ADD_USAGE,
        expenditure::EDIT_USAGE,
        expenditure::DELETE_USAGE,
        expenditure::SET_BUDGET_USAGE,
        repeat::ADD_USAGE,
        repeat::EDIT_USAGE,
        repeat::DELETE_USAGE,
    ];
    usages.extend(account_usages());
    usages.extend([
        report::VIEW_USAGE,
        report::PRINT_USAGE,
        report::EXPORT_USAGE,
        GO_USAGE,
        FIND_USAGE,
        LIST_USAGE,
        HELP_USAGE,
        EXIT_USAGE,
    ]);
    usages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Amount, Expenditure, Info, Tag};
    use crate::services::AccountList;

    fn model() -> Model {
        let today = Date::parse("2020-03-22").unwrap().naive();
        let mut m = Model::new(AccountList::new(today), Settings::default());
        for info in ["Chicken rice", "Fish soup", "Bus"] {
            m.add_expenditure(Expenditure::new(
                Info::new(info).unwrap(),
                Amount::new(2.0).unwrap(),
                Date::parse("2020-03-22").unwrap(),
                Tag::default(),
            ))
            .unwrap();
        }
        m
    }

    fn run(model: &mut Model, line: &str) -> SaveItResult<CommandResult> {
        let (keyword, args) = crate::cli::parser::split_word(line);
        GeneralCommand::parse(keyword, args)?.execute(model)
    }

    #[test]
    fn test_find_then_list() {
        let mut m = model();
        let result = run(&mut m, "find RICE soup").unwrap();
        assert_eq!(result.feedback, "2 expenditures listed!");
        assert_eq!(m.filtered_base_exp_list().len(), 2);

        run(&mut m, "list").unwrap();
        assert_eq!(m.filtered_base_exp_list().len(), 3);
    }

    #[test]
    fn test_find_requires_keyword() {
        let mut m = model();
        assert!(run(&mut m, "find   ").unwrap_err().is_parse());
    }

    #[test]
    fn test_go_moves_active_date() {
        let mut m = model();
        let result = run(&mut m, "go 2020-03-23").unwrap();
        assert!(result.feedback.starts_with("We are at : 2020-03-23"));
        assert!(m.filtered_base_exp_list().is_empty());

        assert!(run(&mut m, "go 23/03/2020").unwrap_err().is_validation());
        assert!(run(&mut m, "go").unwrap_err().is_parse());
    }

    #[test]
    fn test_help_topics() {
        let all = help_text(None).unwrap();
        assert!(all.contains("exp add"));
        assert!(all.contains("report export"));

        let acc = help_text(Some("acc")).unwrap();
        assert!(acc.contains("acc rename"));
        assert!(!acc.contains("exp add"));

        assert!(help_text(Some("fly")).is_err());
    }

    #[test]
    fn test_exit_sets_flag() {
        let mut m = model();
        assert!(run(&mut m, "exit").unwrap().exit);
    }
}
