//! Expenditure commands
//!
//! `exp add`, `exp edit`, `exp delete` and `exp setbudget`.

use crate::error::{SaveItError, SaveItResult};
use crate::models::{Amount, Date, Expenditure, Info, Tag, YearMonth};
use crate::services::Model;

use super::parser::{missing_sub_command, no_preamble, optional, parse_index, required};
use super::tokenizer::{
    tokenize, PREFIX_AMOUNT, PREFIX_DATE, PREFIX_INFO, PREFIX_TAG, PREFIX_YEAR_MONTH,
};
use super::CommandResult;

pub const ADD_USAGE: &str = "exp add: Adds an expenditure to the active account.\n\
    Parameters: i/INFO a/AMOUNT [d/DATE] [t/TAG]\n\
    Example: exp add i/Chicken Rice a/3.50 d/2020-03-22 t/Food";

pub const EDIT_USAGE: &str = "exp edit: Edits the expenditure at INDEX in the displayed list.\n\
    Parameters: INDEX [i/INFO] [a/AMOUNT] [d/DATE] [t/TAG]\n\
    Example: exp edit 1 a/4.00";

pub const DELETE_USAGE: &str = "exp delete: Deletes the expenditure at INDEX in the displayed list.\n\
    Parameters: INDEX\n\
    Example: exp delete 1";

pub const SET_BUDGET_USAGE: &str = "exp setbudget: Sets the budget for a month.\n\
    Parameters: a/AMOUNT [ym/YYYY-MM]\n\
    Example: exp setbudget a/300 ym/2020-03";

/// Sub-keywords of `exp`
pub const SUB_KEYWORDS: &[&str] = &["add", "edit", "delete", "setbudget"];

/// Fields to overwrite on an existing expenditure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditExpenditureDescriptor {
    pub info: Option<Info>,
    pub amount: Option<Amount>,
    pub date: Option<Date>,
    pub tag: Option<Tag>,
}

impl EditExpenditureDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.info.is_some() || self.amount.is_some() || self.date.is_some() || self.tag.is_some()
    }

    /// Copy of `original` with the given fields replaced
    pub fn apply(&self, original: &Expenditure) -> Expenditure {
        Expenditure::new(
            self.info.clone().unwrap_or_else(|| original.info.clone()),
            self.amount.unwrap_or(original.amount),
            self.date.unwrap_or(original.date),
            self.tag.clone().unwrap_or_else(|| original.tag.clone()),
        )
    }
}

/// Parsed `exp` command
#[derive(Debug, Clone, PartialEq)]
pub enum ExpCommand {
    Add {
        info: Info,
        amount: Amount,
        date: Option<Date>,
        tag: Option<Tag>,
    },
    Edit {
        index: usize,
        descriptor: EditExpenditureDescriptor,
    },
    Delete {
        index: usize,
    },
    SetBudget {
        amount: Amount,
        year_month: Option<YearMonth>,
    },
}

impl ExpCommand {
    pub fn parse(sub: &str, args: &str) -> SaveItResult<Self> {
        match sub.to_lowercase().as_str() {
            "add" => Self::parse_add(args),
            "edit" => Self::parse_edit(args),
            "delete" => Ok(Self::Delete {
                index: parse_index(args, DELETE_USAGE)?,
            }),
            "setbudget" => Self::parse_set_budget(args),
            "" => Err(missing_sub_command(&[
                ADD_USAGE,
                EDIT_USAGE,
                DELETE_USAGE,
                SET_BUDGET_USAGE,
            ])),
            _ => Err(SaveItError::UnknownCommand(format!("exp {}", sub).trim().to_string())),
        }
    }

    fn parse_add(args: &str) -> SaveItResult<Self> {
        let map = tokenize(args, &[PREFIX_INFO, PREFIX_AMOUNT, PREFIX_DATE, PREFIX_TAG]);
        no_preamble(&map, ADD_USAGE)?;

        Ok(Self::Add {
            info: Info::new(required(&map, PREFIX_INFO, ADD_USAGE)?)?,
            amount: Amount::parse(required(&map, PREFIX_AMOUNT, ADD_USAGE)?)?,
            date: optional(&map, PREFIX_DATE, Date::parse)?,
            tag: optional(&map, PREFIX_TAG, Tag::new)?,
        })
    }

    fn parse_edit(args: &str) -> SaveItResult<Self> {
        let map = tokenize(args, &[PREFIX_INFO, PREFIX_AMOUNT, PREFIX_DATE, PREFIX_TAG]);
        let index = parse_index(map.preamble(), EDIT_USAGE)?;

        let descriptor = EditExpenditureDescriptor {
            info: optional(&map, PREFIX_INFO, Info::new)?,
            amount: optional(&map, PREFIX_AMOUNT, Amount::parse)?,
            date: optional(&map, PREFIX_DATE, Date::parse)?,
            tag: optional(&map, PREFIX_TAG, Tag::new)?,
        };
        if !descriptor.is_any_field_edited() {
            return Err(SaveItError::NoFieldsEdited);
        }

        Ok(Self::Edit { index, descriptor })
    }

    fn parse_set_budget(args: &str) -> SaveItResult<Self> {
        let map = tokenize(args, &[PREFIX_AMOUNT, PREFIX_YEAR_MONTH]);
        no_preamble(&map, SET_BUDGET_USAGE)?;

        Ok(Self::SetBudget {
            amount: Amount::parse(required(&map, PREFIX_AMOUNT, SET_BUDGET_USAGE)?)?,
            year_month: optional(&map, PREFIX_YEAR_MONTH, YearMonth::parse)?,
        })
    }

    pub fn execute(self, model: &mut Model) -> SaveItResult<CommandResult> {
        match self {
            Self::Add {
                info,
                amount,
                date,
                tag,
            } => {
                let expenditure = Expenditure::new(
                    info,
                    amount,
                    date.unwrap_or_else(|| Date::from(model.active_date())),
                    tag.unwrap_or_else(|| model.settings().default_tag.clone()),
                );
                model.add_expenditure(expenditure.clone())?;
                Ok(CommandResult::with_list(format!(
                    "New expenditure added: {}",
                    expenditure
                )))
            }

            Self::Edit { index, descriptor } => {
                let original = expenditure_at(model, index)?;
                let edited = descriptor.apply(&original);
                model.replace_expenditure(&original, edited.clone())?;
                Ok(CommandResult::with_list(format!(
                    "Edited expenditure: {}",
                    edited
                )))
            }

            Self::Delete { index } => {
                let target = expenditure_at(model, index)?;
                let removed = model.remove_expenditure(&target)?;
                Ok(CommandResult::with_list(format!(
                    "Deleted expenditure: {}\n{}",
                    removed,
                    model.monthly_spending()
                )))
            }

            Self::SetBudget { amount, year_month } => {
                let year_month =
                    year_month.unwrap_or_else(|| YearMonth::from_date(model.active_date()));
                model.set_budget(year_month, amount)?;
                Ok(CommandResult::message(format!(
                    "Budget for {} set to {}",
                    year_month,
                    amount.format_with_symbol(&model.settings().currency_symbol)
                )))
            }
        }
    }
}

/// The expenditure shown at 1-based `index` in the filtered list
fn expenditure_at(model: &Model, index: usize) -> SaveItResult<Expenditure> {
    let items = model.filtered_base_exp_list();
    let item = index
        .checked_sub(1)
        .and_then(|i| items.get(i))
        .ok_or(SaveItError::InvalidIndex {
            entity_type: "expenditure",
        })?;

    item.as_expenditure()
        .cloned()
        .ok_or(SaveItError::TypeMismatch {
            expected: "expenditure",
        })
}
