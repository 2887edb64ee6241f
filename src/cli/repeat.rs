//! Repeat commands
//!
//! `repeat add`, `repeat edit` and `repeat delete`. A repeat is a recurring
//! expense template counted on every day of its date range.

use crate::error::{SaveItError, SaveItResult};
use crate::models::{Amount, Date, Info, Period, Repeat, Tag};
use crate::services::Model;

use super::parser::{missing_sub_command, no_preamble, optional, parse_index, required};
use super::tokenizer::{
    tokenize, Prefix, PREFIX_AMOUNT, PREFIX_END_DATE, PREFIX_INFO, PREFIX_PERIOD,
    PREFIX_START_DATE, PREFIX_TAG,
};
use super::CommandResult;

pub const ADD_USAGE: &str = "repeat add: Adds a recurring expenditure to the active account.\n\
    Parameters: i/INFO a/AMOUNT sd/START_DATE ed/END_DATE p/PERIOD [t/TAG]\n\
    Example: repeat add i/Bus fare a/1.20 sd/2020-03-01 ed/2020-03-31 p/daily t/Transport";

pub const EDIT_USAGE: &str = "repeat edit: Edits the repeat at INDEX in the displayed list.\n\
    Parameters: INDEX [i/INFO] [a/AMOUNT] [sd/START_DATE] [ed/END_DATE] [p/PERIOD] [t/TAG]\n\
    Example: repeat edit 2 ed/2020-04-30";

pub const DELETE_USAGE: &str = "repeat delete: Deletes the repeat at INDEX in the displayed list.\n\
    Parameters: INDEX\n\
    Example: repeat delete 2";

/// Sub-keywords of `repeat`
pub const SUB_KEYWORDS: &[&str] = &["add", "edit", "delete"];

const PREFIXES: &[Prefix] = &[
    PREFIX_INFO,
    PREFIX_AMOUNT,
    PREFIX_START_DATE,
    PREFIX_END_DATE,
    PREFIX_PERIOD,
    PREFIX_TAG,
];

/// Fields to overwrite on an existing repeat
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditRepeatDescriptor {
    pub info: Option<Info>,
    pub amount: Option<Amount>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub period: Option<Period>,
    pub tag: Option<Tag>,
}

impl EditRepeatDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.info.is_some()
            || self.amount.is_some()
            || self.start_date.is_some()
            || self.end_date.is_some()
            || self.period.is_some()
            || self.tag.is_some()
    }

    /// Build the edited repeat, re-checking the date range
    pub fn apply(&self, original: &Repeat) -> SaveItResult<Repeat> {
        let repeat = Repeat::new(
            self.info.clone().unwrap_or_else(|| original.info().clone()),
            self.amount.unwrap_or(original.amount()),
            self.start_date.unwrap_or(original.start_date()),
            self.end_date.unwrap_or(original.end_date()),
            self.tag.clone().unwrap_or_else(|| original.tag().clone()),
            self.period.unwrap_or(original.period()),
        )?;
        Ok(repeat)
    }
}

/// Parsed `repeat` command
#[derive(Debug, Clone, PartialEq)]
pub enum RepeatCommand {
    Add {
        info: Info,
        amount: Amount,
        start_date: Date,
        end_date: Date,
        period: Period,
        tag: Option<Tag>,
    },
    Edit {
        index: usize,
        descriptor: EditRepeatDescriptor,
    },
    Delete {
        index: usize,
    },
}

impl RepeatCommand {
    pub fn parse(sub: &str, args: &str) -> SaveItResult<Self> {
        match sub.to_lowercase().as_str() {
            "add" => Self::parse_add(args),
            "edit" => Self::parse_edit(args),
            "delete" => Ok(Self::Delete {
                index: parse_index(args, DELETE_USAGE)?,
            }),
            "" => Err(missing_sub_command(&[ADD_USAGE, EDIT_USAGE, DELETE_USAGE])),
            _ => Err(SaveItError::UnknownCommand(
                format!("repeat {}", sub).trim().to_string(),
            )),
        }
    }

    fn parse_add(args: &str) -> SaveItResult<Self> {
        let map = tokenize(args, PREFIXES);
        no_preamble(&map, ADD_USAGE)?;

        let start_date = Date::parse(required(&map, PREFIX_START_DATE, ADD_USAGE)?)?;
        let end_date = Date::parse(required(&map, PREFIX_END_DATE, ADD_USAGE)?)?;
        if end_date < start_date {
            return Err(SaveItError::InvalidRange {
                start: start_date.to_string(),
                end: end_date.to_string(),
            });
        }

        Ok(Self::Add {
            info: Info::new(required(&map, PREFIX_INFO, ADD_USAGE)?)?,
            amount: Amount::parse(required(&map, PREFIX_AMOUNT, ADD_USAGE)?)?,
            start_date,
            end_date,
            period: Period::parse(required(&map, PREFIX_PERIOD, ADD_USAGE)?)?,
            tag: optional(&map, PREFIX_TAG, Tag::new)?,
        })
    }

    fn parse_edit(args: &str) -> SaveItResult<Self> {
        let map = tokenize(args, PREFIXES);
        let index = parse_index(map.preamble(), EDIT_USAGE)?;

        let descriptor = EditRepeatDescriptor {
            info: optional(&map, PREFIX_INFO, Info::new)?,
            amount: optional(&map, PREFIX_AMOUNT, Amount::parse)?,
            start_date: optional(&map, PREFIX_START_DATE, Date::parse)?,
            end_date: optional(&map, PREFIX_END_DATE, Date::parse)?,
            period: optional(&map, PREFIX_PERIOD, Period::parse)?,
            tag: optional(&map, PREFIX_TAG, Tag::new)?,
        };
        if !descriptor.is_any_field_edited() {
            return Err(SaveItError::NoFieldsEdited);
        }

        Ok(Self::Edit { index, descriptor })
    }

    pub fn execute(self, model: &mut Model) -> SaveItResult<CommandResult> {
        match self {
            Self::Add {
                info,
                amount,
                start_date,
                end_date,
                period,
                tag,
            } => {
                let tag = tag.unwrap_or_else(|| model.settings().default_tag.clone());
                let repeat = Repeat::new(info, amount, start_date, end_date, tag, period)?;
                model.add_repeat(repeat.clone())?;
                Ok(CommandResult::with_list(format!(
                    "New repeat added: {}",
                    repeat
                )))
            }

            Self::Edit { index, descriptor } => {
                let original = repeat_at(model, index)?;
                let edited = descriptor.apply(&original)?;
                model.replace_repeat(&original, edited.clone())?;
                Ok(CommandResult::with_list(format!("Edited repeat: {}", edited)))
            }

            Self::Delete { index } => {
                let target = repeat_at(model, index)?;
                let removed = model.remove_repeat(&target)?;
                Ok(CommandResult::with_list(format!(
                    "Deleted repeat: {}\n{}",
                    removed,
                    model.monthly_spending()
                )))
            }
        }
    }
}

/// The repeat shown at 1-based `index` in the filtered list
fn repeat_at(model: &Model, index: usize) -> SaveItResult<Repeat> {
    let items = model.filtered_base_exp_list();
    let item = index
        .checked_sub(1)
        .and_then(|i| items.get(i))
        .ok_or(SaveItError::InvalidIndex {
            entity_type: "repeat",
        })?;

    item.as_repeat()
        .cloned()
        .ok_or(SaveItError::TypeMismatch { expected: "repeat" })
}
