//! Report commands
//!
//! `report view`, `report print` and `report export` aggregate the active
//! account's spending over a date range.

use std::path::PathBuf;

use crate::display::{format_chart, format_printable};
use crate::error::{SaveItError, SaveItResult};
use crate::export::{export_stats_to_file, resolve_target};
use crate::models::{Date, GraphType, OrganiseBy, Report};
use crate::reports::generate_stats;
use crate::services::Model;

use super::parser::{missing_sub_command, no_preamble, required};
use super::tokenizer::{
    tokenize, ArgumentMultimap, Prefix, PREFIX_END_DATE, PREFIX_FILE, PREFIX_GRAPH,
    PREFIX_ORGANISE, PREFIX_START_DATE,
};
use super::{CommandEnv, CommandResult};

pub const VIEW_USAGE: &str = "report view: Shows spending between two dates as a chart.\n\
    Parameters: sd/START_DATE ed/END_DATE g/GRAPH_TYPE [o/ORGANISE_BY]\n\
    GRAPH_TYPE is bar or pie; ORGANISE_BY is tag (default) or month\n\
    Example: report view sd/2020-03-01 ed/2020-03-31 g/pie o/tag";

pub const PRINT_USAGE: &str = "report print: Prints a full report page for two dates.\n\
    Parameters: sd/START_DATE ed/END_DATE g/GRAPH_TYPE [o/ORGANISE_BY]\n\
    Example: report print sd/2020-01-01 ed/2020-06-30 g/bar o/month";

pub const EXPORT_USAGE: &str = "report export: Saves report statistics to a file.\n\
    Parameters: sd/START_DATE ed/END_DATE g/GRAPH_TYPE f/FILE [o/ORGANISE_BY]\n\
    FILE ending in .json or .yaml selects that format, anything else is CSV\n\
    Example: report export sd/2020-03-01 ed/2020-03-31 g/bar f/march.csv";

/// Sub-keywords of `report`
pub const SUB_KEYWORDS: &[&str] = &["view", "print", "export"];

const PREFIXES: &[Prefix] = &[
    PREFIX_START_DATE,
    PREFIX_END_DATE,
    PREFIX_GRAPH,
    PREFIX_ORGANISE,
    PREFIX_FILE,
];

/// Parsed `report` command
#[derive(Debug, Clone, PartialEq)]
pub enum ReportCommand {
    View { report: Report },
    Print { report: Report },
    Export { report: Report, file: PathBuf },
}

impl ReportCommand {
    pub fn parse(sub: &str, args: &str) -> SaveItResult<Self> {
        let map = tokenize(args, PREFIXES);
        match sub.to_lowercase().as_str() {
            "view" => Ok(Self::View {
                report: parse_report(&map, VIEW_USAGE)?,
            }),
            "print" => Ok(Self::Print {
                report: parse_report(&map, PRINT_USAGE)?,
            }),
            "export" => {
                let report = parse_report(&map, EXPORT_USAGE)?;
                let file = required(&map, PREFIX_FILE, EXPORT_USAGE)?;
                if file.is_empty() {
                    return Err(SaveItError::parse("File name cannot be blank", EXPORT_USAGE));
                }
                Ok(Self::Export {
                    report,
                    file: PathBuf::from(file),
                })
            }
            "" => Err(missing_sub_command(&[VIEW_USAGE, PRINT_USAGE, EXPORT_USAGE])),
            _ => Err(SaveItError::UnknownCommand(
                format!("report {}", sub).trim().to_string(),
            )),
        }
    }

    pub fn execute(self, model: &Model, env: &CommandEnv) -> SaveItResult<CommandResult> {
        let account = model.active_account();
        let symbol = &model.settings().currency_symbol;

        match self {
            Self::View { report } => {
                let stats = generate_stats(&report, account)?;
                Ok(CommandResult::message(format_chart(&stats, symbol)))
            }

            Self::Print { report } => {
                let stats = generate_stats(&report, account)?;
                Ok(CommandResult::message(format_printable(
                    &stats,
                    account.name().as_str(),
                    symbol,
                )))
            }

            Self::Export { report, file } => {
                let stats = generate_stats(&report, account)?;
                let target = resolve_target(&file, &env.report_dir);
                export_stats_to_file(&stats, account.name().as_str(), &target)?;
                Ok(CommandResult::message(format!(
                    "Report exported to {}",
                    target.display()
                )))
            }
        }
    }
}

fn parse_report(map: &ArgumentMultimap, usage: &str) -> SaveItResult<Report> {
    no_preamble(map, usage)?;

    let start = Date::parse(required(map, PREFIX_START_DATE, usage)?)?;
    let end = Date::parse(required(map, PREFIX_END_DATE, usage)?)?;

    let graph_text = required(map, PREFIX_GRAPH, usage)?;
    let graph = GraphType::parse(graph_text).ok_or_else(|| {
        SaveItError::parse(format!("Unknown graph type '{}'", graph_text), usage)
    })?;

    let organise = match map.value(PREFIX_ORGANISE) {
        Some(text) => OrganiseBy::parse(text).ok_or_else(|| {
            SaveItError::parse(format!("Unknown grouping '{}'", text), usage)
        })?,
        None => OrganiseBy::default(),
    };

    Report::new(start, end, graph, organise)
}
