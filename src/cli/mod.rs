//! Command layer
//!
//! Turns a line of text into a [`Command`], runs it against the [`Model`] and
//! hands back a [`CommandResult`] for the shell to print. The
//! [`LogicManager`] ties parsing, execution and persistence together.

pub mod account;
pub mod expenditure;
pub mod general;
pub mod logic;
pub mod parser;
pub mod repeat;
pub mod report;
pub mod shell;
pub mod tokenizer;

pub use account::AccountCommand;
pub use expenditure::ExpCommand;
pub use general::GeneralCommand;
pub use logic::LogicManager;
pub use parser::{parse_command, KEYWORDS};
pub use repeat::RepeatCommand;
pub use report::ReportCommand;
pub use shell::{run_shell, ShellMode};

use std::path::PathBuf;

use crate::error::SaveItResult;
use crate::services::Model;

/// Outcome of a command, shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandResult {
    pub feedback: String,
    /// Show the active day's entries after the feedback
    pub show_list: bool,
    /// Leave the shell
    pub exit: bool,
}

impl CommandResult {
    pub fn message(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            ..Self::default()
        }
    }

    pub fn with_list(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_list: true,
            exit: false,
        }
    }

    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_list: false,
            exit: true,
        }
    }
}

/// Process-level settings commands may need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEnv {
    /// Directory relative export names resolve against
    pub report_dir: PathBuf,
}

/// A parsed command line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Expenditure(ExpCommand),
    Repeat(RepeatCommand),
    Account(AccountCommand),
    Report(ReportCommand),
    General(GeneralCommand),
}

impl Command {
    /// Run the command against the model
    pub fn execute(self, model: &mut Model, env: &CommandEnv) -> SaveItResult<CommandResult> {
        match self {
            Self::Expenditure(cmd) => cmd.execute(model),
            Self::Repeat(cmd) => cmd.execute(model),
            Self::Account(cmd) => cmd.execute(model),
            Self::Report(cmd) => cmd.execute(model, env),
            Self::General(cmd) => cmd.execute(model),
        }
    }
}
