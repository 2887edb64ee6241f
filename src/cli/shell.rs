//! Interactive command shell
//!
//! Reads command lines with rustyline (history and keyword completion) or,
//! in script mode, line by line from stdin.

use std::borrow::Cow;
use std::io::{self, BufRead};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Context as ReadlineContext, Editor, Helper,
};
use tracing::debug;

use crate::display::format_base_exp_list;
use crate::error::{SaveItError, SaveItResult};

use super::{account, expenditure, repeat, report, CommandResult, LogicManager, KEYWORDS};

/// How the shell gets its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellMode {
    Interactive,
    Script,
}

enum LoopControl {
    Continue,
    Exit,
}

/// Run the shell until `exit` or end of input
pub fn run_shell(logic: &mut LogicManager, mode: ShellMode) -> SaveItResult<()> {
    debug!(?mode, "Starting shell");
    match mode {
        ShellMode::Interactive => run_interactive(logic),
        ShellMode::Script => run_script(logic),
    }
}

fn run_interactive(logic: &mut LogicManager) -> SaveItResult<()> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new().map_err(readline_error)?;
    editor.set_helper(Some(CommandHelper));

    println!("Welcome to SaveIt! Type 'help' to see the available commands.");
    println!("{}", render_list(logic));

    loop {
        let prompt = prompt(logic);
        match editor.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();

                if let LoopControl::Exit = handle_line(logic, trimmed) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Goodbye.");
                break;
            }
            Err(err) => return Err(readline_error(err)),
        }
    }

    Ok(())
}

fn run_script(logic: &mut LogicManager) -> SaveItResult<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if let LoopControl::Exit = handle_line(logic, &line) {
            break;
        }
    }
    Ok(())
}

fn handle_line(logic: &mut LogicManager, line: &str) -> LoopControl {
    match logic.execute(line) {
        Ok(result) => {
            println!("{}", render_result(logic, &result));
            if result.exit {
                LoopControl::Exit
            } else {
                LoopControl::Continue
            }
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            LoopControl::Continue
        }
    }
}

fn prompt(logic: &LogicManager) -> String {
    let model = logic.model();
    format!(
        "saveit [{}] {}> ",
        model.active_account().name(),
        model.active_date()
    )
}

/// Command feedback, followed by the displayed entries when requested
pub fn render_result(logic: &LogicManager, result: &CommandResult) -> String {
    if result.show_list {
        format!("{}\n\n{}", result.feedback, render_list(logic))
    } else {
        result.feedback.clone()
    }
}

fn render_list(logic: &LogicManager) -> String {
    let model = logic.model();
    format_base_exp_list(
        &logic.displayed_list(),
        &model.settings().currency_symbol,
    )
}

fn readline_error(err: ReadlineError) -> SaveItError {
    SaveItError::Io(format!("Line editor failed: {}", err))
}

/// Completes the leading keyword, then the sub-keyword of `exp`, `repeat`,
/// `acc` and `report`
struct CommandHelper;

impl CommandHelper {
    fn sub_keywords(keyword: &str) -> &'static [&'static str] {
        match keyword {
            "exp" => expenditure::SUB_KEYWORDS,
            "repeat" => repeat::SUB_KEYWORDS,
            "acc" => account::SUB_KEYWORDS,
            "report" => report::SUB_KEYWORDS,
            _ => &[],
        }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);

        let words: Vec<&str> = prefix[..start].split_whitespace().collect();
        let options: &[&str] = match words.as_slice() {
            [] => KEYWORDS,
            [keyword] => Self::sub_keywords(&keyword.to_ascii_lowercase()),
            _ => &[],
        };

        let needle = prefix[start..].to_ascii_lowercase();
        let candidates = options
            .iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CommandEnv;
    use crate::config::Settings;
    use crate::models::Date;
    use crate::services::{AccountList, Model};
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn complete(line: &str) -> Vec<String> {
        let history = DefaultHistory::new();
        let ctx = ReadlineContext::new(&history);
        let (_, pairs) = CommandHelper.complete(line, line.len(), &ctx).unwrap();
        pairs.into_iter().map(|p| p.replacement).collect()
    }

    #[test]
    fn test_complete_keyword() {
        assert_eq!(complete("re"), vec!["repeat", "report"]);
        assert_eq!(complete("ex"), vec!["exp", "exit"]);
    }

    #[test]
    fn test_complete_sub_keyword() {
        assert_eq!(complete("acc ch"), vec!["checkout"]);
        assert_eq!(complete("report e"), vec!["export"]);
        assert!(complete("exp add i").is_empty());
    }

    #[test]
    fn test_render_result_appends_list() {
        let temp_dir = TempDir::new().unwrap();
        let today = Date::parse("2020-03-22").unwrap().naive();
        let mut logic = LogicManager::new(
            Model::new(AccountList::new(today), Settings::default()),
            Storage::new(temp_dir.path().join("saveit.json")),
            CommandEnv {
                report_dir: temp_dir.path().to_path_buf(),
            },
        );

        let result = logic.execute("exp add i/Lunch a/3").unwrap();
        let text = render_result(&logic, &result);
        assert!(text.starts_with("New expenditure added: Lunch"));
        assert!(text.matches("Lunch").count() >= 2);
    }
}
