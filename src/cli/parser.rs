//! Command line parsing
//!
//! Splits a line into its keyword, optional sub-keyword and arguments, then
//! hands the arguments to the parser of the matching command family.

use crate::error::{SaveItError, SaveItResult};

use super::account::AccountCommand;
use super::expenditure::ExpCommand;
use super::general::GeneralCommand;
use super::repeat::RepeatCommand;
use super::report::ReportCommand;
use super::tokenizer::{ArgumentMultimap, Prefix};
use super::Command;

/// Leading keywords understood by the shell
pub const KEYWORDS: &[&str] = &[
    "exp", "repeat", "acc", "report", "go", "find", "list", "help", "exit",
];

/// Parse one command line
pub fn parse_command(line: &str) -> SaveItResult<Command> {
    let line = line.trim();
    let (keyword, rest) = split_word(line);

    match keyword.to_lowercase().as_str() {
        "exp" => {
            let (sub, args) = split_word(rest);
            Ok(Command::Expenditure(ExpCommand::parse(sub, args)?))
        }
        "repeat" => {
            let (sub, args) = split_word(rest);
            Ok(Command::Repeat(RepeatCommand::parse(sub, args)?))
        }
        "acc" => {
            let (sub, args) = split_word(rest);
            Ok(Command::Account(AccountCommand::parse(sub, args)?))
        }
        "report" => {
            let (sub, args) = split_word(rest);
            Ok(Command::Report(ReportCommand::parse(sub, args)?))
        }
        "go" | "find" | "list" | "help" | "exit" => {
            Ok(Command::General(GeneralCommand::parse(keyword, rest)?))
        }
        _ => Err(SaveItError::UnknownCommand(keyword.to_string())),
    }
}

/// Split off the first whitespace-delimited word
pub fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(idx) => (&text[..idx], &text[idx..]),
        None => (text, ""),
    }
}

/// Error for a family keyword given without a sub-command, listing every
/// usage of that family
pub fn missing_sub_command(usages: &[&str]) -> SaveItError {
    SaveItError::parse("Missing sub-command", usages.join("\n\n"))
}

/// Parse a 1-based list index
pub fn parse_index(text: &str, usage: &str) -> SaveItResult<usize> {
    match text.trim().parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(SaveItError::parse(
            "Index is not a non-zero unsigned integer.",
            usage,
        )),
    }
}

/// Value of a prefix that must be present
pub fn required<'a>(map: &'a ArgumentMultimap, prefix: Prefix, usage: &str) -> SaveItResult<&'a str> {
    map.value(prefix)
        .ok_or_else(|| SaveItError::parse(format!("Missing {}", prefix.as_str()), usage))
}

/// Reject a non-empty preamble
pub fn no_preamble(map: &ArgumentMultimap, usage: &str) -> SaveItResult<()> {
    if map.preamble().is_empty() {
        Ok(())
    } else {
        Err(SaveItError::parse(
            format!("Unexpected text '{}'", map.preamble()),
            usage,
        ))
    }
}

/// Parse an optional prefixed value
pub fn optional<T, E, F>(map: &ArgumentMultimap, prefix: Prefix, parse: F) -> SaveItResult<Option<T>>
where
    F: FnOnce(&str) -> Result<T, E>,
    SaveItError: From<E>,
{
    match map.value(prefix) {
        Some(text) => Ok(Some(parse(text)?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::expenditure::ExpCommand;

    #[test]
    fn test_unknown_keyword() {
        let err = parse_command("launch rockets").unwrap_err();
        assert!(matches!(err, SaveItError::UnknownCommand(ref k) if k == "launch"));
        assert!(err.is_parse());
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        assert!(matches!(
            parse_command("EXP add i/Lunch a/3").unwrap(),
            Command::Expenditure(ExpCommand::Add { .. })
        ));
    }

    #[test]
    fn test_split_word() {
        assert_eq!(split_word("  exp add i/x"), ("exp", " add i/x"));
        assert_eq!(split_word("list"), ("list", ""));
        assert_eq!(split_word(""), ("", ""));
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index(" 3 ", "usage").unwrap(), 3);
        assert!(parse_index("0", "usage").unwrap_err().is_parse());
        assert!(parse_index("-1", "usage").is_err());
        assert!(parse_index("one", "usage").is_err());
    }

    #[test]
    fn test_empty_line_is_unknown() {
        assert!(matches!(
            parse_command("   ").unwrap_err(),
            SaveItError::UnknownCommand(_)
        ));
    }

    #[test]
    fn test_bare_family_keyword_is_parse_error() {
        for line in ["exp", "repeat", "acc", "report"] {
            let err = parse_command(line).unwrap_err();
            assert!(
                matches!(err, SaveItError::Parse { .. }),
                "{} gave {:?}",
                line,
                err
            );
        }
    }
}
