//! Prefix tokenizer for command arguments
//!
//! Arguments look like `PREAMBLE p1/value p2/value ...`. A prefix only
//! counts when it starts the argument string or follows whitespace, so
//! values are free to contain spaces and slashes (`i/chicken rice a/3.50`).

use std::collections::HashMap;

/// An argument prefix such as `a/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(text: &'static str) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

pub const PREFIX_INFO: Prefix = Prefix::new("i/");
pub const PREFIX_AMOUNT: Prefix = Prefix::new("a/");
pub const PREFIX_DATE: Prefix = Prefix::new("d/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_START_DATE: Prefix = Prefix::new("sd/");
pub const PREFIX_END_DATE: Prefix = Prefix::new("ed/");
pub const PREFIX_PERIOD: Prefix = Prefix::new("p/");
pub const PREFIX_YEAR_MONTH: Prefix = Prefix::new("ym/");
pub const PREFIX_GRAPH: Prefix = Prefix::new("g/");
pub const PREFIX_ORGANISE: Prefix = Prefix::new("o/");
pub const PREFIX_FILE: Prefix = Prefix::new("f/");

/// Values found for each prefix, plus the preamble before the first prefix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first prefix, trimmed
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }
}

/// Split `args` on the given prefixes
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| {
            args.match_indices(prefix.as_str())
                .filter(|(idx, _)| starts_token(args, *idx))
                .map(move |(idx, _)| (idx, *prefix))
        })
        .collect();
    positions.sort_by_key(|(idx, _)| *idx);

    let preamble_end = positions.first().map(|(idx, _)| *idx).unwrap_or(args.len());
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions
            .get(i + 1)
            .map(|(next, _)| *next)
            .unwrap_or(args.len());
        map.values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    map
}

fn starts_token(args: &str, idx: usize) -> bool {
    idx == 0
        || args[..idx]
            .chars()
            .next_back()
            .map(char::is_whitespace)
            .unwrap_or(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[Prefix] = &[
        PREFIX_INFO,
        PREFIX_AMOUNT,
        PREFIX_DATE,
        PREFIX_TAG,
        PREFIX_START_DATE,
        PREFIX_END_DATE,
    ];

    #[test]
    fn test_values_may_contain_spaces() {
        let map = tokenize(" i/chicken rice a/3.50 t/Food", ALL);
        assert_eq!(map.preamble(), "");
        assert_eq!(map.value(PREFIX_INFO), Some("chicken rice"));
        assert_eq!(map.value(PREFIX_AMOUNT), Some("3.50"));
        assert_eq!(map.value(PREFIX_TAG), Some("Food"));
        assert_eq!(map.value(PREFIX_DATE), None);
    }

    #[test]
    fn test_preamble() {
        let map = tokenize("2 a/4", ALL);
        assert_eq!(map.preamble(), "2");
        assert_eq!(map.value(PREFIX_AMOUNT), Some("4"));
    }

    #[test]
    fn test_last_repeated_prefix_wins() {
        let map = tokenize("a/1 a/2 a/3", ALL);
        assert_eq!(map.value(PREFIX_AMOUNT), Some("3"));
    }

    #[test]
    fn test_prefix_inside_word_is_not_split() {
        let map = tokenize("sd/2020-03-01 ed/2020-03-31", ALL);
        assert_eq!(map.value(PREFIX_START_DATE), Some("2020-03-01"));
        assert_eq!(map.value(PREFIX_END_DATE), Some("2020-03-31"));
        assert_eq!(map.value(PREFIX_DATE), None);

        let map = tokenize("i/and/or a/1", ALL);
        assert_eq!(map.value(PREFIX_INFO), Some("and/or"));
    }
}
