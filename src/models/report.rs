//! Report request model
//!
//! A report aggregates spending over an inclusive date range, grouped by tag
//! or by month, and is presented as a bar or pie chart.

use serde::Serialize;
use std::fmt;

use super::date::Date;
use crate::error::{SaveItError, SaveItResult};

/// Chart style for a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphType {
    Bar,
    Pie,
}

impl GraphType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bar" => Some(Self::Bar),
            "pie" => Some(Self::Pie),
            _ => None,
        }
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bar => write!(f, "bar"),
            Self::Pie => write!(f, "pie"),
        }
    }
}

/// Grouping key for report statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganiseBy {
    #[default]
    Tag,
    Month,
}

impl OrganiseBy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "tag" => Some(Self::Tag),
            "month" => Some(Self::Month),
            _ => None,
        }
    }
}

impl fmt::Display for OrganiseBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag => write!(f, "tag"),
            Self::Month => write!(f, "month"),
        }
    }
}

/// A validated report request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    start: Date,
    end: Date,
    graph: GraphType,
    organise: OrganiseBy,
}

impl Report {
    /// Create a report request; fails if `start` is after `end`
    pub fn new(start: Date, end: Date, graph: GraphType, organise: OrganiseBy) -> SaveItResult<Self> {
        if !start.is_on_or_before(&end) {
            return Err(SaveItError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self {
            start,
            end,
            graph,
            organise,
        })
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Date {
        self.end
    }

    pub fn graph(&self) -> GraphType {
        self.graph
    }

    pub fn organise(&self) -> OrganiseBy {
        self.organise
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Expenditure by {} from {} to {}",
            self.organise, self.start, self.end
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_inverted_range() {
        let start = Date::parse("2020-03-31").unwrap();
        let end = Date::parse("2020-03-01").unwrap();
        let err = Report::new(start, end, GraphType::Bar, OrganiseBy::Tag).unwrap_err();
        assert!(matches!(err, SaveItError::InvalidRange { .. }));
    }

    #[test]
    fn test_parse_options() {
        assert_eq!(GraphType::parse("PIE"), Some(GraphType::Pie));
        assert_eq!(GraphType::parse("line"), None);
        assert_eq!(OrganiseBy::parse("month"), Some(OrganiseBy::Month));
        assert_eq!(OrganiseBy::default(), OrganiseBy::Tag);
    }

    #[test]
    fn test_display() {
        let d = Date::parse("2020-03-01").unwrap();
        let report = Report::new(d, d, GraphType::Pie, OrganiseBy::Month).unwrap();
        assert_eq!(
            report.to_string(),
            "Expenditure by month from 2020-03-01 to 2020-03-01"
        );
    }
}
