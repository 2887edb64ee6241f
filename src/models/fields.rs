//! Text value objects: expenditure info, category tags and recurrence periods

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Maximum tag length
pub const MAX_TAG_LEN: usize = 20;

/// Tag applied when the user gives none
pub const DEFAULT_TAG: &str = "Others";

/// Free-text description of an expenditure
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Info(String);

impl Info {
    pub fn new(text: &str) -> Result<Self, FieldError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(FieldError::EmptyInfo);
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match against any keyword
    pub fn matches_any(&self, keywords: &[String]) -> bool {
        let text = self.0.to_lowercase();
        keywords
            .iter()
            .filter(|k| !k.is_empty())
            .any(|k| text.contains(&k.to_lowercase()))
    }
}

impl fmt::Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Short category label
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn new(label: &str) -> Result<Self, FieldError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(FieldError::EmptyTag);
        }
        if label.chars().any(char::is_whitespace) {
            return Err(FieldError::TagWhitespace(label.to_string()));
        }
        if label.chars().count() > MAX_TAG_LEN {
            return Err(FieldError::TagTooLong(label.chars().count()));
        }
        Ok(Self(label.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Tag {
    fn default() -> Self {
        Self(DEFAULT_TAG.to_string())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How often a repeat recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    /// Parse period from string
    pub fn parse(s: &str) -> Result<Self, FieldError> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Ok(Self::Daily),
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            other => Err(FieldError::InvalidPeriod(other.to_string())),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

// Tags appear in the settings file
impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Tag::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Validation errors for text fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    EmptyInfo,
    EmptyTag,
    TagWhitespace(String),
    TagTooLong(usize),
    InvalidPeriod(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInfo => write!(f, "Info should not be blank"),
            Self::EmptyTag => write!(f, "Tag should not be blank"),
            Self::TagWhitespace(t) => write!(f, "Tag should be a single word (got '{}')", t),
            Self::TagTooLong(len) => {
                write!(f, "Tag too long ({} chars, max {})", len, MAX_TAG_LEN)
            }
            Self::InvalidPeriod(p) => write!(
                f,
                "Period should be one of: daily, weekly, monthly (got '{}')",
                p
            ),
        }
    }
}

impl std::error::Error for FieldError {}
