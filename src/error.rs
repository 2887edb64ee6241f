//! Custom error types for SaveIt
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Errors fall into four families: parse
//! errors (bad command text), validation errors (bad field values), command
//! errors (domain rules) and I/O failures (storage and export).

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for SaveIt operations
#[derive(Error, Debug)]
pub enum SaveItError {
    /// Malformed command text; `usage` echoes the expected format
    #[error("Invalid command format! {message}\n{usage}")]
    Parse { message: String, usage: String },

    /// Leading keyword matched no command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Validation errors for value objects
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Index outside the displayed list
    #[error("The {entity_type} index provided is invalid")]
    InvalidIndex { entity_type: &'static str },

    /// Item at the index is of the wrong variant
    #[error("The item at the given index is not a {expected}")]
    TypeMismatch { expected: &'static str },

    /// Start date after end date
    #[error("Start date {start} must not be after end date {end}")]
    InvalidRange { start: String, end: String },

    /// Edit command carried no field overrides
    #[error("At least one field to edit must be provided")]
    NoFieldsEdited,

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persisted data violates model constraints
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Export target already present
    #[error("File already exists: {}", .0.display())]
    FileAlreadyExists(PathBuf),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SaveItError {
    /// Create a parse error carrying the command's usage text
    pub fn parse(message: impl Into<String>, usage: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            usage: usage.into(),
        }
    }

    /// Create a "not found" error for accounts
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for accounts
    pub fn duplicate_account(identifier: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type: "Account",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a "duplicate" error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from reading the command text
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::UnknownCommand(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SaveItError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SaveItError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for SaveItError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for SaveItError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<crate::models::amount::AmountError> for SaveItError {
    fn from(err: crate::models::amount::AmountError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<crate::models::date::DateError> for SaveItError {
    fn from(err: crate::models::date::DateError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<crate::models::year_month::YearMonthError> for SaveItError {
    fn from(err: crate::models::year_month::YearMonthError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<crate::models::fields::FieldError> for SaveItError {
    fn from(err: crate::models::fields::FieldError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<crate::models::account::AccountValidationError> for SaveItError {
    fn from(err: crate::models::account::AccountValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<crate::models::repeat::RepeatError> for SaveItError {
    fn from(err: crate::models::repeat::RepeatError) -> Self {
        match err {
            crate::models::repeat::RepeatError::EndBeforeStart { start, end } => {
                Self::InvalidRange {
                    start: start.to_string(),
                    end: end.to_string(),
                }
            }
        }
    }
}

/// Result type alias for SaveIt operations
pub type SaveItResult<T> = Result<T, SaveItError>;
