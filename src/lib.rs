//! SaveIt - terminal expense tracker
//!
//! This library provides the core functionality for the SaveIt expense
//! tracker: named accounts holding one-off expenditures, recurring repeats
//! and monthly budgets, driven by a line-oriented command language.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Value objects, expenditures, repeats and accounts
//! - `services`: Account list session state and the model facade
//! - `reports`: Statistics aggregation over a date range
//! - `display`: Terminal formatting of lists, tables and charts
//! - `export`: Report export to CSV, JSON and YAML
//! - `storage`: JSON file storage layer
//! - `cli`: Command parsing, execution and the interactive shell
//!
//! # Example
//!
//! ```rust,ignore
//! use saveit::cli::LogicManager;
//! use saveit::config::SaveItPaths;
//!
//! let paths = SaveItPaths::new()?;
//! let mut logic = LogicManager::open(&paths)?;
//! let result = logic.execute("exp add i/Chicken rice a/3.50 t/Food")?;
//! println!("{}", result.feedback);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SaveItError, SaveItResult};
