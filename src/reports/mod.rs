//! Reports module for SaveIt
//!
//! Aggregates spending into statistics for viewing, printing and export.

pub mod stats;

pub use stats::{generate_stats, StatRow, Stats};
