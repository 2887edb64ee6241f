//! Configuration module for SaveIt
//!
//! This module provides configuration management including:
//! - Platform path resolution with an explicit override
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SaveItPaths;
pub use settings::Settings;
