//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence

pub mod file_io;
pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
