//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the tracker.

pub mod categories;
pub mod report;

pub use categories::handle_categories_command;
pub use report::{handle_report_command, ExpenseArg, ReportArgs};
