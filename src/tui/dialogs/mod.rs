//! Dialog modules for the TUI
//!
//! Contains modal dialogs for editing expenses, the budget and the filter

pub mod budget;
pub mod expense;
pub mod filter;
pub mod help;
