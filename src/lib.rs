//! Expense Tracker - terminal expense tracking with a budget
//!
//! This library provides the core functionality for the expense tracker:
//! recording expenses through a form, editing and deleting them, filtering
//! the list by category, and comparing the running total against a budget.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `tracker`: The view-model holding expenses, form input, budget and filter
//! - `models`: Amounts, expenses and categories
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `display`: Plain-text tables for the command line
//! - `cli`: Command handlers
//! - `tui`: The interactive terminal interface
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::tracker::{ExpenseTracker, SubmitOutcome};
//!
//! let mut tracker = ExpenseTracker::new();
//! tracker.form.category = "Food".into();
//! tracker.form.amount = "12.5".into();
//! tracker.form.date = "2024-01-01".into();
//! assert_eq!(tracker.submit_expense(), SubmitOutcome::Added(0));
//!
//! tracker.budget_input = "100".into();
//! tracker.set_budget();
//! assert_eq!(tracker.remaining_budget().unwrap().format_fixed(), "87.50");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod tracker;
pub mod tui;

pub use error::TrackerError;
