//! Core data models for the expense tracker
//!
//! Expenses, amounts, and the category options and filter.

pub mod amount;
pub mod category;
pub mod expense;

pub use amount::Amount;
pub use category::{CategoryFilter, CategoryMode, ALL_CATEGORIES_LABEL, DEFAULT_CATEGORIES};
pub use expense::{display_date, Expense, INVALID_DATE};
