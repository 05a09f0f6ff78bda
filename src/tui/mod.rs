//! Terminal User Interface module
//!
//! An interactive expense tracker built on ratatui: the expense list with
//! totals, plus dialogs for entering expenses, the budget and the filter.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
