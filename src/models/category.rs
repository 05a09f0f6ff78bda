//! Category modes and the display filter
//!
//! A category is just a string. Depending on configuration it is picked from
//! a fixed list or typed freely. The filter narrows which expenses are shown
//! and never affects totals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categories offered when nothing else is configured
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Food",
    "Transportation",
    "Entertainment",
    "Utilities",
    "Other",
];

/// Label of the filter option that shows everything
pub const ALL_CATEGORIES_LABEL: &str = "All";

/// How the category of an expense is entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryMode {
    /// Picked from the configured category list
    #[default]
    Enumerated,
    /// Typed as free text
    FreeText,
}

impl CategoryMode {
    /// Whether `category` is an acceptable value under this mode
    pub fn accepts(&self, categories: &[String], category: &str) -> bool {
        match self {
            Self::Enumerated => categories.iter().any(|c| c == category),
            Self::FreeText => true,
        }
    }
}

impl fmt::Display for CategoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enumerated => write!(f, "enumerated"),
            Self::FreeText => write!(f, "free text"),
        }
    }
}

/// Display filter over the expense list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every expense
    #[default]
    All,
    /// Show expenses whose category equals this exactly
    Category(String),
}

impl CategoryFilter {
    /// Build a filter from a selection label; `"All"` selects everything
    pub fn from_selection(selection: &str) -> Self {
        if selection == ALL_CATEGORIES_LABEL {
            Self::All
        } else {
            Self::Category(selection.to_string())
        }
    }

    /// Check whether an expense with this category passes the filter
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{}", ALL_CATEGORIES_LABEL),
            Self::Category(name) => write!(f, "{}", name),
        }
    }
}
