//! User settings for the expense tracker
//!
//! Controls how categories are entered, how dates and amounts are shown,
//! and how often the TUI ticks. Every field has a default so older or
//! partial config files still load.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::file_io::{read_json_optional, write_json_atomic};
use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::{CategoryMode, DEFAULT_CATEGORIES};
use crate::tracker::DEFAULT_DATE_FORMAT;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol placed before totals
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date display format (strftime)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Fixed category list or free text
    #[serde(default)]
    pub category_mode: CategoryMode,

    /// Category options for the enumerated mode
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// TUI tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            category_mode: CategoryMode::default(),
            categories: default_categories(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings: Option<Settings> = read_json_optional(paths.settings_file())?;
        // Don't save yet - `init` decides when to persist
        Ok(settings.unwrap_or_default())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Check the settings for values the tracker cannot work with
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.category_mode == CategoryMode::Enumerated && self.categories.is_empty() {
            return Err(TrackerError::Config(
                "Enumerated category mode needs at least one category".into(),
            ));
        }

        if let Some(blank) = self.categories.iter().find(|c| c.trim().is_empty()) {
            return Err(TrackerError::Config(format!(
                "Category names cannot be blank: {:?}",
                blank
            )));
        }

        if self.date_format.trim().is_empty() {
            return Err(TrackerError::Config("Date format cannot be empty".into()));
        }

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(TrackerError::Config(format!(
                "Unsupported date format: {:?}",
                self.date_format
            )));
        }

        Ok(())
    }
}
