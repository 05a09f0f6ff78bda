//! Categories CLI command
//!
//! Prints the category options the form offers under the current settings.

use crate::config::Settings;
use crate::error::TrackerResult;
use crate::models::CategoryMode;

/// Format the category options for display
pub fn format_categories(settings: &Settings) -> String {
    let mut output = format!("Category mode: {}\n", settings.category_mode);

    match settings.category_mode {
        CategoryMode::Enumerated => {
            for category in &settings.categories {
                output.push_str(&format!("  {}\n", category));
            }
        }
        CategoryMode::FreeText => {
            output.push_str("  (any text)\n");
        }
    }

    output
}

/// Handle the categories command
pub fn handle_categories_command(settings: &Settings) -> TrackerResult<()> {
    print!("{}", format_categories(settings));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerated_lists_categories() {
        let output = format_categories(&Settings::default());
        assert!(output.starts_with("Category mode: enumerated\n"));
        assert!(output.contains("  Transportation\n"));
    }

    #[test]
    fn test_free_text() {
        let settings = Settings {
            category_mode: CategoryMode::FreeText,
            ..Settings::default()
        };
        assert!(format_categories(&settings).contains("(any text)"));
    }
}
