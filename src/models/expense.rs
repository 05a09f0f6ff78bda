//! Expense model
//!
//! An expense is one recorded spending event. It has no identity of its own;
//! the tracker addresses expenses by their position in the list.

use std::fmt::Write;

use chrono::NaiveDate;

use super::amount::Amount;

/// Format a date picker produces
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Stored in place of a date that could not be understood
pub const INVALID_DATE: &str = "Invalid Date";

/// One recorded spending event
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// Category name
    pub category: String,
    /// Amount spent (may be NaN)
    pub amount: Amount,
    /// Date in display form, e.g. `1/1/2024`
    pub date: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(category: impl Into<String>, amount: Amount, date: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            amount,
            date: date.into(),
        }
    }

    /// Build an expense from raw form input
    ///
    /// The amount is parsed leniently and the date is converted to its
    /// display form.
    pub fn from_input(category: &str, amount: &str, date: &str, date_format: &str) -> Self {
        Self::new(
            category,
            Amount::parse(amount),
            display_date(date, date_format),
        )
    }
}

/// Parse date input as ISO first, then in the display format
pub fn parse_date_input(input: &str, date_format: &str) -> Option<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, ISO_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(input, date_format))
        .ok()
}

/// Convert date input to its display form
///
/// Input already in display form is accepted too, so an expense copied back
/// into the form for editing keeps its date. Anything else becomes
/// [`INVALID_DATE`].
pub fn display_date(input: &str, date_format: &str) -> String {
    match parse_date_input(input, date_format) {
        Some(date) => {
            // chrono reports an unknown specifier as a fmt error
            let mut text = String::new();
            match write!(text, "{}", date.format(date_format)) {
                Ok(()) => text,
                Err(_) => INVALID_DATE.to_string(),
            }
        }
        None => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const US_FORMAT: &str = "%-m/%-d/%Y";

    #[test]
    fn test_display_date_from_iso() {
        assert_eq!(display_date("2024-01-01", US_FORMAT), "1/1/2024");
        assert_eq!(display_date("2024-12-25", US_FORMAT), "12/25/2024");
        assert_eq!(display_date("2024-03-09", "%d.%m.%Y"), "09.03.2024");
    }

    #[test]
    fn test_display_date_accepts_display_form() {
        assert_eq!(display_date("1/1/2024", US_FORMAT), "1/1/2024");
        assert_eq!(display_date("12/25/2024", US_FORMAT), "12/25/2024");
    }

    #[test]
    fn test_display_date_invalid() {
        assert_eq!(display_date("yesterday", US_FORMAT), INVALID_DATE);
        assert_eq!(display_date("2024-02-30", US_FORMAT), INVALID_DATE);
    }

    #[test]
    fn test_display_date_unknown_specifier() {
        assert_eq!(display_date("2024-01-01", "%Q"), INVALID_DATE);
    }

    #[test]
    fn test_from_input() {
        let expense = Expense::from_input("Food", "12.5", "2024-01-01", US_FORMAT);
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.amount.value(), 12.5);
        assert_eq!(expense.date, "1/1/2024");
    }

    #[test]
    fn test_from_input_bad_amount_is_nan() {
        let expense = Expense::from_input("Food", "lots", "2024-01-01", US_FORMAT);
        assert!(expense.amount.is_nan());
    }
}
