//! Expense display formatting
//!
//! Formats the expense list and totals for terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::tracker::ExpenseTracker;

/// One row of the printed expense list
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Date")]
    date: String,
}

/// Format the filtered expense list as a table
///
/// The `#` column is the position in the full list, so it stays stable
/// whatever filter is active.
pub fn format_expense_list(tracker: &ExpenseTracker, currency_symbol: &str) -> String {
    let rows: Vec<ExpenseRow> = tracker
        .filtered()
        .into_iter()
        .map(|(index, expense)| ExpenseRow {
            index,
            category: expense.category.clone(),
            amount: format!("{}{}", currency_symbol, expense.amount),
            date: expense.date.clone(),
        })
        .collect();

    if rows.is_empty() {
        return "No expenses found.".to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format the total and (when a budget is set) the remaining budget
pub fn format_summary(tracker: &ExpenseTracker, currency_symbol: &str) -> String {
    let mut output = format!(
        "Total: {}\n",
        tracker.total().format_with_symbol(currency_symbol)
    );

    if let Some(remaining) = tracker.remaining_budget() {
        output.push_str(&format!(
            "Remaining Budget: {}\n",
            remaining.format_with_symbol(currency_symbol)
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryFilter;

    fn sample() -> ExpenseTracker {
        let mut tracker = ExpenseTracker::new();
        for (category, amount, date) in [
            ("Food", "12.5", "2024-01-01"),
            ("Utilities", "17.5", "2024-01-05"),
        ] {
            tracker.form.category = category.into();
            tracker.form.amount = amount.into();
            tracker.form.date = date.into();
            tracker.submit_expense();
        }
        tracker
    }

    #[test]
    fn test_empty_list() {
        let tracker = ExpenseTracker::new();
        assert_eq!(format_expense_list(&tracker, "$"), "No expenses found.");
    }

    #[test]
    fn test_list_contains_rows() {
        let tracker = sample();
        let output = format_expense_list(&tracker, "$");
        assert!(output.contains("Category"));
        assert!(output.contains("Food"));
        assert!(output.contains("$12.5"));
        assert!(output.contains("1/5/2024"));
    }

    #[test]
    fn test_list_respects_filter() {
        let mut tracker = sample();
        tracker.set_filter(CategoryFilter::from_selection("Utilities"));
        let output = format_expense_list(&tracker, "$");
        assert!(output.contains("Utilities"));
        assert!(!output.contains("Food"));
    }

    #[test]
    fn test_summary_without_budget() {
        let tracker = sample();
        assert_eq!(format_summary(&tracker, "$"), "Total: $30.00\n");
    }

    #[test]
    fn test_summary_with_budget() {
        let mut tracker = sample();
        tracker.budget_input = "100".into();
        tracker.set_budget();
        assert_eq!(
            format_summary(&tracker, "$"),
            "Total: $30.00\nRemaining Budget: $70.00\n"
        );
    }
}
