//! Expense tracker view-model
//!
//! Holds the expense list, the budget, the display filter and the transient
//! form input. Every user action is a single `&mut self` call that runs to
//! completion; renderers read the derived values (`total`, `remaining_budget`,
//! `filtered`) after each action.
//!
//! Expenses are addressed by list position. An edit records the position it
//! came from and the next accepted submit overwrites that position.

pub mod form;

pub use form::ExpenseForm;

use tracing::{debug, info};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, CategoryFilter, Expense};

/// Display date format used when none is configured (US locale style)
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Result of submitting the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new expense was appended at this index
    Added(usize),
    /// The expense at this index was overwritten
    Updated(usize),
    /// A required field was empty; nothing changed
    Ignored,
}

/// The expense tracker state
#[derive(Debug, Clone)]
pub struct ExpenseTracker {
    expenses: Vec<Expense>,
    budget: Option<Amount>,
    editing_index: Option<usize>,
    filter: CategoryFilter,
    date_format: String,

    /// Add/edit form input
    pub form: ExpenseForm,

    /// Budget input as typed
    pub budget_input: String,
}

impl Default for ExpenseTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseTracker {
    /// Create an empty tracker with the default date format
    pub fn new() -> Self {
        Self::with_date_format(DEFAULT_DATE_FORMAT)
    }

    /// Create an empty tracker that displays dates in `date_format`
    pub fn with_date_format(date_format: impl Into<String>) -> Self {
        Self {
            expenses: Vec::new(),
            budget: None,
            editing_index: None,
            filter: CategoryFilter::All,
            date_format: date_format.into(),
            form: ExpenseForm::new(),
            budget_input: String::new(),
        }
    }

    /// All expenses in list order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Number of expenses (unfiltered)
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether there are no expenses
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// The current budget, if one has been set
    pub fn budget(&self) -> Option<Amount> {
        self.budget
    }

    /// Position of the expense being edited
    pub fn editing_index(&self) -> Option<usize> {
        self.editing_index
    }

    /// Whether an edit is in progress
    pub fn is_editing(&self) -> bool {
        self.editing_index.is_some()
    }

    /// Label for the form's submit action
    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update Expense"
        } else {
            "Add Expense"
        }
    }

    /// The active display filter
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// The date display format
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Submit the expense form
    ///
    /// Does nothing if any field is empty. Otherwise overwrites the expense
    /// being edited (or appends a new one) and clears the form.
    pub fn submit_expense(&mut self) -> SubmitOutcome {
        if !self.form.is_complete() {
            debug!(form = ?self.form, "Ignoring incomplete expense form");
            return SubmitOutcome::Ignored;
        }

        let expense = Expense::from_input(
            &self.form.category,
            &self.form.amount,
            &self.form.date,
            &self.date_format,
        );

        let outcome = match self.editing_index.take() {
            Some(index) if index < self.expenses.len() => {
                info!(
                    index,
                    category = %expense.category,
                    amount = %expense.amount,
                    "Updated expense"
                );
                self.expenses[index] = expense;
                SubmitOutcome::Updated(index)
            }
            stale => {
                if let Some(index) = stale {
                    debug!(index, "Edited expense no longer exists, appending instead");
                }
                info!(
                    category = %expense.category,
                    amount = %expense.amount,
                    date = %expense.date,
                    "Added expense"
                );
                self.expenses.push(expense);
                SubmitOutcome::Added(self.expenses.len() - 1)
            }
        };

        self.form.clear();
        outcome
    }

    /// Apply the budget input
    ///
    /// Empty input is ignored and returns `None`. Otherwise the budget is
    /// replaced by the parsed input (possibly NaN) and returned.
    pub fn set_budget(&mut self) -> Option<Amount> {
        if self.budget_input.is_empty() {
            debug!("Ignoring empty budget input");
            return None;
        }

        let budget = Amount::parse(&self.budget_input);
        info!(budget = %budget, "Budget set");
        self.budget = Some(budget);
        Some(budget)
    }

    /// Start editing the expense at `index`
    ///
    /// Copies its fields into the form. The expense stays in the list until
    /// the next accepted submit overwrites it.
    pub fn edit_expense(&mut self, index: usize) -> TrackerResult<()> {
        let expense = self
            .expenses
            .get(index)
            .ok_or_else(|| TrackerError::expense_not_found(index))?;

        self.form.category = expense.category.clone();
        self.form.amount = expense.amount.to_string();
        self.form.date = expense.date.clone();
        self.editing_index = Some(index);

        debug!(index, "Editing expense");
        Ok(())
    }

    /// Remove and return the expense at `index`
    ///
    /// The edit position is not adjusted.
    pub fn delete_expense(&mut self, index: usize) -> TrackerResult<Expense> {
        if index >= self.expenses.len() {
            return Err(TrackerError::expense_not_found(index));
        }

        let removed = self.expenses.remove(index);
        info!(index, category = %removed.category, "Deleted expense");
        Ok(removed)
    }

    /// Change the display filter
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        debug!(filter = %filter, "Filter changed");
        self.filter = filter;
    }

    /// Sum of every expense amount, regardless of the filter
    pub fn total(&self) -> Amount {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Budget minus total, once a budget has been set
    pub fn remaining_budget(&self) -> Option<Amount> {
        self.budget.map(|budget| budget - self.total())
    }

    /// Expenses passing the filter, paired with their list position
    pub fn filtered(&self) -> Vec<(usize, &Expense)> {
        self.expenses
            .iter()
            .enumerate()
            .filter(|(_, e)| self.filter.matches(&e.category))
            .collect()
    }

    /// Distinct categories in order of first appearance
    pub fn used_categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for expense in &self.expenses {
            if !seen.contains(&expense.category.as_str()) {
                seen.push(&expense.category);
            }
        }
        seen
    }
}
