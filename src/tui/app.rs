//! Application state for the TUI
//!
//! The App struct holds the tracker plus everything needed for rendering and
//! handling events: the open dialog, the list selection and status text.

use crate::config::Settings;
use crate::models::{CategoryMode, ALL_CATEGORIES_LABEL};
use crate::tracker::ExpenseTracker;

use super::dialogs::budget::BudgetFormState;
use super::dialogs::expense::ExpenseFormState;
use super::dialogs::filter::FilterDialogState;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    ExpenseForm,
    Budget,
    Filter,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// The expense tracker being displayed
    pub tracker: ExpenseTracker,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the filtered list
    pub selected_index: usize,

    /// Status message to display
    pub status_message: Option<String>,

    /// Expense form dialog state
    pub expense_form: ExpenseFormState,

    /// Budget dialog state
    pub budget_form: BudgetFormState,

    /// Filter dialog state
    pub filter_state: FilterDialogState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            tracker: ExpenseTracker::with_date_format(settings.date_format.clone()),
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            status_message: None,
            expense_form: ExpenseFormState::default(),
            budget_form: BudgetFormState::default(),
            filter_state: FilterDialogState::default(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Open a dialog
    ///
    /// Form dialogs are loaded from the tracker's current input, so whatever
    /// was typed (or copied in by an edit) is still there.
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match dialog {
            ActiveDialog::ExpenseForm => {
                self.expense_form = ExpenseFormState::from_form(&self.tracker.form);
            }
            ActiveDialog::Budget => {
                self.budget_form = BudgetFormState::from_input(&self.tracker.budget_input);
            }
            ActiveDialog::Filter => {
                let options = self.filter_options();
                let current = self.tracker.filter().to_string();
                self.filter_state = FilterDialogState::new(&options, &current);
            }
            ActiveDialog::Help | ActiveDialog::None => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Category choices for the form selector, excluding the empty choice
    pub fn category_options(&self) -> Vec<String> {
        self.settings.categories.clone()
    }

    /// Options offered by the filter dialog, starting with "All"
    pub fn filter_options(&self) -> Vec<String> {
        let mut options = vec![ALL_CATEGORIES_LABEL.to_string()];
        match self.settings.category_mode {
            CategoryMode::Enumerated => options.extend(self.settings.categories.iter().cloned()),
            CategoryMode::FreeText => options.extend(
                self.tracker
                    .used_categories()
                    .into_iter()
                    .map(String::from),
            ),
        }
        options
    }

    /// Number of rows currently shown
    pub fn visible_count(&self) -> usize {
        self.tracker.filtered().len()
    }

    /// List position of the selected row
    pub fn selected_source_index(&self) -> Option<usize> {
        self.tracker
            .filtered()
            .get(self.selected_index)
            .map(|(index, _)| *index)
    }

    /// Keep the selection inside the visible rows
    pub fn clamp_selection(&mut self) {
        let count = self.visible_count();
        if self.selected_index >= count {
            self.selected_index = count.saturating_sub(1);
        }
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.visible_count() {
            self.selected_index += 1;
        }
    }

    /// Select the first row
    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    /// Select the last row
    pub fn select_last(&mut self) {
        self.selected_index = self.visible_count().saturating_sub(1);
    }

    /// Select the row showing the expense at `source_index`, if visible
    pub fn select_source(&mut self, source_index: usize) {
        let row = self
            .tracker
            .filtered()
            .iter()
            .position(|(index, _)| *index == source_index);
        if let Some(row) = row {
            self.selected_index = row;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryFilter;

    fn add(app: &mut App, category: &str, amount: &str) {
        app.tracker.form.category = category.into();
        app.tracker.form.amount = amount.into();
        app.tracker.form.date = "2024-01-01".into();
        app.tracker.submit_expense();
    }

    #[test]
    fn test_selection_maps_through_filter() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        add(&mut app, "Food", "1");
        add(&mut app, "Utilities", "2");
        add(&mut app, "Food", "3");

        app.tracker.set_filter(CategoryFilter::from_selection("Food"));
        app.select_first();
        app.move_down();

        assert_eq!(app.selected_index, 1);
        assert_eq!(app.selected_source_index(), Some(2));
    }

    #[test]
    fn test_move_bounds() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        add(&mut app, "Food", "1");
        add(&mut app, "Food", "2");

        app.move_up();
        assert_eq!(app.selected_index, 0);
        app.move_down();
        app.move_down();
        assert_eq!(app.selected_index, 1);
        app.select_first();
        app.select_last();
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_clamp_after_delete() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        add(&mut app, "Food", "1");
        add(&mut app, "Food", "2");
        app.select_last();

        app.tracker.delete_expense(1).unwrap();
        app.clamp_selection();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_filter_options_enumerated() {
        let settings = Settings::default();
        let app = App::new(&settings);
        let options = app.filter_options();
        assert_eq!(options[0], "All");
        assert_eq!(options.len(), 6);
    }

    #[test]
    fn test_filter_options_free_text() {
        let settings = Settings {
            category_mode: CategoryMode::FreeText,
            ..Settings::default()
        };
        let mut app = App::new(&settings);
        add(&mut app, "Rent", "900");
        add(&mut app, "Coffee", "4");
        add(&mut app, "Rent", "900");

        assert_eq!(app.filter_options(), vec!["All", "Rent", "Coffee"]);
    }

    #[test]
    fn test_open_expense_form_keeps_stale_input() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.tracker.form.amount = "42".into();

        app.open_dialog(ActiveDialog::ExpenseForm);
        app.close_dialog();
        app.open_dialog(ActiveDialog::ExpenseForm);

        assert_eq!(app.expense_form.amount_input.value(), "42");
        assert_eq!(app.tracker.form.amount, "42");
    }
}
