//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog or the expense list.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    app.clear_status();
    handle_list_key(app, key);
    Ok(())
}

/// Keys on the expense list
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.select_first(),
        KeyCode::Char('G') | KeyCode::End => app.select_last(),

        // Actions
        KeyCode::Char('a') => app.open_dialog(ActiveDialog::ExpenseForm),
        KeyCode::Char('e') | KeyCode::Enter => edit_selected(app),
        KeyCode::Char('d') | KeyCode::Delete => delete_selected(app),
        KeyCode::Char('b') => app.open_dialog(ActiveDialog::Budget),
        KeyCode::Char('f') => app.open_dialog(ActiveDialog::Filter),

        _ => {}
    }
}

/// Copy the selected expense into the form and open it
fn edit_selected(app: &mut App) {
    let Some(index) = app.selected_source_index() else {
        return;
    };

    match app.tracker.edit_expense(index) {
        Ok(()) => app.open_dialog(ActiveDialog::ExpenseForm),
        Err(e) => {
            warn!(error = %e, "Edit failed");
            app.set_status(e.to_string());
        }
    }
}

/// Delete the selected expense
fn delete_selected(app: &mut App) {
    let Some(index) = app.selected_source_index() else {
        return;
    };

    match app.tracker.delete_expense(index) {
        Ok(_) => {
            app.clamp_selection();
            app.set_status("Expense deleted");
        }
        Err(e) => {
            warn!(error = %e, "Delete failed");
            app.set_status(e.to_string());
        }
    }
}

/// Forward a key to the open dialog
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::ExpenseForm => {
            dialogs::expense::handle_key(app, key);
        }
        ActiveDialog::Budget => {
            dialogs::budget::handle_key(app, key);
        }
        ActiveDialog::Filter => {
            dialogs::filter::handle_key(app, key);
        }
        ActiveDialog::Help => {
            dialogs::help::handle_key(app, key);
        }
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::CategoryFilter;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn add(app: &mut App, category: &str, amount: &str) {
        app.tracker.form.category = category.into();
        app.tracker.form.amount = amount.into();
        app.tracker.form.date = "2024-01-01".into();
        app.tracker.submit_expense();
    }

    #[test]
    fn test_quit() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_open_dialogs() {
        let settings = Settings::default();
        let mut app = App::new(&settings);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog, ActiveDialog::ExpenseForm);
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.active_dialog, ActiveDialog::Budget);
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.active_dialog, ActiveDialog::Filter);
    }

    #[test]
    fn test_edit_loads_selected_into_form() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        add(&mut app, "Food", "12.5");
        add(&mut app, "Utilities", "40");

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('e'));

        assert_eq!(app.active_dialog, ActiveDialog::ExpenseForm);
        assert_eq!(app.tracker.editing_index(), Some(1));
        assert_eq!(app.tracker.form.category, "Utilities");
        assert_eq!(app.tracker.form.amount, "40");
        assert_eq!(app.expense_form.amount_input.value(), "40");
    }

    #[test]
    fn test_edit_from_filtered_view_targets_source() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        add(&mut app, "Food", "1");
        add(&mut app, "Utilities", "2");
        app.tracker
            .set_filter(CategoryFilter::Category("Utilities".into()));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.tracker.editing_index(), Some(1));
    }

    #[test]
    fn test_delete_selected() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        add(&mut app, "Food", "1");
        add(&mut app, "Food", "2");
        app.select_last();

        press(&mut app, KeyCode::Char('d'));

        assert_eq!(app.tracker.len(), 1);
        assert_eq!(app.selected_index, 0);
        assert_eq!(app.status_message.as_deref(), Some("Expense deleted"));
    }

    #[test]
    fn test_delete_on_empty_list_is_noop() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Char('d'));
        assert!(app.tracker.is_empty());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_keys_go_to_dialog_first() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.active_dialog, ActiveDialog::Budget);
    }
}
