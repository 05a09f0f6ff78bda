//! Expense entry/edit dialog
//!
//! Modal form with Category, Amount and Date fields. Every keystroke is
//! written straight back into the tracker's form input, so closing the
//! dialog with Esc keeps whatever was typed (including an edit in progress).

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::CategoryMode;
use crate::tracker::{ExpenseForm, SubmitOutcome};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::{label_span, TextInput};

/// Shown when no category has been chosen
const SELECT_CATEGORY: &str = "Select Category";

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Category,
    Amount,
    Date,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Category => Self::Amount,
            Self::Amount => Self::Date,
            Self::Date => Self::Category,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Category => Self::Date,
            Self::Amount => Self::Category,
            Self::Date => Self::Amount,
        }
    }

    /// Whether a typed character belongs in this field
    fn accepts_char(self, c: char) -> bool {
        match self {
            Self::Category => !c.is_control(),
            Self::Amount => c.is_ascii_digit() || matches!(c, '.' | '-' | 'e' | 'E'),
            Self::Date => c.is_ascii_digit() || matches!(c, '-' | '/' | '.'),
        }
    }
}

/// State for the expense form dialog
#[derive(Debug, Clone, Default)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: ExpenseField,

    /// Category input (typed in free-text mode, cycled otherwise)
    pub category_input: TextInput,

    /// Amount input
    pub amount_input: TextInput,

    /// Date input
    pub date_input: TextInput,
}

impl ExpenseFormState {
    /// Load the dialog from the tracker's form input
    pub fn from_form(form: &ExpenseForm) -> Self {
        Self {
            focused_field: ExpenseField::Category,
            category_input: TextInput::new()
                .placeholder("Category")
                .content(&form.category),
            amount_input: TextInput::new().placeholder("Amount").content(&form.amount),
            date_input: TextInput::new()
                .placeholder("YYYY-MM-DD")
                .content(&form.date),
        }
    }

    /// Copy the inputs into the tracker's form
    pub fn write_to(&self, form: &mut ExpenseForm) {
        form.category = self.category_input.value().to_string();
        form.amount = self.amount_input.value().to_string();
        form.date = self.date_input.value().to_string();
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Get the currently focused input
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            ExpenseField::Category => &mut self.category_input,
            ExpenseField::Amount => &mut self.amount_input,
            ExpenseField::Date => &mut self.date_input,
        }
    }

    /// Step through "Select Category" followed by `options`
    pub fn cycle_category(&mut self, options: &[String], forward: bool) {
        let count = options.len() + 1;
        let current = options
            .iter()
            .position(|o| o == self.category_input.value())
            .map(|i| i + 1)
            .unwrap_or(0);

        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };

        let value = if next == 0 {
            String::new()
        } else {
            options[next - 1].clone()
        };
        self.category_input.set_content(value);
    }
}

/// Render the expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 10, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let title = format!(" {} ", app.tracker.submit_label());
    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Category
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Date
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Submit button
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.expense_form;
    let focused = form.focused_field;

    let category_line = match app.settings.category_mode {
        CategoryMode::FreeText => form
            .category_input
            .render_line("Category", focused == ExpenseField::Category),
        CategoryMode::Enumerated => {
            category_selector_line(form.category_input.value(), focused == ExpenseField::Category)
        }
    };
    frame.render_widget(Paragraph::new(category_line), chunks[1]);

    frame.render_widget(
        Paragraph::new(
            form.amount_input
                .render_line("Amount", focused == ExpenseField::Amount),
        ),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(form.date_input.render_line("Date", focused == ExpenseField::Date)),
        chunks[3],
    );

    let button_color = if app.tracker.is_editing() {
        Color::Yellow
    } else {
        Color::Green
    };
    let button = Line::from(Span::styled(
        format!("[ {} ]", app.tracker.submit_label()),
        Style::default()
            .fg(button_color)
            .add_modifier(Modifier::BOLD),
    ))
    .centered();
    frame.render_widget(Paragraph::new(button), chunks[5]);

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Submit  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Close"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[6]);
}

/// The enumerated category selector line
fn category_selector_line(value: &str, focused: bool) -> Line<'static> {
    let mut spans = vec![label_span("Category", focused)];

    if focused {
        spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
    }

    if value.is_empty() {
        spans.push(Span::styled(
            SELECT_CATEGORY,
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        let style = if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Yellow)
        };
        spans.push(Span::styled(value.to_string(), style));
    }

    if focused {
        spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
    }

    Line::from(spans)
}

/// Handle key input for the expense dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let enumerated = app.settings.category_mode == CategoryMode::Enumerated;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return true;
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.expense_form.prev_field();
            } else {
                app.expense_form.next_field();
            }
            return true;
        }

        KeyCode::BackTab => {
            app.expense_form.prev_field();
            return true;
        }

        KeyCode::Enter => {
            submit(app);
            return true;
        }

        _ => {}
    }

    let handled = if enumerated && app.expense_form.focused_field == ExpenseField::Category {
        handle_selector_key(app, key)
    } else {
        handle_text_key(app, key)
    };

    if handled {
        app.expense_form.write_to(&mut app.tracker.form);
    }
    handled
}

/// Keys for the enumerated category selector
fn handle_selector_key(app: &mut App, key: KeyEvent) -> bool {
    let options = app.category_options();
    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') | KeyCode::Char('l') => {
            form.cycle_category(&options, true);
            true
        }
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') => {
            form.cycle_category(&options, false);
            true
        }
        KeyCode::Backspace | KeyCode::Delete => {
            form.category_input.clear();
            true
        }
        _ => false,
    }
}

/// Keys for a text input field
fn handle_text_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.expense_form;
    let field = form.focused_field;

    match key.code {
        KeyCode::Char('t')
            if field == ExpenseField::Date && key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            let today = Local::now().date_naive();
            form.date_input
                .set_content(today.format(crate::models::expense::ISO_DATE_FORMAT).to_string());
            true
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if field.accepts_char(c) {
                form.focused_input().insert(c);
            }
            true
        }
        KeyCode::Backspace => {
            form.focused_input().backspace();
            true
        }
        KeyCode::Delete => {
            form.focused_input().delete();
            true
        }
        KeyCode::Left => {
            form.focused_input().move_left();
            true
        }
        KeyCode::Right => {
            form.focused_input().move_right();
            true
        }
        KeyCode::Home => {
            form.focused_input().move_start();
            true
        }
        KeyCode::End => {
            form.focused_input().move_end();
            true
        }
        _ => false,
    }
}

/// Submit the form; an incomplete form leaves the dialog open and silent
fn submit(app: &mut App) {
    match app.tracker.submit_expense() {
        SubmitOutcome::Added(index) => {
            app.close_dialog();
            app.select_source(index);
            app.set_status("Expense added");
        }
        SubmitOutcome::Updated(index) => {
            app.close_dialog();
            app.select_source(index);
            app.set_status("Expense updated");
        }
        SubmitOutcome::Ignored => {}
    }
}
