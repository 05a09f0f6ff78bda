//! Set budget dialog
//!
//! Single numeric field. Enter applies the typed value as the budget; an
//! empty field does nothing and the dialog stays open.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// State for the budget dialog
#[derive(Debug, Clone, Default)]
pub struct BudgetFormState {
    /// Budget amount input
    pub input: TextInput,
}

impl BudgetFormState {
    /// Load the dialog from the tracker's budget input
    pub fn from_input(budget_input: &str) -> Self {
        Self {
            input: TextInput::new()
                .placeholder("Set Budget")
                .content(budget_input),
        }
    }
}

/// Render the budget dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(44, 7, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Set Budget ")
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
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(app.budget_form.input.render_line("Budget", true)),
        chunks[1],
    );

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Set Budget  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Close"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[3]);
}

/// Handle key input for the budget dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return true;
        }
        KeyCode::Enter => {
            if let Some(budget) = app.tracker.set_budget() {
                app.close_dialog();
                app.set_status(format!(
                    "Budget set to {}",
                    budget.format_with_symbol(&app.settings.currency_symbol)
                ));
            }
            return true;
        }
        _ => {}
    }

    let input = &mut app.budget_form.input;
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if c.is_ascii_digit() || matches!(c, '.' | '-' | 'e' | 'E') {
                input.insert(c);
            }
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }

    app.tracker.budget_input = input.value().to_string();
    true
}
