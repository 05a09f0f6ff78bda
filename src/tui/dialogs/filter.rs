//! Category filter dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::models::CategoryFilter;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// State for the filter dialog
#[derive(Debug, Clone, Default)]
pub struct FilterDialogState {
    /// Options shown, "All" first
    pub options: Vec<String>,

    /// Highlighted option
    pub index: usize,
}

impl FilterDialogState {
    /// Build the dialog with `current` highlighted
    pub fn new(options: &[String], current: &str) -> Self {
        let index = options.iter().position(|o| o == current).unwrap_or(0);
        Self {
            options: options.to_vec(),
            index,
        }
    }

    pub fn move_up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.index + 1 < self.options.len() {
            self.index += 1;
        }
    }

    /// The highlighted option
    pub fn selected(&self) -> Option<&str> {
        self.options.get(self.index).map(String::as_str)
    }
}

/// Render the filter dialog
pub fn render(frame: &mut Frame, app: &App) {
    let state = &app.filter_state;
    let height = (state.options.len() as u16).saturating_add(4);
    let area = centered_rect_fixed(32, height, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let current = app.tracker.filter().to_string();
    let items: Vec<ListItem> = state
        .options
        .iter()
        .map(|option| {
            let marker = if *option == current { "● " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::raw(option.clone()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Filter by Category ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Handle key input for the filter dialog
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }
        KeyCode::Up | KeyCode::Char('k') => app.filter_state.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.filter_state.move_down(),
        KeyCode::Enter => {
            let filter = app
                .filter_state
                .selected()
                .map(CategoryFilter::from_selection)
                .unwrap_or_default();
            app.tracker.set_filter(filter);
            app.select_first();
            app.close_dialog();
        }
        _ => return false,
    }
    true
}
