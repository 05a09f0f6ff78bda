//! Help dialog
//!
//! Shows the keyboard shortcuts

use crossterm::event::KeyEvent;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::CategoryMode;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Expense List"),
        Line::from(""),
        key_line("a", "Add expense"),
        key_line("e / Enter", "Edit selected expense"),
        key_line("d / Del", "Delete selected expense"),
        key_line("b", "Set budget"),
        key_line("f", "Filter by category"),
        key_line("j/k", "Move selection down/up"),
        key_line("g/G", "Jump to first/last"),
        key_line("?", "Show/hide help"),
        key_line("q", "Quit application"),
        Line::from(""),
        heading("Expense Form"),
        Line::from(""),
        key_line("Tab", "Next field"),
        key_line("Shift+Tab", "Previous field"),
    ];

    if app.settings.category_mode == CategoryMode::Enumerated {
        lines.push(key_line("←/→/Space", "Choose category"));
    }

    lines.extend([
        key_line("Ctrl+T", "Today's date (Date field)"),
        key_line("Enter", "Add or update expense"),
        key_line("Esc", "Close (input is kept)"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ]);

    lines
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

/// Any key closes help
pub fn handle_key(app: &mut App, _key: KeyEvent) -> bool {
    app.close_dialog();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crossterm::event::KeyCode;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect()
    }

    #[test]
    fn test_selector_hint_only_when_enumerated() {
        let settings = Settings::default();
        let app = App::new(&settings);
        assert!(text(&help_lines(&app)).contains("Choose category"));

        let settings = Settings {
            category_mode: CategoryMode::FreeText,
            ..Settings::default()
        };
        let app = App::new(&settings);
        assert!(!text(&help_lines(&app)).contains("Choose category"));
    }

    #[test]
    fn test_any_key_closes() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.open_dialog(crate::tui::app::ActiveDialog::Help);
        handle_key(&mut app, KeyEvent::from(KeyCode::Char('x')));
        assert!(!app.has_dialog());
    }
}
