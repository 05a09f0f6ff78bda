//! Summary bar view
//!
//! Shows the total, the remaining budget, status text and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Amount;
use crate::tui::app::App;

/// Key hints shown on the right of the status line
const HINTS: &str = " a:Add  e:Edit  d:Delete  b:Budget  f:Filter  ?:Help  q:Quit ";

/// Render the summary bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        totals_line(app),
        status_line(app, inner.width as usize),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Total and remaining budget
fn totals_line(app: &App) -> Line<'static> {
    let symbol = &app.settings.currency_symbol;
    let total = app.tracker.total();

    let mut spans = vec![
        Span::styled(" Total: ", Style::default().fg(Color::White)),
        Span::styled(
            total.format_with_symbol(symbol),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(remaining) = app.tracker.remaining_budget() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            "Remaining Budget: ",
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled(
            remaining.format_with_symbol(symbol),
            Style::default()
                .fg(remaining_color(remaining))
                .add_modifier(Modifier::BOLD),
        ));
    }

    if app.tracker.is_editing() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled("Editing", Style::default().fg(Color::Yellow)));
    }

    Line::from(spans)
}

fn remaining_color(remaining: Amount) -> Color {
    if remaining.is_nan() {
        Color::Magenta
    } else if remaining.is_negative() {
        Color::Red
    } else {
        Color::Green
    }
}

/// Status message with right-aligned key hints
fn status_line(app: &App, width: usize) -> Line<'static> {
    let mut spans = vec![];

    if let Some(ref message) = app.status_message {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Yellow),
        ));
    }

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = width
        .saturating_sub(left_len)
        .saturating_sub(HINTS.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::DarkGray)));

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_totals_without_budget() {
        let settings = Settings::default();
        let app = App::new(&settings);
        assert_eq!(text(&totals_line(&app)), " Total: $0.00");
    }

    #[test]
    fn test_totals_with_budget() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.tracker.form.category = "Food".into();
        app.tracker.form.amount = "30".into();
        app.tracker.form.date = "2024-01-01".into();
        app.tracker.submit_expense();
        app.tracker.budget_input = "100".into();
        app.tracker.set_budget();

        let line = text(&totals_line(&app));
        assert!(line.contains("Total: $30.00"));
        assert!(line.contains("Remaining Budget: $70.00"));
    }

    #[test]
    fn test_remaining_color() {
        assert_eq!(remaining_color(Amount::new(-1.0)), Color::Red);
        assert_eq!(remaining_color(Amount::new(5.0)), Color::Green);
        assert_eq!(remaining_color(Amount::new(f64::NAN)), Color::Magenta);
    }

    #[test]
    fn test_status_line_narrow_width() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        app.set_status("Expense added");
        let line = text(&status_line(&app, 5));
        assert!(line.starts_with(" Expense added"));
    }
}
