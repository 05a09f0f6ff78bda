//! TUI Views module
//!
//! The header, the expense list and the summary bar, plus dialog overlays.

pub mod expense_list;
pub mod summary;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use crate::models::CategoryFilter;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);
    expense_list::render(frame, app, layout.content);
    summary::render(frame, app, layout.summary);

    // Render dialog if active
    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Title with the active filter and row count
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Expense Tracker ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let filter_style = match app.tracker.filter() {
        CategoryFilter::All => Style::default().fg(Color::White),
        CategoryFilter::Category(_) => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    };

    let line = Line::from(vec![
        Span::styled("Filter: ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.tracker.filter().to_string(), filter_style),
        Span::styled(
            format!(
                "  ({} of {} shown)",
                app.visible_count(),
                app.tracker.len()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::ExpenseForm => dialogs::expense::render(frame, app),
        ActiveDialog::Budget => dialogs::budget::render(frame, app),
        ActiveDialog::Filter => dialogs::filter::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}
