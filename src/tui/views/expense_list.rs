//! Expense list view
//!
//! Shows the filtered expenses. The row being edited is marked so it is
//! clear which entry the next submit will overwrite.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::INVALID_DATE;
use crate::tui::app::App;

/// Render the expense table
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Expenses ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let expenses = app.tracker.filtered();

    if expenses.is_empty() {
        let message = if app.tracker.is_empty() {
            "No expenses. Press 'a' to add one."
        } else {
            "No expenses in this category. Press 'f' to change the filter."
        };
        let text = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(2),  // Edit marker
        Constraint::Min(16),    // Category
        Constraint::Length(14), // Amount
        Constraint::Length(14), // Date
    ];

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = &app.settings.currency_symbol;
    let editing = app.tracker.editing_index();

    let rows: Vec<Row> = expenses
        .iter()
        .map(|(index, expense)| {
            let marker = if editing == Some(*index) { "✎" } else { "" };

            let amount_style = if expense.amount.is_nan() {
                Style::default().fg(Color::Magenta)
            } else if expense.amount.is_negative() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };

            let date_style = if expense.date == INVALID_DATE {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };

            let row = Row::new(vec![
                Cell::from(marker).style(Style::default().fg(Color::Yellow)),
                Cell::from(expense.category.clone()),
                Cell::from(format!("{}{}", symbol, expense.amount)).style(amount_style),
                Cell::from(expense.date.clone()).style(date_style),
            ]);

            if editing == Some(*index) {
                row.style(Style::default().add_modifier(Modifier::ITALIC))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}
