//! Standings table: one row per record in presentation order.

use client_frontend_core::{COLUMN_HEADERS, LeaderboardView, RowView};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use crate::config::UiConfig;
use crate::presentation::theme::Theme;

const WIDTHS: [Constraint; 5] = [
    Constraint::Length(4),
    Constraint::Percentage(40),
    Constraint::Percentage(18),
    Constraint::Percentage(18),
    Constraint::Percentage(24),
];

pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &LeaderboardView,
    table_state: &mut TableState,
    ui: &UiConfig,
    theme: &Theme,
) {
    let header = Row::new(std::iter::once("#").chain(COLUMN_HEADERS)).style(theme.header());

    let rows = view.rows.iter().map(|row| table_row(row, ui, theme));

    let title = format!(" Standings ({}) ", view.len());
    let table = Table::new(rows, WIDTHS)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(theme.highlight())
        .highlight_symbol("> ");

    frame.render_stateful_widget(table, area, table_state);
}

fn table_row(row: &RowView, ui: &UiConfig, theme: &Theme) -> Row<'static> {
    let style = if ui.highlight_complete && row.complete {
        theme.complete()
    } else {
        theme.row(row.rank)
    };
    let [name, turns, elves, money] = row.cells();

    Row::new(vec![
        Cell::from(row.rank.to_string()),
        Cell::from(name),
        Cell::from(turns),
        Cell::from(elves),
        Cell::from(Line::from(money).right_aligned()).style(theme.money()),
    ])
    .style(style)
}
