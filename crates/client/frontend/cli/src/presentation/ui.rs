//! Frame composition: header, table, and status bar stacked vertically.
use anyhow::Result;
use ratatui::layout::{Constraint, Layout};

use crate::config::UiConfig;
use crate::presentation::{terminal::Tui, theme::Theme, widgets};
use crate::state::AppState;

pub fn render(terminal: &mut Tui, app_state: &mut AppState, ui: &UiConfig) -> Result<()> {
    let theme = Theme;

    terminal.draw(|frame| {
        let [header_area, table_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        widgets::header::render(frame, header_area, &theme);
        widgets::standings_table::render(
            frame,
            table_area,
            &app_state.view,
            &mut app_state.table,
            ui,
            &theme,
        );
        widgets::status_bar::render(frame, status_area, &app_state.feed, &theme);
    })?;

    Ok(())
}
