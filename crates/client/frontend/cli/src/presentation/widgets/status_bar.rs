//! Bottom status line: feed health plus key hints.

use client_frontend_core::FeedState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, feed: &FeedState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(format!(" {}", feed.status_line()), theme.stream(&feed.stream)),
        Span::styled(
            "  [q/Esc] quit  [j/k] move",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
