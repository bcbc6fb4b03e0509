//! Color scheme for the leaderboard table.

use client_frontend_core::FeedStatus;
use ratatui::style::{Color, Modifier, Style};

/// Ratatui styles used by every widget.
pub struct Theme;

impl Theme {
    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn row(&self, rank: usize) -> Style {
        match rank {
            1 => Style::default().fg(Color::LightYellow),
            2 | 3 => Style::default().fg(Color::White),
            _ => Style::default().fg(Color::Gray),
        }
    }

    /// Sessions that played every day.
    pub fn complete(&self) -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn money(&self) -> Style {
        Style::default().fg(Color::LightGreen)
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    pub fn stream(&self, status: &FeedStatus) -> Style {
        match status {
            FeedStatus::Live => Style::default().fg(Color::LightGreen),
            FeedStatus::Connecting => Style::default().fg(Color::Yellow),
            FeedStatus::Disconnected(_) => Style::default().fg(Color::LightRed),
            FeedStatus::Closed => Style::default().fg(Color::Gray),
        }
    }
}
