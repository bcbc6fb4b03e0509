//! Application state for the table view.

use ratatui::widgets::TableState;

use client_frontend_core::{FeedState, LeaderboardView};

use crate::input::Selection;

/// Mutable UI state: the latest rows, feed health, and the highlighted row.
#[derive(Debug, Default)]
pub struct AppState {
    pub view: LeaderboardView,
    pub feed: FeedState,
    pub table: TableState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in freshly read rows, keeping the highlight inside the table.
    pub fn set_view(&mut self, view: LeaderboardView) {
        self.view = view;
        self.clamp_selection();
    }

    pub fn select(&mut self, selection: Selection) {
        let len = self.view.len();
        if len == 0 {
            self.table.select(None);
            return;
        }

        let last = len - 1;
        let next = match (selection, self.table.selected()) {
            (Selection::First, _) | (Selection::Next, None) => 0,
            (Selection::Last, _) | (Selection::Previous, None) => last,
            (Selection::Next, Some(index)) => (index + 1).min(last),
            (Selection::Previous, Some(index)) => index.saturating_sub(1),
        };
        self.table.select(Some(next));
    }

    fn clamp_selection(&mut self) {
        match (self.table.selected(), self.view.len()) {
            (Some(_), 0) => self.table.select(None),
            (Some(index), len) if index >= len => self.table.select(Some(len - 1)),
            _ => {}
        }
    }
}
