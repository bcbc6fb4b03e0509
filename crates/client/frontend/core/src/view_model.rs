//! Row view model derived from the runtime's standings.
use leaderboard_core::Record;
use runtime::{RuntimeHandle, StandingsView};

use crate::format::format_money;

/// Heading shown above the table.
pub const TITLE: &str = "Welcome to the Great Elf Game!";

pub const COLUMN_HEADERS: [&str; 4] = [
    "Player Name",
    "Turns Played",
    "Elves Remaining",
    "Money Made",
];

/// One rendered table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView {
    pub rank: usize,
    pub player_name: String,
    pub turns_played: u32,
    pub elves_remaining: u32,
    pub money: String,
    pub complete: bool,
}

impl RowView {
    pub fn from_record(rank: usize, record: &Record) -> Self {
        Self {
            rank,
            player_name: record.player_name().to_string(),
            turns_played: record.current_day(),
            elves_remaining: record.elves_remaining(),
            money: format_money(record.money_made()),
            complete: record.is_complete(),
        }
    }

    /// Cell text in [`COLUMN_HEADERS`] order.
    pub fn cells(&self) -> [String; 4] {
        [
            self.player_name.clone(),
            self.turns_played.to_string(),
            self.elves_remaining.to_string(),
            self.money.clone(),
        ]
    }
}

/// Everything a renderer needs for one frame of the table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeaderboardView {
    pub rows: Vec<RowView>,
}

impl LeaderboardView {
    /// Walk `ordered_identities` and look each record up, all from one
    /// snapshot so rows and order always agree.
    pub fn from_view(view: &StandingsView) -> Self {
        let rows = view
            .ordered_identities()
            .iter()
            .filter_map(|identity| view.get(identity.as_str()))
            .enumerate()
            .map(|(index, record)| RowView::from_record(index + 1, record))
            .collect();

        Self { rows }
    }

    pub fn from_handle(handle: &RuntimeHandle) -> Self {
        Self::from_view(&handle.view())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
