//! Widgets composing the leaderboard screen.
pub mod header;
pub mod standings_table;
pub mod status_bar;
