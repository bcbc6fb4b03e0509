//! Cross-frontend primitives for presenting the leaderboard.
//!
//! Houses the frontend trait, feed status tracking, and the row view model
//! that the terminal UI (and any future graphical client) render from.
pub mod event;
pub mod format;
pub mod frontend;
pub mod view_model;

pub use event::{EventImpact, FeedState, FeedStatus, SnapshotState};
pub use format::format_money;
pub use frontend::Frontend;
pub use view_model::{COLUMN_HEADERS, LeaderboardView, RowView, TITLE};
