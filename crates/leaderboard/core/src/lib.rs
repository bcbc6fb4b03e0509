//! Record model and standings store for the live leaderboard.
//!
//! `leaderboard-core` owns the canonical shape of a player [`Record`], the
//! parsing rules for raw wire payloads, and the [`Standings`] collection that
//! keeps records deduplicated by [`Identity`] and ordered by money made.
//! Everything here is synchronous and side-effect free; the runtime crate
//! serializes access and fans out notifications.
pub mod error;
pub mod money;
pub mod payload;
pub mod record;
pub mod standings;

pub use error::MalformedRecord;
pub use money::Money;
pub use record::{Identity, MAX_DAYS, Record};
pub use standings::{Standings, StandingsChange};
