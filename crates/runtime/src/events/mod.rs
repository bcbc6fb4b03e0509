//! Topic-based event bus for runtime notifications.
//!
//! Renderers subscribe to [`Topic::Standings`] and re-read the standings on
//! every event; status widgets and logs follow [`Topic::Feed`].

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{FeedEvent, PayloadOrigin};
