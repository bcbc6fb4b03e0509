//! Runtime orchestration for the live leaderboard.
//!
//! This crate owns the single writer of the [`leaderboard_core::Standings`]
//! collection and exposes it to the rest of the client. Consumers embed
//! [`Runtime`], feed it through the [`UpdateBridge`], and read consistent
//! snapshots through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`bridge`] adapts snapshot and push sources into store transitions
//! - [`events`] provides the topic-based event bus for notifications
//! - [`workers`] keeps the transition queue internal to the crate
pub mod api;
pub mod bridge;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{
    ChannelPushSource, OrderedIdentities, PushSender, PushSource, Result, RuntimeError,
    RuntimeHandle, SnapshotFetchError, SnapshotSource, StandingsView, StaticSnapshotSource,
    StreamDisconnected,
};
pub use bridge::{PushSubscription, SnapshotSummary, UpdateBridge};
pub use events::{Event, EventBus, FeedEvent, PayloadOrigin, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
