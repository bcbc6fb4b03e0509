//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other layers can stay focused on orchestration, workers, or transport.

pub mod errors;
pub mod handle;
pub mod sources;
pub mod view;

pub use errors::{Result, RuntimeError, SnapshotFetchError, StreamDisconnected};
pub use handle::RuntimeHandle;
pub use sources::{ChannelPushSource, PushSender, PushSource, SnapshotSource, StaticSnapshotSource};
pub use view::{OrderedIdentities, StandingsView};
