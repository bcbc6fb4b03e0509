//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, endpoint resolution, and runtime plus feed
//! assembly that can be reused by the CLI or any other front-end crate.
pub mod builder;
pub mod config;
pub mod feeds;

pub use builder::{RuntimeBuilder, RuntimeSetup};
pub use config::{ClientConfig, Endpoints, SnapshotFilter};
pub use feeds::{FeedTasks, Feeds};
