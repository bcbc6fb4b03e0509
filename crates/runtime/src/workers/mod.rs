//! Worker tasks that back the runtime orchestration.
//!
//! The sync worker is the single owner of the standings; every transition
//! is queued on its command channel and applied one at a time.

mod sync;

pub use sync::{Command, SyncWorker};
