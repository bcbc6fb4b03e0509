//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and from the two external feeds so
//! clients can bubble them up with consistent context. Malformed payloads are
//! not represented here: the bridge drops them locally.
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("sync worker command channel closed")]
    CommandChannelClosed,

    #[error("sync worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("background task join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    SnapshotFetch(#[from] SnapshotFetchError),

    #[error(transparent)]
    StreamDisconnected(#[from] StreamDisconnected),
}

/// The one-shot snapshot could not be obtained.
///
/// Never applied to the standings: the store keeps whatever it held before.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotFetchError {
    #[error("snapshot request failed: {0}")]
    Transport(String),

    #[error("snapshot endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("snapshot body is not a JSON array of records: {0}")]
    Body(String),
}

/// The push connection dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("push stream disconnected: {reason}")]
pub struct StreamDisconnected {
    pub reason: String,
}

impl StreamDisconnected {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
