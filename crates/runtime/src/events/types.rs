//! Event payload types published on the bus.

use leaderboard_core::MalformedRecord;

/// Which feed a rejected payload arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadOrigin {
    Snapshot,
    Push,
}

/// Lifecycle of the snapshot fetch and the push stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// Snapshot applied; `rejected` payloads were skipped as malformed.
    SnapshotLoaded { accepted: usize, rejected: usize },

    /// Snapshot fetch failed; standings were left untouched.
    SnapshotFailed { error: String },

    /// The bridge started consuming a push connection.
    StreamConnected,

    /// The push connection dropped.
    StreamDisconnected { reason: String },

    /// The push connection closed cleanly.
    StreamClosed,

    /// A payload was dropped before reaching the standings.
    PayloadRejected {
        origin: PayloadOrigin,
        error: MalformedRecord,
    },
}
