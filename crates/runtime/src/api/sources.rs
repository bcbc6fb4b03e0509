//! Asynchronous abstractions for the two external feeds.
//!
//! Transport crates implement [`SnapshotSource`] (one-shot HTTP fetch) and
//! [`PushSource`] (persistent push connection). The runtime only sees raw
//! payloads; scheme selection, framing, and reconnects stay in the transport.
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::mpsc;

use super::errors::{SnapshotFetchError, StreamDisconnected};

/// Trait for fetching the initial snapshot of raw record payloads.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetch every known record payload, in the order the server returned them.
    async fn fetch_snapshot(&self) -> Result<Vec<Value>, SnapshotFetchError>;
}

/// Trait for consuming a push connection one message at a time.
///
/// # Returns
/// - `Ok(Some(text))` for each message, in arrival order
/// - `Ok(None)` once the connection closed cleanly
/// - `Err(_)` when the connection dropped
#[async_trait]
pub trait PushSource: Send {
    async fn next_message(&mut self) -> Result<Option<String>, StreamDisconnected>;
}

/// Snapshot source returning a fixed result on every fetch.
/// Useful for testing or for seeding a runtime from a file.
#[derive(Debug, Clone)]
pub struct StaticSnapshotSource {
    result: Result<Vec<Value>, SnapshotFetchError>,
}

impl StaticSnapshotSource {
    pub fn new(payloads: Vec<Value>) -> Self {
        Self {
            result: Ok(payloads),
        }
    }

    pub fn failing(error: SnapshotFetchError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl SnapshotSource for StaticSnapshotSource {
    async fn fetch_snapshot(&self) -> Result<Vec<Value>, SnapshotFetchError> {
        self.result.clone()
    }
}

/// Sending half paired with a [`ChannelPushSource`].
pub type PushSender = mpsc::Sender<Result<String, StreamDisconnected>>;

/// Push source fed from an in-process channel.
///
/// Dropping every [`PushSender`] closes the stream cleanly; sending an `Err`
/// simulates a dropped connection.
pub struct ChannelPushSource {
    rx: mpsc::Receiver<Result<String, StreamDisconnected>>,
}

impl ChannelPushSource {
    pub fn channel(buffer: usize) -> (PushSender, Self) {
        let (tx, rx) = mpsc::channel(buffer.max(1));
        (tx, Self { rx })
    }
}

#[async_trait]
impl PushSource for ChannelPushSource {
    async fn next_message(&mut self) -> Result<Option<String>, StreamDisconnected> {
        match self.rx.recv().await {
            Some(Ok(text)) => Ok(Some(text)),
            Some(Err(disconnected)) => Err(disconnected),
            None => Ok(None),
        }
    }
}
