//! Update bridge: adapts the snapshot and push feeds into standings
//! transitions.
//!
//! The bridge is the only component that knows the feeds exist. It parses raw
//! payloads into [`Record`]s, drops (and logs) anything malformed, and queues
//! `replace_all` / `upsert` on the sync worker. Push events that arrive before
//! the snapshot are applied as ordinary upserts; the snapshot, when it lands,
//! replaces them.

use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use leaderboard_core::{MalformedRecord, Record, StandingsChange};

use crate::api::{PushSource, Result, RuntimeError, RuntimeHandle, SnapshotSource};
use crate::events::{FeedEvent, PayloadOrigin};

/// Counts reported after a snapshot has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotSummary {
    pub accepted: usize,
    pub rejected: usize,
}

/// Adapter between the external feeds and the sync worker.
#[derive(Clone)]
pub struct UpdateBridge {
    handle: RuntimeHandle,
}

impl UpdateBridge {
    pub(crate) fn new(handle: RuntimeHandle) -> Self {
        Self { handle }
    }

    /// Fetch the snapshot from `source` and apply it.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::SnapshotFetch` if the fetch fails; the standings
    /// keep their prior state and no retry is attempted.
    pub async fn load_snapshot(&self, source: &dyn SnapshotSource) -> Result<SnapshotSummary> {
        match source.fetch_snapshot().await {
            Ok(payloads) => self.apply_snapshot(payloads).await,
            Err(error) => {
                warn!(target: "runtime::bridge", error = %error, "Snapshot fetch failed");
                self.handle
                    .event_bus()
                    .publish_feed(FeedEvent::SnapshotFailed {
                        error: error.to_string(),
                    });
                Err(error.into())
            }
        }
    }

    /// Apply an already-fetched snapshot, skipping malformed payloads.
    pub async fn apply_snapshot(&self, payloads: Vec<Value>) -> Result<SnapshotSummary> {
        let mut records = Vec::with_capacity(payloads.len());
        let mut rejected = 0;

        for (index, payload) in payloads.iter().enumerate() {
            match Record::from_payload(payload) {
                Ok(record) => records.push(record),
                Err(error) => {
                    rejected += 1;
                    warn!(
                        target: "runtime::bridge",
                        index,
                        error = %error,
                        "Skipping malformed snapshot record"
                    );
                    self.reject(PayloadOrigin::Snapshot, error);
                }
            }
        }

        let accepted = records.len();
        self.handle.replace_all(records).await?;

        info!(target: "runtime::bridge", accepted, rejected, "Snapshot applied");
        self.handle
            .event_bus()
            .publish_feed(FeedEvent::SnapshotLoaded { accepted, rejected });

        Ok(SnapshotSummary { accepted, rejected })
    }

    /// Apply one push-stream message.
    ///
    /// Returns `Ok(None)` when the message was malformed and dropped.
    pub async fn apply_message(&self, text: &str) -> Result<Option<StandingsChange>> {
        match Record::from_json(text) {
            Ok(record) => {
                debug!(
                    target: "runtime::bridge",
                    identity = %record.identity(),
                    money_made = %record.money_made(),
                    "Push update received"
                );
                self.handle.upsert(record).await.map(Some)
            }
            Err(error) => {
                warn!(
                    target: "runtime::bridge",
                    error = %error,
                    "Dropping malformed push message"
                );
                self.reject(PayloadOrigin::Push, error);
                Ok(None)
            }
        }
    }

    /// Consume `source` until it closes or drops, applying every message in
    /// arrival order.
    ///
    /// # Errors
    ///
    /// - `RuntimeError::StreamDisconnected` if the connection dropped
    /// - `RuntimeError::CommandChannelClosed` if the runtime shut down
    ///
    /// Either way the standings keep the last state they reached.
    pub async fn run_stream<S>(&self, mut source: S) -> Result<()>
    where
        S: PushSource,
    {
        let bus = self.handle.event_bus();
        bus.publish_feed(FeedEvent::StreamConnected);

        loop {
            match source.next_message().await {
                Ok(Some(text)) => {
                    self.apply_message(&text).await?;
                }
                Ok(None) => {
                    info!(target: "runtime::bridge", "Push stream closed");
                    bus.publish_feed(FeedEvent::StreamClosed);
                    return Ok(());
                }
                Err(disconnected) => {
                    warn!(
                        target: "runtime::bridge",
                        reason = %disconnected.reason,
                        "Push stream disconnected"
                    );
                    bus.publish_feed(FeedEvent::StreamDisconnected {
                        reason: disconnected.reason.clone(),
                    });
                    return Err(disconnected.into());
                }
            }
        }
    }

    /// Spawn [`UpdateBridge::run_stream`] in the background.
    pub fn subscribe<S>(&self, source: S) -> PushSubscription
    where
        S: PushSource + 'static,
    {
        let bridge = self.clone();
        let task = tokio::spawn(async move { bridge.run_stream(source).await });
        PushSubscription { task }
    }

    /// Read access for callers that hold the bridge.
    pub fn handle(&self) -> &RuntimeHandle {
        &self.handle
    }

    fn reject(&self, origin: PayloadOrigin, error: MalformedRecord) {
        self.handle
            .event_bus()
            .publish_feed(FeedEvent::PayloadRejected { origin, error });
    }
}

/// Handle to a push stream being consumed in the background.
pub struct PushSubscription {
    task: JoinHandle<Result<()>>,
}

impl PushSubscription {
    /// Tear the subscription down; no further upserts are issued.
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the stream to end. A cancelled subscription ends with `Ok(())`.
    pub async fn join(self) -> Result<()> {
        match self.task.await {
            Ok(result) => result,
            Err(error) if error.is_cancelled() => Ok(()),
            Err(error) => Err(RuntimeError::WorkerJoin(error)),
        }
    }
}
