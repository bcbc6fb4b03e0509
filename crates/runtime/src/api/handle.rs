//! Cloneable façade over the sync worker.
//!
//! [`RuntimeHandle`] hides channel plumbing: reads come from the latest
//! published [`StandingsView`], writes are queued on the worker's command
//! channel. Write access is crate-private so the [`crate::UpdateBridge`]
//! remains the only writer.
use std::collections::HashMap;

use tokio::sync::{broadcast, mpsc, oneshot, watch};

use leaderboard_core::{Record, StandingsChange};

use super::errors::{Result, RuntimeError};
use super::view::{OrderedIdentities, StandingsView};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;

/// Client-facing handle to read the standings and observe changes
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    view_rx: watch::Receiver<StandingsView>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        view_rx: watch::Receiver<StandingsView>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            command_tx,
            view_rx,
            event_bus,
        }
    }

    /// Current standings snapshot.
    pub fn view(&self) -> StandingsView {
        self.view_rx.borrow().clone()
    }

    /// Current record for `identity`, if any.
    pub fn get(&self, identity: &str) -> Option<Record> {
        self.view_rx.borrow().get(identity).cloned()
    }

    /// Identities in presentation order, captured at call time.
    pub fn ordered_identities(&self) -> OrderedIdentities {
        self.view_rx.borrow().ordered_identities()
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Standings` - collection replaced / record changed
    /// - `Topic::Feed` - snapshot and push-stream lifecycle
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut rx = handle.subscribe(Topic::Standings);
    /// while let Ok(_event) = rx.recv().await {
    ///     let rows = handle.ordered_identities();
    ///     // redraw
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Whether the sync worker has stopped accepting commands.
    pub fn is_closed(&self) -> bool {
        self.command_tx.is_closed()
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub(crate) async fn replace_all(&self, records: Vec<Record>) -> Result<StandingsChange> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::ReplaceAll {
                records,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    pub(crate) async fn upsert(&self, record: Record) -> Result<StandingsChange> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Upsert {
                record,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    pub(crate) async fn shutdown_worker(&self) -> Result<()> {
        self.command_tx
            .send(Command::Shutdown)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}
