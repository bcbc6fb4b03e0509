//! Sync worker that owns the authoritative [`leaderboard_core::Standings`].
//!
//! Receives transitions from [`crate::RuntimeHandle`], applies them in the
//! order they were queued, publishes a fresh [`StandingsView`], and then
//! notifies the event bus. Because the view is swapped before the event is
//! sent, a subscriber that re-reads on notification always sees the state
//! the notification describes (or a newer one).

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tracing::debug;

use leaderboard_core::{Record, Standings, StandingsChange};

use crate::api::StandingsView;
use crate::events::{Event, EventBus};

/// Commands that can be sent to the sync worker
pub enum Command {
    /// Replace the whole collection (snapshot).
    ReplaceAll {
        records: Vec<Record>,
        reply: oneshot::Sender<StandingsChange>,
    },
    /// Insert or overwrite one record (push event).
    Upsert {
        record: Record,
        reply: oneshot::Sender<StandingsChange>,
    },
    /// Stop the worker; the last published view stays readable.
    Shutdown,
}

/// Background task that serializes standings transitions.
///
/// Transitions are synchronous, so each command runs to completion before
/// the next one is received.
pub struct SyncWorker {
    standings: Standings,
    command_rx: mpsc::Receiver<Command>,
    view_tx: watch::Sender<StandingsView>,
    event_bus: EventBus,
}

impl SyncWorker {
    /// Creates a new sync worker.
    pub fn new(
        standings: Standings,
        command_rx: mpsc::Receiver<Command>,
        view_tx: watch::Sender<StandingsView>,
        event_bus: EventBus,
    ) -> Self {
        tracing::info!(
            target: "runtime::worker",
            records = standings.len(),
            "SyncWorker initialized"
        );

        Self {
            standings,
            command_rx,
            view_tx,
            event_bus,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            if !self.handle_command(cmd) {
                break;
            }
        }
        debug!(target: "runtime::worker", "SyncWorker stopped");
    }

    /// Returns `false` once the worker should stop.
    fn handle_command(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::ReplaceAll { records, reply } => {
                let change = self.standings.replace_all(records);
                self.commit(&change);
                if reply.send(change).is_err() {
                    debug!(
                        target: "runtime::worker",
                        "ReplaceAll reply channel closed (caller dropped)"
                    );
                }
                true
            }
            Command::Upsert { record, reply } => {
                let change = self.standings.upsert(record);
                self.commit(&change);
                if reply.send(change).is_err() {
                    debug!(
                        target: "runtime::worker",
                        "Upsert reply channel closed (caller dropped)"
                    );
                }
                true
            }
            Command::Shutdown => false,
        }
    }

    fn commit(&self, change: &StandingsChange) {
        debug!(
            target: "runtime::worker",
            change = ?change,
            records = self.standings.len(),
            "Standings updated"
        );

        self.view_tx
            .send_replace(StandingsView::new(Arc::new(self.standings.clone())));
        self.event_bus.publish(Event::Standings(change.clone()));
    }
}
