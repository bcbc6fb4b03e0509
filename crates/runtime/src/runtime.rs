//! High-level runtime orchestrator.
//!
//! The runtime owns the sync worker, wires up the command channel, the view
//! channel, and the event bus, and exposes a builder-based API for clients.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use leaderboard_core::Standings;

use crate::api::{Result, RuntimeError, RuntimeHandle, StandingsView};
use crate::bridge::UpdateBridge;
use crate::events::EventBus;
use crate::workers::{Command, SyncWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Per-topic broadcast capacity.
    pub event_buffer_size: usize,
    /// Transition queue capacity.
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Main runtime that owns the standings.
///
/// Design: Runtime owns the worker and coordinates shutdown.
/// [`RuntimeHandle`] is the cloneable read façade and [`UpdateBridge`] the
/// write path for the external feeds.
pub struct Runtime {
    handle: RuntimeHandle,
    bridge: UpdateBridge,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across renderers and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Get the bridge that feeds snapshots and push events into the store
    pub fn bridge(&self) -> UpdateBridge {
        self.bridge.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// Transitions already queued are applied first. Handles stay readable
    /// afterwards and keep returning the last published view.
    pub async fn shutdown(self) -> Result<()> {
        if self.handle.shutdown_worker().await.is_err() {
            tracing::debug!(target: "runtime::worker", "Sync worker already stopped");
        }

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the runtime and spawn its worker.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn build(self) -> Result<Runtime> {
        let (command_tx, command_rx) =
            mpsc::channel::<Command>(self.config.command_buffer_size.max(1));
        let (view_tx, view_rx) = watch::channel(StandingsView::default());
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, view_rx, event_bus.clone());
        let bridge = UpdateBridge::new(handle.clone());

        let worker = SyncWorker::new(Standings::new(), command_rx, view_tx, event_bus);
        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle,
            bridge,
            worker_handle,
        })
    }
}
