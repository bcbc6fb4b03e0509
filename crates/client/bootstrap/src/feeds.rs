//! Background tasks that drive the snapshot fetch and the push stream.
//!
//! Reconnecting is a transport concern, so it lives here rather than in the
//! runtime: the bridge consumes one connection at a time and this module
//! decides whether to open another.
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use client_transport::WebSocketPushSource;
use runtime::{
    FeedEvent, PushSource, RuntimeError, SnapshotSource, StreamDisconnected, UpdateBridge,
};

/// The two feeds for one server, ready to be spawned against a bridge.
pub struct Feeds {
    snapshot: Arc<dyn SnapshotSource>,
    stream_url: String,
    reconnect_delay: Option<Duration>,
}

impl Feeds {
    pub fn new(
        snapshot: Arc<dyn SnapshotSource>,
        stream_url: impl Into<String>,
        reconnect_delay: Option<Duration>,
    ) -> Self {
        Self {
            snapshot,
            stream_url: stream_url.into(),
            reconnect_delay,
        }
    }

    pub fn stream_url(&self) -> &str {
        &self.stream_url
    }

    /// Open the push stream and fetch the snapshot concurrently.
    ///
    /// Push messages that land before the snapshot are applied as upserts;
    /// the snapshot then replaces them.
    pub fn spawn(self, bridge: UpdateBridge) -> FeedTasks {
        let stream_bridge = bridge.clone();
        let url = self.stream_url;
        let reconnect_delay = self.reconnect_delay;
        let stream = tokio::spawn(async move {
            supervise_stream(
                stream_bridge,
                move || {
                    let url = url.clone();
                    async move { WebSocketPushSource::connect(&url).await }
                },
                reconnect_delay,
            )
            .await;
        });

        let source = self.snapshot;
        let snapshot = tokio::spawn(async move {
            // Failures are already logged and published by the bridge.
            let _ = bridge.load_snapshot(source.as_ref()).await;
        });

        FeedTasks { snapshot, stream }
    }
}

/// Handles to the spawned feed tasks.
pub struct FeedTasks {
    snapshot: JoinHandle<()>,
    stream: JoinHandle<()>,
}

impl FeedTasks {
    /// Stop both feeds. The standings keep whatever state they reached.
    pub async fn shutdown(self) {
        self.snapshot.abort();
        self.stream.abort();
        let _ = self.snapshot.await;
        let _ = self.stream.await;
    }
}

/// Keep a push stream attached to `bridge`, reconnecting after `delay`.
///
/// Returns when a connection ends and `delay` is `None`, or when the runtime
/// has shut down.
pub async fn supervise_stream<C, Fut, S>(
    bridge: UpdateBridge,
    mut connect: C,
    delay: Option<Duration>,
) where
    C: FnMut() -> Fut,
    Fut: Future<Output = Result<S, StreamDisconnected>>,
    S: PushSource,
{
    loop {
        if bridge.handle().is_closed() {
            tracing::info!(
                target: "client::bootstrap",
                "Runtime stopped, push stream supervisor exiting"
            );
            return;
        }

        match connect().await {
            Ok(source) => match bridge.run_stream(source).await {
                Ok(()) | Err(RuntimeError::StreamDisconnected(_)) => {}
                Err(e) => {
                    tracing::warn!(
                        target: "client::bootstrap",
                        error = %e,
                        "Runtime stopped, push stream supervisor exiting"
                    );
                    return;
                }
            },
            Err(disconnected) => {
                tracing::warn!(
                    target: "client::bootstrap",
                    reason = %disconnected.reason,
                    "Push stream connect failed"
                );
                bridge
                    .handle()
                    .event_bus()
                    .publish_feed(FeedEvent::StreamDisconnected {
                        reason: disconnected.reason,
                    });
            }
        }

        let Some(delay) = delay else {
            tracing::info!(
                target: "client::bootstrap",
                "Reconnect disabled, push stream supervisor exiting"
            );
            return;
        };
        tracing::debug!(
            target: "client::bootstrap",
            delay_ms = delay.as_millis() as u64,
            "Reconnecting push stream"
        );
        tokio::time::sleep(delay).await;
    }
}
