//! Builds the runtime, feed sources, and config bundle used by front-ends.
use std::sync::Arc;

use anyhow::{Context, Result};
use client_transport::HttpSnapshotSource;
use runtime::{Runtime, SnapshotSource};

use crate::config::ClientConfig;
use crate::feeds::Feeds;

/// Builder that assembles runtime state, feeds, and configuration for clients.
pub struct RuntimeBuilder {
    config: ClientConfig,
    snapshot_source: Option<Arc<dyn SnapshotSource>>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            snapshot_source: None,
        }
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the HTTP snapshot source (e.g., a fixture-backed one).
    pub fn snapshot_source(mut self, source: impl SnapshotSource + 'static) -> Self {
        self.snapshot_source = Some(Arc::new(source));
        self
    }

    pub async fn build(self) -> Result<RuntimeSetup> {
        let snapshot_source = match self.snapshot_source {
            Some(source) => source,
            None => {
                let url = self.config.snapshot_url();
                let source = HttpSnapshotSource::new(url.clone(), self.config.request_timeout)
                    .with_context(|| format!("Failed to create snapshot client for {url}"))?;
                Arc::new(source)
            }
        };

        let feeds = Feeds::new(
            snapshot_source,
            self.config.stream_url(),
            self.config.reconnect_delay,
        );

        let runtime = Runtime::builder()
            .config(self.config.runtime.clone())
            .build()
            .await?;

        Ok(RuntimeSetup {
            config: self.config,
            runtime,
            feeds,
        })
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RuntimeSetup {
    pub config: ClientConfig,
    pub runtime: Runtime,
    pub feeds: Feeds,
}

#[cfg(test)]
mod tests {
    use super::*;
    use runtime::StaticSnapshotSource;
    use serde_json::json;

    #[tokio::test]
    async fn builds_with_default_config() {
        let setup = RuntimeBuilder::new().build().await.unwrap();

        assert_eq!(setup.feeds.stream_url(), "ws://localhost:8000/session/");
        assert!(setup.runtime.handle().view().is_empty());

        setup.runtime.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn custom_snapshot_source_feeds_the_runtime() {
        let source = StaticSnapshotSource::new(vec![
            json!({"uuid": "u1", "player_name": "Steve", "money_made": "150.00"}),
        ]);
        let setup = RuntimeBuilder::new()
            .snapshot_source(source.clone())
            .build()
            .await
            .unwrap();

        let bridge = setup.runtime.bridge();
        let summary = bridge.load_snapshot(&source).await.unwrap();
        assert_eq!(summary.accepted, 1);
        assert_eq!(
            setup.runtime.handle().get("u1").unwrap().player_name(),
            "Steve"
        );

        setup.runtime.shutdown().await.unwrap();
    }
}
