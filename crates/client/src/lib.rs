//! Top-level client orchestrating the Runtime, its Feeds, and a Frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ Runtime (standings store, transition queue, event bus)
//!   ├─→ Feeds (snapshot fetch + push stream, written through the bridge)
//!   └─→ Frontend (UI layer, reads via RuntimeHandle only)
//! ```

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use client_bootstrap::Feeds;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. Client::builder() receives independently built layers
/// 2. Client::run() spawns the feeds against the runtime's bridge
/// 3. Client::run() transfers control to the frontend (blocking)
/// 4. On frontend exit, feeds are stopped and the runtime shuts down
pub struct Client {
    runtime: runtime::Runtime,
    frontend: Box<dyn Frontend>,
    feeds: Option<Feeds>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the frontend returns.
    ///
    /// # Errors
    ///
    /// Returns the frontend's error, or a runtime shutdown error.
    pub async fn run(self) -> Result<()> {
        let handle = self.runtime.handle();

        let feed_tasks = self.feeds.map(|feeds| {
            tracing::info!(stream_url = feeds.stream_url(), "Starting feeds");
            feeds.spawn(self.runtime.bridge())
        });

        // Run frontend (blocks until user quits)
        let mut frontend = self.frontend;
        let frontend_result = frontend.run(handle).await;

        // Cleanup workers
        if let Some(tasks) = feed_tasks {
            tasks.shutdown().await;
        }
        self.runtime.shutdown().await?;

        frontend_result
    }
}
