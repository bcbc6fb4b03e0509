//! Glue code tying the runtime handle and terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use client_frontend_core::Frontend;
use runtime::{RuntimeHandle, Topic};

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;

/// Terminal frontend rendering the standings as a live table.
pub struct CliFrontend {
    config: CliConfig,
}

impl CliFrontend {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        // Subscribe before the first render so no notification is missed
        let subscriptions = handle.subscribe_multiple(&[Topic::Standings, Topic::Feed]);
        let event_loop = EventLoop::new(subscriptions, handle, self.config.clone());

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let result = event_loop.run(&mut terminal).await;

        terminal::restore()?;
        tracing::info!("CLI frontend exiting");

        result
    }
}
