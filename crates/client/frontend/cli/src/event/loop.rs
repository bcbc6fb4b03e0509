//! Event loop orchestrating runtime events, user input, and rendering.
//!
//! Standings notifications carry no row data; on each one the loop re-reads
//! the whole table from the handle, so a missed (lagged) notification is
//! repaired by the next read.

use std::collections::HashMap;

use anyhow::{Context, Result};
use runtime::{Event as RuntimeEvent, RuntimeHandle, Topic};
use tokio::{
    sync::{broadcast, broadcast::error::RecvError},
    time::{self, Duration, MissedTickBehavior},
};

use client_frontend_core::LeaderboardView;

use crate::{
    config::{CliConfig, UiConfig},
    presentation::terminal::Tui,
    state::AppState,
};

/// Event loop owning the UI state.
pub struct EventLoop {
    pub(crate) subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
    pub(crate) handle: RuntimeHandle,
    pub(crate) app_state: AppState,
    pub(crate) cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(
        subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
        handle: RuntimeHandle,
        cli_config: CliConfig,
    ) -> Self {
        Self {
            subscriptions,
            handle,
            app_state: AppState::new(),
            cli_config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        // Initial render from whatever the runtime already holds
        self.refresh_view();
        self.render(terminal)?;

        let mut standings_rx = self
            .subscriptions
            .remove(&Topic::Standings)
            .context("Standings subscription missing")?;
        let mut feed_rx = self
            .subscriptions
            .remove(&Topic::Feed)
            .context("Feed subscription missing")?;

        let mut input_tick = input_interval(&self.cli_config.ui);

        loop {
            tokio::select! {
                result = standings_rx.recv() => {
                    if self.handle_runtime_event(result, terminal)? {
                        break;
                    }
                }
                result = feed_rx.recv() => {
                    if self.handle_runtime_event(result, terminal)? {
                        break;
                    }
                }
                _ = input_tick.tick() => {
                    if self.handle_input_tick(terminal)? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    /// Apply one runtime event and redraw if it changed anything visible.
    fn handle_runtime_event(
        &mut self,
        result: Result<RuntimeEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(event) => {
                let impact = self.app_state.feed.on_event(&event);
                if matches!(event, RuntimeEvent::Standings(_)) {
                    self.refresh_view();
                }
                if impact.requires_redraw {
                    self.render(terminal)?;
                }
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale events", skipped);
                self.refresh_view();
                self.render(terminal)?;
                Ok(false)
            }
        }
    }

    fn refresh_view(&mut self) {
        self.app_state.set_view(LeaderboardView::from_handle(&self.handle));
    }
}

/// Keyboard poll cadence. Created once per loop so the deadline is not reset
/// by runtime events.
fn input_interval(ui: &UiConfig) -> time::Interval {
    let mut interval = time::interval(Duration::from_millis(ui.input_poll_ms.max(1)));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn input_tick_keeps_cadence_between_runtime_events() {
        let ui = UiConfig::default();
        let mut input_tick = input_interval(&ui);
        input_tick.tick().await;

        // Runtime events arriving faster than the poll period.
        for _ in 0..4 {
            time::advance(Duration::from_millis(5)).await;
        }

        let before = Instant::now();
        input_tick.tick().await;
        assert_eq!(Instant::now(), before, "input tick should already be due");
    }

    #[tokio::test(start_paused = true)]
    async fn zero_poll_interval_is_clamped() {
        let ui = UiConfig {
            input_poll_ms: 0,
            ..UiConfig::default()
        };
        let mut input_tick = input_interval(&ui);
        input_tick.tick().await;
        assert_eq!(input_tick.period(), Duration::from_millis(1));
    }
}
