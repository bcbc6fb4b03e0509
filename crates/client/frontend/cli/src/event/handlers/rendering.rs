//! Rendering handlers.

use anyhow::Result;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop {
    /// Draw the current state.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        ui::render(terminal, &mut self.app_state, &self.cli_config.ui)
    }
}
