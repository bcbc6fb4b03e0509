//! Input handling (keyboard and resize).

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::input::{self, KeyAction};
use crate::presentation::terminal::Tui;

impl EventLoop {
    /// Poll for keyboard input and handle UI interactions.
    ///
    /// Returns `true` when the user asked to quit.
    pub(in crate::event) fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                match input::handle_key(key) {
                    KeyAction::Quit => {
                        tracing::debug!("Quit requested");
                        Ok(true)
                    }
                    KeyAction::Select(selection) => {
                        self.app_state.select(selection);
                        self.render(terminal)?;
                        Ok(false)
                    }
                    KeyAction::None => Ok(false),
                }
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }
}
