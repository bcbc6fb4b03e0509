//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// High-level outcome of processing a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Move the row highlight.
    Select(Selection),
    /// No meaningful command was produced.
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Previous,
    Next,
    First,
    Last,
}

/// Converts a raw key event into a higher-level command.
pub fn handle_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char(ch) => handle_char(ch),
        KeyCode::Up => KeyAction::Select(Selection::Previous),
        KeyCode::Down => KeyAction::Select(Selection::Next),
        KeyCode::Home => KeyAction::Select(Selection::First),
        KeyCode::End => KeyAction::Select(Selection::Last),
        _ => KeyAction::None,
    }
}

fn handle_char(raw: char) -> KeyAction {
    match raw {
        'q' | 'Q' => KeyAction::Quit,
        'k' => KeyAction::Select(Selection::Previous),
        'j' => KeyAction::Select(Selection::Next),
        'g' => KeyAction::Select(Selection::First),
        'G' => KeyAction::Select(Selection::Last),
        _ => KeyAction::None,
    }
}
