//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::state::CursorDirection;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Move the board cursor.
    MoveCursor(CursorDirection),
    /// Flip the card under the cursor.
    FlipCard,
    /// Start a new round.
    Reset,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into game commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => KeyAction::MoveCursor(CursorDirection::Left),
            KeyCode::Right | KeyCode::Char('l') => KeyAction::MoveCursor(CursorDirection::Right),
            KeyCode::Up | KeyCode::Char('k') => KeyAction::MoveCursor(CursorDirection::Up),
            KeyCode::Down | KeyCode::Char('j') => KeyAction::MoveCursor(CursorDirection::Down),

            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::FlipCard,
            KeyCode::Char('r') => KeyAction::Reset,
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}
