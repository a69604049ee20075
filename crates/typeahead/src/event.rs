//! # Input events
//!
//! ## Overview
//!
//! The prompt doesn't consume terminal key events directly; it decodes them into the small set
//! of [InputEvent] values the line editor understands. Keys outside that set decode to `None`
//! and are dropped, which keeps the editor free of any terminal-specific details.
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A decoded key press at the prompt.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    /// A character typed into the input.
    Char(char),

    /// Accept the first completion for the current input (Tab).
    Accept,

    /// Erase the last character of the input (Backspace).
    Erase,

    /// Finish the line (Enter).
    Submit,

    /// Stop the process until resumed (Ctrl-Z).
    Suspend,

    /// Abandon the prompt (Ctrl-C or Ctrl-D).
    Interrupt,
}

impl InputEvent {
    /// Decode a terminal key event, if it maps to anything the prompt handles.
    pub fn from_key(ke: &KeyEvent) -> Option<Self> {
        if ke.kind == KeyEventKind::Release {
            return None;
        }

        if ke.modifiers.contains(KeyModifiers::CONTROL) {
            return match ke.code {
                KeyCode::Char('c') | KeyCode::Char('d') => Some(InputEvent::Interrupt),
                KeyCode::Char('z') => Some(InputEvent::Suspend),
                _ => None,
            };
        }

        match ke.code {
            KeyCode::Char(c) => Some(InputEvent::Char(c)),
            KeyCode::Tab => Some(InputEvent::Accept),
            KeyCode::Backspace => Some(InputEvent::Erase),
            KeyCode::Enter => Some(InputEvent::Submit),
            _ => None,
        }
    }
}
