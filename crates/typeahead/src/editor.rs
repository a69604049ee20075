//! # Line editing
//!
//! ## Overview
//!
//! [LineEditor] is the auto-fill state machine behind the prompt. It owns the input buffer and
//! a [Completer], and turns each [InputEvent] into an [Outcome] describing what the display
//! should do. It performs no I/O itself, so the completion behavior is testable without a
//! terminal.
//!
//! The auto-fill contract: after every typed character, the whole buffer is looked up and, when
//! a candidate exists, the buffer becomes the first candidate. What gets echoed is exactly the
//! portion of the new buffer that wasn't displayed yet (the typed character plus whatever the
//! fill appended), so the screen always shows the complete buffer without re-printing any of
//! it.
use wordtrie::Completer;

use crate::event::InputEvent;

/// What the display should do after an [InputEvent] was applied.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Append these characters to the display.
    Echo(String),

    /// Erase the last displayed character.
    Erased,

    /// The line was finished, and the editor reset.
    Submitted(String),

    /// Nothing changed.
    Nothing,
}

/// Auto-filling editor for a single line of input.
pub struct LineEditor<C>
where
    C: Completer,
{
    completer: C,
    buffer: String,
}

impl<C> LineEditor<C>
where
    C: Completer,
{
    /// Create an editor that completes against the given source.
    pub fn new(completer: C) -> Self {
        LineEditor { completer, buffer: String::new() }
    }

    /// The input collected so far.
    pub fn buffer(&self) -> &str {
        self.buffer.as_str()
    }

    /// Apply one input event to the buffer.
    pub fn press(&mut self, event: InputEvent) -> Outcome {
        match event {
            InputEvent::Char(c) if c.is_control() => Outcome::Nothing,
            InputEvent::Char(c) => {
                let shown = self.buffer.len();

                self.buffer.push(c);
                self.fill();

                Outcome::Echo(self.buffer[shown..].to_string())
            },
            InputEvent::Accept => {
                let shown = self.buffer.len();

                self.fill();

                if self.buffer.len() > shown {
                    Outcome::Echo(self.buffer[shown..].to_string())
                } else {
                    Outcome::Nothing
                }
            },
            InputEvent::Erase => {
                if self.buffer.pop().is_some() {
                    Outcome::Erased
                } else {
                    Outcome::Nothing
                }
            },
            InputEvent::Submit => Outcome::Submitted(std::mem::take(&mut self.buffer)),

            // Terminal-level events; the prompt loop handles these before the editor.
            InputEvent::Suspend | InputEvent::Interrupt => Outcome::Nothing,
        }
    }

    /// Replace the buffer with its first completion, when there is one.
    ///
    /// Candidates always extend the buffer (prefix containment), so the displayed text stays a
    /// prefix of the result. A buffer the completer has no candidates for, including one with
    /// characters outside the index alphabet, is left as typed.
    fn fill(&mut self) {
        if let Some(word) = self.completer.complete_first(&self.buffer) {
            self.buffer = word;
        }
    }
}
