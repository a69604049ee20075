//! # Auto-filling prompt
//!
//! ## Overview
//!
//! This crate provides a prompt for reading words from the terminal while completing them as
//! they are typed. Each keystroke runs the current input past a [Completer] (normally a
//! [PrefixIndex]); when a candidate exists the input becomes the first candidate, and only the
//! newly-added characters are echoed. Tab accepts the first completion explicitly, Backspace
//! erases one character, and Enter finishes the line.
//!
//! The vocabulary has to be fully built before the prompt starts reading; the index is never
//! mutated while the prompt runs.
//!
//! ## Example
//!
//! ```no_run
//! use typeahead::{Prompt, PromptError};
//! use wordtrie::PrefixIndex;
//!
//! fn main() -> Result<(), PromptError> {
//!     let index = PrefixIndex::from_words(["tab", "table", "tables"]).expect("valid vocabulary");
//!     let mut prompt = Prompt::new(index);
//!
//!     loop {
//!         match prompt.read_word(Some("> ".to_string())) {
//!             Ok(word) => println!("You entered: {word}"),
//!             Err(PromptError::Interrupted) => return Ok(()),
//!             Err(e) => return Err(e),
//!         }
//!     }
//! }
//! ```

// Require docs for public APIs, and disable the more annoying clippy lints.
#![deny(missing_docs)]
#![allow(clippy::bool_to_int_with_if)]
#![allow(clippy::field_reassign_with_default)]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::match_like_matches_macro)]
#![allow(clippy::needless_return)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::type_complexity)]
use std::io::{self, stdout, BufWriter, Stdout, Write};
use std::process;
use std::time::Duration;

use crossterm::{
    event::{poll, read, Event},
    style::Print,
    QueueableCommand,
};

use wordtrie::{Completer, PrefixIndex};

mod editor;
mod event;

pub use self::editor::{LineEditor, Outcome};
pub use self::event::InputEvent;

/// Error type for the [Prompt].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum PromptError {
    /// Failure during I/O.
    #[error("Input/Output Error: {0}")]
    IOError(#[from] io::Error),

    /// The user interrupted the prompt with Ctrl-C or Ctrl-D.
    #[error("Interrupted")]
    Interrupted,
}

/// Result type when using [Prompt::read_word].
pub type PromptResult = Result<String, PromptError>;

struct PromptContext {
    stdout: BufWriter<Stdout>,
}

impl Default for PromptContext {
    fn default() -> Self {
        let stdout = BufWriter::new(stdout());

        PromptContext { stdout }
    }
}

/// Simple prompt that completes words while the user types them.
pub struct Prompt<C = PrefixIndex>
where
    C: Completer,
{
    editor: LineEditor<C>,
    context: PromptContext,
}

impl<C> Prompt<C>
where
    C: Completer,
{
    /// Create a new instance that completes against the given source.
    pub fn new(completer: C) -> Self {
        let editor = LineEditor::new(completer);
        let context = PromptContext::default();

        Prompt { editor, context }
    }

    /// Prompt the user for one word.
    ///
    /// The terminal stays in raw mode until the word is submitted, the user interrupts, or an
    /// error occurs; it is restored in every case.
    pub fn read_word(&mut self, prompt: Option<String>) -> PromptResult {
        crossterm::terminal::enable_raw_mode()?;

        match self.read_input(prompt.as_deref()) {
            Ok(word) => {
                self.linebreak()?;

                crossterm::terminal::disable_raw_mode()?;

                return Ok(word);
            },
            Err(e) => {
                self.linebreak()?;

                crossterm::terminal::disable_raw_mode()?;

                return Err(e);
            },
        }
    }

    fn read_input(&mut self, prompt: Option<&str>) -> PromptResult {
        self.redraw(prompt)?;

        loop {
            let event = match self.step()? {
                Some(event) => event,
                None => continue,
            };

            match event {
                InputEvent::Suspend => {
                    self.suspend()?;
                    self.redraw(prompt)?;
                },
                InputEvent::Interrupt => {
                    return Err(PromptError::Interrupted);
                },
                event => match self.editor.press(event) {
                    Outcome::Echo(s) => {
                        self.context.stdout.queue(Print(s))?;
                        self.context.stdout.flush()?;
                    },
                    Outcome::Erased => {
                        // Move cursor back, erase the character, move back again.
                        self.context.stdout.queue(Print("\u{8} \u{8}"))?;
                        self.context.stdout.flush()?;
                    },
                    Outcome::Submitted(word) => {
                        return Ok(word);
                    },
                    Outcome::Nothing => {},
                },
            }
        }
    }

    fn step(&mut self) -> Result<Option<InputEvent>, PromptError> {
        loop {
            if !poll(Duration::from_millis(500))? {
                continue;
            }

            match read()? {
                Event::Key(ke) => {
                    return Ok(InputEvent::from_key(&ke));
                },
                Event::FocusGained | Event::FocusLost => {
                    // Do nothing for now.
                },
                Event::Mouse(_) => {
                    // Do nothing for now.
                },
                Event::Paste(_) => {
                    // Pasting would bypass per-keystroke completion.
                },
                Event::Resize(_, _) => {
                    // Rendering is incremental; there is nothing to reflow.
                },
            }
        }
    }

    fn suspend(&mut self) -> Result<(), PromptError> {
        // Restore old terminal state.
        crossterm::terminal::disable_raw_mode()?;
        self.context.stdout.flush()?;

        // Send SIGTSTP to process.
        let pid = process::id();

        #[cfg(unix)]
        unsafe {
            libc::kill(pid as i32, libc::SIGTSTP);
        }

        // Restore application terminal state.
        crossterm::terminal::enable_raw_mode()?;
        self.linebreak()?;

        Ok(())
    }

    /// Print the prompt and whatever input was already collected.
    fn redraw(&mut self, prompt: Option<&str>) -> Result<(), io::Error> {
        if let Some(p) = prompt {
            self.context.stdout.queue(Print(p))?;
        }

        if !self.editor.buffer().is_empty() {
            self.context.stdout.queue(Print(self.editor.buffer()))?;
        }

        self.context.stdout.flush()?;

        Ok(())
    }

    fn linebreak(&mut self) -> Result<(), io::Error> {
        self.context.stdout.queue(Print("\r\n"))?;
        self.context.stdout.flush()?;

        Ok(())
    }
}
