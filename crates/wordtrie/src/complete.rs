//! # Completion sources
//!
//! ## Overview
//!
//! Interactive consumers don't need the full [PrefixIndex] API; they need "what are the
//! candidates for this prefix", and usually only the first one. [Completer] is that seam, so
//! front ends can be driven by an index, by something application-specific, or by nothing at
//! all in tests.
use crate::index::PrefixIndex;

/// A source of completion candidates for a prefix.
pub trait Completer {
    /// List the candidates extending `prefix`, best first.
    fn complete(&self, prefix: &str) -> Vec<String>;

    /// The best candidate extending `prefix`, if there is one.
    fn complete_first(&self, prefix: &str) -> Option<String> {
        self.complete(prefix).into_iter().next()
    }
}

/// A basic implementation of [Completer] that never returns anything.
#[derive(Default)]
pub struct EmptyCompleter;

impl Completer for EmptyCompleter {
    fn complete(&self, _: &str) -> Vec<String> {
        vec![]
    }

    fn complete_first(&self, _: &str) -> Option<String> {
        None
    }
}

impl Completer for PrefixIndex {
    /// Candidates are the stored words extending `prefix`, in lexicographic order. A prefix
    /// the index cannot represent (characters outside the alphabet) has no candidates.
    fn complete(&self, prefix: &str) -> Vec<String> {
        self.suggestions(prefix).unwrap_or_default()
    }

    fn complete_first(&self, prefix: &str) -> Option<String> {
        self.first_suggestion(prefix).ok().flatten()
    }
}
