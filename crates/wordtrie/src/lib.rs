//! # wordtrie
//!
//! ## Overview
//!
//! This crate provides [PrefixIndex], a trie over a fixed lowercase alphabet that supports two
//! operations: inserting vocabulary words, and listing every stored word that extends a given
//! prefix. Suggestions always come back in lexicographic order, so consumers that only want a
//! single candidate can take the first element, or ask for it directly with
//! [PrefixIndex::first_suggestion].
//!
//! The index is meant to be built once and then queried on every keystroke: insert the full
//! vocabulary up front, and treat the index as read-only afterwards. None of the operations
//! block, and lookups never fail just because nothing matches.
//!
//! Only ASCII lowercase words are supported. Passing any other character to [PrefixIndex::insert]
//! or [PrefixIndex::suggestions] returns [TrieError::UnsupportedSymbol] and leaves the index
//! unchanged.
//!
//! ## Example
//!
//! ```
//! use wordtrie::PrefixIndex;
//!
//! let words = ["hello", "world", "how", "are", "you", "doing", "today"];
//! let index = PrefixIndex::from_words(words)?;
//!
//! assert_eq!(index.suggestions("ho")?, vec!["how".to_string()]);
//! assert_eq!(index.suggestions("h")?, vec!["hello".to_string(), "how".to_string()]);
//! assert_eq!(index.suggestions("z")?, Vec::<String>::new());
//! # Ok::<(), wordtrie::TrieError>(())
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

mod complete;
mod index;
mod symbol;

pub use self::complete::{Completer, EmptyCompleter};
pub use self::index::PrefixIndex;
pub use self::symbol::{Symbol, TrieError, ALPHABET_LEN};
