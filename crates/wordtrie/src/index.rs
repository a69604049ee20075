//! # Prefix index
//!
//! ## Overview
//!
//! [PrefixIndex] is a multi-way tree keyed by alphabet symbol. Each node owns up to
//! [ALPHABET_LEN] children, and marks whether the path leading to it spells a complete stored
//! word. Inserting a word walks that path from the root, creating nodes as needed;
//! [PrefixIndex::suggestions] walks to the node for a prefix and then enumerates its subtree.
//!
//! Subtree enumeration uses an explicit stack instead of recursion, so the call depth never
//! depends on how long the stored words are. Children are pushed in descending symbol order,
//! which makes them pop in ascending order, and a node's own word is emitted before its
//! children's: together these yield suggestions in lexicographic order.
use crate::symbol::{symbols_of, Symbol, TrieError, ALPHABET_LEN};

#[derive(Default)]
struct Node {
    children: [Option<Box<Node>>; ALPHABET_LEN],
    terminal: bool,
}

impl Node {
    fn child(&self, sym: Symbol) -> Option<&Node> {
        self.children[sym.index()].as_deref()
    }

    fn child_or_insert(&mut self, sym: Symbol) -> &mut Node {
        self.children[sym.index()].get_or_insert_with(Box::default)
    }
}

/// Walks a subtree depth-first, yielding the words under `node` in lexicographic order.
///
/// `word` is the full word spelled by the path from the root to `node`.
struct SubtreeWords<'a> {
    stack: Vec<(&'a Node, String)>,
}

impl<'a> SubtreeWords<'a> {
    fn new(node: &'a Node, word: String) -> Self {
        SubtreeWords { stack: vec![(node, word)] }
    }
}

impl<'a> Iterator for SubtreeWords<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((node, word)) = self.stack.pop() {
            for idx in (0..ALPHABET_LEN).rev() {
                if let Some(child) = node.children[idx].as_deref() {
                    let mut next = word.clone();
                    next.push(Symbol::from_index(idx).as_char());

                    self.stack.push((child, next));
                }
            }

            if node.terminal {
                return Some(word);
            }
        }

        return None;
    }
}

/// A trie over the lowercase alphabet, supporting prefix-bounded word completion.
///
/// The index is append-only: words can be inserted, but never removed. It is intended to be
/// built once, by inserting the full vocabulary, and queried afterwards; no locking is done, so
/// sharing it across threads requires that the build phase has finished.
///
/// Duplicate insertion is idempotent, and inserting the empty word is allowed: it marks the
/// root, and `""` will then lead the suggestions for the empty prefix.
#[derive(Default)]
pub struct PrefixIndex {
    root: Node,
    words: usize,
}

impl PrefixIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        PrefixIndex::default()
    }

    /// Build an index from a vocabulary.
    ///
    /// If any word contains an unsupported character, the error for it is returned and the
    /// partially-built index is dropped.
    pub fn from_words<W, S>(words: W) -> Result<Self, TrieError>
    where
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = PrefixIndex::new();

        for word in words {
            index.insert(word.as_ref())?;
        }

        return Ok(index);
    }

    /// Number of distinct words stored in the index.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Whether this index contains zero words.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Insert a word into the index.
    ///
    /// The word is validated in full before the tree is touched, so a rejected word leaves the
    /// index unchanged rather than growing a partial path.
    pub fn insert(&mut self, word: &str) -> Result<(), TrieError> {
        let syms = symbols_of(word)?;

        let mut node = &mut self.root;

        for sym in syms {
            node = node.child_or_insert(sym);
        }

        if !node.terminal {
            node.terminal = true;
            self.words += 1;
        }

        return Ok(());
    }

    /// Whether this exact word has been inserted.
    ///
    /// This is a lookup, so characters outside the alphabet cannot corrupt anything; they
    /// simply mean the word was never stored, and `false` is returned.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;

        for c in word.chars() {
            let child = Symbol::from_char(c).ok().and_then(|sym| node.child(sym));

            match child {
                Some(next) => node = next,
                None => return false,
            }
        }

        return node.terminal;
    }

    /// List every stored word that starts with `prefix`, in lexicographic order.
    ///
    /// A prefix that matches no stored path is not an error; it produces an empty list, as
    /// does querying an empty index. The empty prefix lists the entire vocabulary.
    pub fn suggestions(&self, prefix: &str) -> Result<Vec<String>, TrieError> {
        let node = match self.descend(prefix)? {
            Some(node) => node,
            None => return Ok(Vec::new()),
        };

        Ok(SubtreeWords::new(node, prefix.to_string()).collect())
    }

    /// The lexicographically first stored word starting with `prefix`, if any.
    ///
    /// Equivalent to the first element of [PrefixIndex::suggestions], but stops walking the
    /// subtree as soon as a word is found.
    pub fn first_suggestion(&self, prefix: &str) -> Result<Option<String>, TrieError> {
        let node = match self.descend(prefix)? {
            Some(node) => node,
            None => return Ok(None),
        };

        Ok(SubtreeWords::new(node, prefix.to_string()).next())
    }

    /// List the entire vocabulary in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        SubtreeWords::new(&self.root, String::new()).collect()
    }

    /// Walk from the root along `prefix`, if such a path exists.
    fn descend(&self, prefix: &str) -> Result<Option<&Node>, TrieError> {
        let mut node = &self.root;

        for c in prefix.chars() {
            let sym = Symbol::from_char(c)?;

            match node.child(sym) {
                Some(child) => node = child,
                None => return Ok(None),
            }
        }

        return Ok(Some(node));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! strs {
        ( $( $ss: expr ),* ) => {
            vec![ $( String::from($ss), )* ]
        };
    }

    fn mkidx() -> PrefixIndex {
        PrefixIndex::from_words(["hello", "world", "how", "are", "you", "doing", "today"])
            .unwrap()
    }

    #[test]
    fn test_suggestions_by_prefix() {
        let index = mkidx();

        assert_eq!(index.suggestions("ho").unwrap(), strs!["how"]);
        assert_eq!(index.suggestions("h").unwrap(), strs!["hello", "how"]);
        assert_eq!(index.suggestions("z").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_suggestions_empty_prefix_lists_all() {
        let index = mkidx();
        let all = strs!["are", "doing", "hello", "how", "today", "world", "you"];

        assert_eq!(index.suggestions("").unwrap(), all);
        assert_eq!(index.words(), all);
    }

    #[test]
    fn test_suggestions_contain_inserted_word_once() {
        let index = mkidx();

        for word in ["hello", "world", "how", "are", "you", "doing", "today"] {
            let res = index.suggestions(word).unwrap();
            let hits = res.iter().filter(|s| s.as_str() == word).count();

            assert_eq!(hits, 1, "{word:?} should appear exactly once");
        }
    }

    #[test]
    fn test_suggestions_prefix_containment_and_order() {
        let index = mkidx();

        for prefix in ["", "h", "ho", "w", "t", "d"] {
            let res = index.suggestions(prefix).unwrap();

            assert!(res.iter().all(|w| w.starts_with(prefix)));

            let mut sorted = res.clone();
            sorted.sort();
            assert_eq!(res, sorted, "suggestions for {prefix:?} should be ordered");
        }
    }

    #[test]
    fn test_word_before_its_extensions() {
        let index = PrefixIndex::from_words(["ten", "tend", "tent"]).unwrap();

        assert_eq!(index.suggestions("ten").unwrap(), strs!["ten", "tend", "tent"]);
        assert_eq!(index.suggestions("t").unwrap(), strs!["ten", "tend", "tent"]);
        assert_eq!(index.suggestions("tend").unwrap(), strs!["tend"]);
    }

    #[test]
    fn test_insert_idempotent() {
        let mut once = PrefixIndex::new();
        let mut twice = PrefixIndex::new();

        once.insert("tent").unwrap();
        twice.insert("tent").unwrap();
        twice.insert("tent").unwrap();

        assert_eq!(once.len(), 1);
        assert_eq!(twice.len(), 1);
        assert_eq!(once.suggestions("").unwrap(), twice.suggestions("").unwrap());
    }

    #[test]
    fn test_insert_shared_prefixes() {
        let mut index = PrefixIndex::new();

        index.insert("press").unwrap();
        index.insert("pressed").unwrap();
        index.insert("pressure").unwrap();
        index.insert("pressurize").unwrap();

        assert_eq!(index.len(), 4);
        assert_eq!(index.suggestions("presse").unwrap(), strs!["pressed"]);
        assert_eq!(index.suggestions("pressur").unwrap(), strs!["pressure", "pressurize"]);
        assert_eq!(
            index.suggestions("press").unwrap(),
            strs!["press", "pressed", "pressure", "pressurize"]
        );
    }

    #[test]
    fn test_unsupported_symbols_rejected() {
        let mut index = mkidx();

        assert_eq!(index.insert("Hello"), Err(TrieError::UnsupportedSymbol('H')));
        assert_eq!(index.insert("can't"), Err(TrieError::UnsupportedSymbol('\'')));
        assert_eq!(index.suggestions("h1"), Err(TrieError::UnsupportedSymbol('1')));

        // Rejected input must leave the index unchanged.
        assert_eq!(index.len(), 7);
        assert_eq!(index.suggestions("c").unwrap(), Vec::<String>::new());
        assert_eq!(index.suggestions("h").unwrap(), strs!["hello", "how"]);
    }

    #[test]
    fn test_empty_word_marks_root() {
        let mut index = PrefixIndex::new();

        index.insert("ox").unwrap();
        assert!(!index.contains(""));

        index.insert("").unwrap();

        assert!(index.contains(""));
        assert_eq!(index.len(), 2);
        assert_eq!(index.suggestions("").unwrap(), strs!["", "ox"]);
    }

    #[test]
    fn test_empty_index() {
        let index = PrefixIndex::new();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert_eq!(index.suggestions("").unwrap(), Vec::<String>::new());
        assert_eq!(index.suggestions("a").unwrap(), Vec::<String>::new());
        assert_eq!(index.first_suggestion("").unwrap(), None);
    }

    #[test]
    fn test_contains() {
        let index = mkidx();

        assert!(index.contains("how"));
        assert!(index.contains("hello"));

        // Prefixes of stored words are not themselves words.
        assert!(!index.contains("ho"));
        assert!(!index.contains("hell"));

        assert!(!index.contains("howdy"));
        assert!(!index.contains("How"));
        assert!(!index.contains("h2o"));
    }

    #[test]
    fn test_first_suggestion() {
        let index = mkidx();

        for prefix in ["", "h", "ho", "t", "z", "hellos"] {
            let first = index.first_suggestion(prefix).unwrap();
            let all = index.suggestions(prefix).unwrap();

            assert_eq!(first.as_ref(), all.first(), "mismatch for {prefix:?}");
        }

        assert_eq!(index.first_suggestion("h").unwrap(), Some("hello".into()));
        assert_eq!(index.first_suggestion("q1"), Err(TrieError::UnsupportedSymbol('1')));
    }

    #[test]
    fn test_deep_words_traverse_iteratively() {
        // Far deeper than any recursion budget would care about, but deep enough to prove the
        // stack-based walk tracks the heap, not the call stack.
        let long = "ab".repeat(2048);
        let mut index = PrefixIndex::new();

        index.insert(&long).unwrap();
        index.insert("ab").unwrap();

        assert_eq!(index.suggestions("ab").unwrap(), vec!["ab".to_string(), long.clone()]);
        assert_eq!(index.first_suggestion("aba").unwrap(), Some(long));
    }
}
