// PrefixDictionary: word storage with insertion counts
//
// All operations lowercase their argument and skip characters outside
// 'a'..='z' (see triespell_core::character). Malformed input never errors:
// insertion degrades to a no-op and lookups to `false`.

use triespell_core::letter_indices;

use crate::node::TrieNode;
use crate::walk::{self, TrieVisitor};

/// A trie over the 26-letter lowercase alphabet with per-word frequencies.
///
/// The root node represents the empty string and is always present. Words
/// that contain no alphabet letters are never stored, so the root never
/// becomes terminal.
#[derive(Debug, Default)]
pub struct PrefixDictionary {
    root: TrieNode,
    word_count: usize,
}

impl PrefixDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, counting one more occurrence of it.
    ///
    /// The distinct word count grows only on the first insertion of a word;
    /// the word's frequency grows on every insertion.
    pub fn insert(&mut self, word: &str) {
        let mut letters = letter_indices(word).peekable();
        if letters.peek().is_none() {
            return;
        }
        let mut current = &mut self.root;
        for index in letters {
            current = current.child_or_insert(index);
        }
        if current.record_insertion() {
            self.word_count += 1;
        }
    }

    /// Whether the exact word was inserted at least once.
    pub fn contains_word(&self, word: &str) -> bool {
        self.find_node(word).is_some_and(TrieNode::is_terminal)
    }

    /// Whether any inserted word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.find_node(prefix).is_some()
    }

    /// Number of distinct words stored.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Whether no word has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// How many times the exact word was inserted; 0 when absent.
    pub fn frequency(&self, word: &str) -> u32 {
        self.find_node(word).map_or(0, TrieNode::frequency)
    }

    /// The root node, representing the empty string.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Walk the whole tree depth-first in alphabetical order.
    pub fn walk<V: TrieVisitor>(&self, visitor: &mut V) {
        walk::walk(&self.root, visitor);
    }

    /// Collect every stored word in alphabetical order.
    pub fn words(&self) -> Vec<String> {
        let mut collector = WordCollector::default();
        self.walk(&mut collector);
        collector.words
    }

    /// Follow the normalized letters of `word` from the root.
    ///
    /// Returns `None` for words without letters and for paths that leave
    /// the tree.
    fn find_node(&self, word: &str) -> Option<&TrieNode> {
        let mut letters = letter_indices(word).peekable();
        letters.peek()?;
        let mut current = &self.root;
        for index in letters {
            current = current.child(index)?;
        }
        Some(current)
    }
}

impl<S: AsRef<str>> Extend<S> for PrefixDictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for PrefixDictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        dictionary.extend(iter);
        dictionary
    }
}

#[derive(Default)]
struct WordCollector {
    words: Vec<String>,
}

impl TrieVisitor for WordCollector {
    fn visit(&mut self, path: &str, node: &TrieNode) -> walk::Walk {
        if node.is_terminal() {
            self.words.push(path.to_string());
        }
        walk::Walk::Continue
    }
}
