// Lock-protected engine for multi-threaded hosts
//
// Queries hold the read lock and may run in parallel; insertion holds the
// write lock, so a query never observes a half-built trie path.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use triespell_core::SuggestionCandidate;

use crate::suggestion::SuggestionEngine;

/// A cloneable handle to a [`SuggestionEngine`] behind a reader-writer lock.
///
/// Clones share the same engine.
#[derive(Debug, Clone, Default)]
pub struct SharedSuggestionEngine {
    inner: Arc<RwLock<SuggestionEngine>>,
}

impl SharedSuggestionEngine {
    pub fn new(engine: SuggestionEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    pub fn load_dictionary<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.write().load_dictionary(words);
    }

    pub fn add_word(&self, word: &str) {
        self.inner.write().add_word(word);
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.inner.read().contains_word(word)
    }

    pub fn word_count(&self) -> usize {
        self.inner.read().word_count()
    }

    pub fn get_suggestions(&self, word: &str, max_suggestions: usize) -> Vec<String> {
        self.inner.read().get_suggestions(word, max_suggestions)
    }

    pub fn candidates(&self, word: &str, max_suggestions: usize) -> Vec<SuggestionCandidate> {
        self.inner.read().candidates(word, max_suggestions)
    }

    /// Hold the read lock for several operations at once.
    pub fn read(&self) -> RwLockReadGuard<'_, SuggestionEngine> {
        self.inner.read()
    }

    /// Hold the write lock, e.g. to change options.
    pub fn write(&self) -> RwLockWriteGuard<'_, SuggestionEngine> {
        self.inner.write()
    }
}

impl From<SuggestionEngine> for SharedSuggestionEngine {
    fn from(engine: SuggestionEngine) -> Self {
        Self::new(engine)
    }
}
