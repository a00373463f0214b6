// SuggestionEngine: dictionary ownership and ranked suggestions

use tracing::trace;
use triespell_core::{SuggestionCandidate, normalize_word, rank_candidates};
use triespell_trie::PrefixDictionary;

use super::collector::CandidateCollector;
use super::options::SuggestionOptions;

/// Spelling suggestion engine backed by a [`PrefixDictionary`].
///
/// Insertion takes `&mut self` and queries take `&self`, so any number of
/// concurrent queries may share an engine as long as nothing inserts. Use
/// [`SharedSuggestionEngine`](crate::SharedSuggestionEngine) when inserts and
/// queries must interleave across threads.
#[derive(Debug, Default)]
pub struct SuggestionEngine {
    dictionary: PrefixDictionary,
    options: SuggestionOptions,
}

impl SuggestionEngine {
    /// Create an engine with an empty dictionary and default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with an empty dictionary and the given options.
    pub fn with_options(options: SuggestionOptions) -> Self {
        Self {
            dictionary: PrefixDictionary::new(),
            options,
        }
    }

    /// Insert every word of `words`, counting repeats as extra occurrences.
    pub fn load_dictionary<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.dictionary.extend(words);
    }

    /// Insert a single word.
    pub fn add_word(&mut self, word: &str) {
        self.dictionary.insert(word);
    }

    /// Whether the word is in the dictionary (case-insensitive).
    pub fn contains_word(&self, word: &str) -> bool {
        self.dictionary.contains_word(word)
    }

    /// Whether any dictionary word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.dictionary.has_prefix(prefix)
    }

    /// Number of distinct dictionary words.
    pub fn word_count(&self) -> usize {
        self.dictionary.word_count()
    }

    /// Read access to the underlying dictionary.
    pub fn dictionary(&self) -> &PrefixDictionary {
        &self.dictionary
    }

    pub fn options(&self) -> SuggestionOptions {
        self.options
    }

    pub fn set_options(&mut self, options: SuggestionOptions) {
        self.options = options;
    }

    /// Return up to `max_suggestions` dictionary words for `word`, best
    /// first.
    ///
    /// - An empty word, a word without letters, or `max_suggestions == 0`
    ///   gives an empty result.
    /// - The query is lowercased and stripped of non-letters, the same way
    ///   dictionary words are, so `"xyz123"` is looked up as `"xyz"`.
    /// - A query already in the dictionary is returned alone, normalized.
    /// - Otherwise every dictionary word within the distance threshold is
    ///   ranked by distance, then by descending frequency. Words tied on both
    ///   stay in alphabetical order.
    ///
    /// Large dictionaries are searched with a pruned traversal (see
    /// [`SuggestionOptions::candidate_multiplier`]), so the result is a
    /// best-effort selection rather than a guaranteed global top-K.
    pub fn get_suggestions(&self, word: &str, max_suggestions: usize) -> Vec<String> {
        self.candidates(word, max_suggestions)
            .into_iter()
            .map(|candidate| candidate.word)
            .collect()
    }

    /// Same selection as [`get_suggestions`](Self::get_suggestions), keeping
    /// each word's distance and frequency.
    ///
    /// An exact dictionary match is reported with distance 0.
    pub fn candidates(&self, word: &str, max_suggestions: usize) -> Vec<SuggestionCandidate> {
        if word.is_empty() || max_suggestions == 0 {
            return Vec::new();
        }
        let query = normalize_word(word);
        if query.is_empty() {
            return Vec::new();
        }

        let frequency = self.dictionary.frequency(&query);
        if frequency > 0 {
            trace!(query = %query, "exact dictionary match");
            return vec![SuggestionCandidate::new(query, 0, frequency)];
        }

        let cap = self.options.candidate_cap(max_suggestions);
        let collected = CandidateCollector::new(&query, self.options.max_distance, cap)
            .collect(&self.dictionary);
        trace!(
            query = %query,
            candidates = collected.len(),
            pruned = collected.len() >= cap,
            "collected suggestion candidates"
        );

        let mut ranked = rank_candidates(collected);
        ranked.truncate(max_suggestions);
        ranked
    }
}
