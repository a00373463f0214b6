// Suggestion candidates and ranking

use std::cmp::{Ordering, Reverse};

/// A dictionary word scored against a query.
///
/// Candidates only live for the duration of a single suggestion request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SuggestionCandidate {
    /// The dictionary word.
    pub word: String,
    /// Edit distance between the word and the query.
    pub distance: usize,
    /// Number of times the word was inserted into the dictionary.
    pub frequency: u32,
}

impl SuggestionCandidate {
    pub fn new(word: impl Into<String>, distance: usize, frequency: u32) -> Self {
        Self {
            word: word.into(),
            distance,
            frequency,
        }
    }

    /// Compare two candidates by rank: closer words first, then more
    /// frequent words first.
    ///
    /// Candidates with equal distance and frequency compare equal; the word
    /// text is not consulted.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.rank_key().cmp(&other.rank_key())
    }

    fn rank_key(&self) -> (usize, Reverse<u32>) {
        (self.distance, Reverse(self.frequency))
    }
}

/// Sort candidates into suggestion order.
///
/// The sort is stable: candidates that tie on both distance and frequency
/// keep the order in which they were collected (alphabetical for a trie
/// traversal).
pub fn rank_candidates(mut candidates: Vec<SuggestionCandidate>) -> Vec<SuggestionCandidate> {
    candidates.sort_by(SuggestionCandidate::rank_cmp);
    candidates
}
