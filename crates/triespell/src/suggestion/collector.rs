// Candidate collection over the dictionary trie
//
// Every terminal node within `max_distance` of the query becomes a
// candidate. After a node has been scored, the collector refuses to descend
// into its children once `cap` candidates are held. Siblings still queued in
// ancestor frames are visited (and scored) anyway, so the cap is approximate
// and which words survive depends on alphabetical traversal order. Results
// are therefore a best-effort selection, not a guaranteed global top-K.

use triespell_core::SuggestionCandidate;
use triespell_trie::{PrefixDictionary, TrieNode, TrieVisitor, Walk};

use crate::distance::bounded_distance_slices;

pub(super) struct CandidateCollector<'q> {
    query: &'q [u8],
    max_distance: usize,
    cap: usize,
    candidates: Vec<SuggestionCandidate>,
}

impl<'q> CandidateCollector<'q> {
    /// `query` must already be normalized to the dictionary alphabet.
    pub(super) fn new(query: &'q str, max_distance: usize, cap: usize) -> Self {
        Self {
            query: query.as_bytes(),
            max_distance,
            cap,
            candidates: Vec::new(),
        }
    }

    pub(super) fn collect(mut self, dictionary: &PrefixDictionary) -> Vec<SuggestionCandidate> {
        dictionary.walk(&mut self);
        self.candidates
    }
}

impl TrieVisitor for CandidateCollector<'_> {
    fn visit(&mut self, path: &str, node: &TrieNode) -> Walk {
        if node.is_terminal() {
            // Dictionary paths are ASCII, so bytes compare as characters.
            if let Some(distance) =
                bounded_distance_slices(path.as_bytes(), self.query, self.max_distance)
            {
                self.candidates
                    .push(SuggestionCandidate::new(path, distance, node.frequency()));
            }
        }
        if self.candidates.len() >= self.cap {
            Walk::SkipChildren
        } else {
            Walk::Continue
        }
    }
}
