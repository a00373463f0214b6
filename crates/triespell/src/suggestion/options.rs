// Suggestion limits

use serde::{Deserialize, Serialize};

/// Default largest edit distance at which a dictionary word is suggested.
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// Default factor between requested suggestions and the traversal cap.
pub const DEFAULT_CANDIDATE_MULTIPLIER: usize = 10;

/// Limits applied by a [`SuggestionEngine`](super::SuggestionEngine).
///
/// Missing fields take their default values when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionOptions {
    /// Words farther than this from the query are never suggested.
    pub max_distance: usize,
    /// Once `max_suggestions * candidate_multiplier` candidates have been
    /// collected, the traversal stops descending into further subtrees.
    /// A multiplier of 0 is treated as 1.
    pub candidate_multiplier: usize,
}

impl SuggestionOptions {
    /// Number of collected candidates after which the traversal is pruned.
    pub fn candidate_cap(&self, max_suggestions: usize) -> usize {
        max_suggestions.saturating_mul(self.candidate_multiplier.max(1))
    }
}

impl Default for SuggestionOptions {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            candidate_multiplier: DEFAULT_CANDIDATE_MULTIPLIER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = SuggestionOptions::default();
        assert_eq!(options.max_distance, 2);
        assert_eq!(options.candidate_multiplier, 10);
    }

    #[test]
    fn candidate_cap_scales_with_request() {
        let options = SuggestionOptions::default();
        assert_eq!(options.candidate_cap(5), 50);
        assert_eq!(options.candidate_cap(0), 0);
        assert_eq!(options.candidate_cap(usize::MAX), usize::MAX);
    }

    #[test]
    fn zero_multiplier_still_collects() {
        let options: SuggestionOptions =
            serde_json::from_str(r#"{"candidate_multiplier": 0}"#).unwrap();
        assert_eq!(options.candidate_multiplier, 0);
        assert_eq!(options.candidate_cap(5), 5);
        assert_eq!(options.candidate_cap(0), 0);
    }

    #[test]
    fn deserialize_fills_missing_fields() {
        let options: SuggestionOptions = serde_json::from_str(r#"{"max_distance": 1}"#).unwrap();
        assert_eq!(options.max_distance, 1);
        assert_eq!(options.candidate_multiplier, DEFAULT_CANDIDATE_MULTIPLIER);
    }
}
