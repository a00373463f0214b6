//! Shared value types for the triespell workspace.
//!
//! - [`character`] -- the 26-letter dictionary alphabet and word normalization
//! - [`candidate`] -- scored suggestion candidates and their ranking order

pub mod candidate;
pub mod character;

pub use candidate::{SuggestionCandidate, rank_candidates};
pub use character::{ALPHABET_SIZE, letter_at, letter_index, letter_indices, normalize_word};
