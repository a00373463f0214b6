//! Spelling suggestions over an in-memory prefix tree.
//!
//! A [`SuggestionEngine`] owns a [`PrefixDictionary`] and answers "did you
//! mean" queries: exact dictionary words come back unchanged, anything else
//! is matched against every stored word within a small edit distance and
//! ranked by distance, then by how often the word was inserted.
//!
//! # Architecture
//!
//! - [`distance`] -- Levenshtein distance, full and bounded
//! - [`suggestion`] -- the engine, its options, and candidate collection
//! - [`wordlist`] -- reading word lists and generating benchmark dictionaries
//! - [`session`] -- query statistics and timing around an engine
//! - [`shared`] -- a lock-protected engine handle for multi-threaded hosts
//!
//! ```
//! use triespell::SuggestionEngine;
//!
//! let mut engine = SuggestionEngine::new();
//! engine.load_dictionary(["program", "program", "problem"]);
//! assert_eq!(engine.get_suggestions("progrm", 5), vec!["program"]);
//! assert_eq!(engine.get_suggestions("Program", 5), vec!["program"]);
//! ```

pub mod distance;
pub mod session;
pub mod shared;
pub mod suggestion;
pub mod wordlist;

pub use session::{BenchmarkReport, QueryStats, SpellSession};
pub use shared::SharedSuggestionEngine;
pub use suggestion::{SuggestionEngine, SuggestionOptions};
pub use triespell_core::SuggestionCandidate;
pub use triespell_trie::PrefixDictionary;
pub use wordlist::WordlistError;
