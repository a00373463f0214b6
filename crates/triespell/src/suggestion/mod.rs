// Suggestion generation
//
// Produces ranked corrections for a query word by walking the dictionary
// trie and scoring every stored word with the edit distance to the query.
//
//   - `options`: tunable limits (distance threshold, traversal cap)
//   - `collector`: the trie visitor that gathers scored candidates
//   - `engine`: `SuggestionEngine`, which owns the dictionary and ranks results

mod collector;
pub mod engine;
pub mod options;

pub use engine::SuggestionEngine;
pub use options::SuggestionOptions;
