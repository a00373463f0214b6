//! Prefix tree (trie) dictionary.
//!
//! This crate stores a dictionary of words as a tree of 26-way nodes, one
//! node per prefix, annotated with how many times each complete word was
//! inserted.
//!
//! # Architecture
//!
//! - [`node`] -- the tree node with its fixed letter slots
//! - [`dictionary`] -- [`PrefixDictionary`]: insertion, exact and prefix lookup
//! - [`walk`] -- depth-first traversal driven by a [`TrieVisitor`]

pub mod dictionary;
pub mod node;
pub mod walk;

pub use dictionary::PrefixDictionary;
pub use node::TrieNode;
pub use walk::{TrieVisitor, Walk};
