// Trie node with one owned slot per alphabet letter

use triespell_core::{ALPHABET_SIZE, letter_at};

/// One character position in the prefix tree.
///
/// A node reached from the root by following letters `c1..cn` represents the
/// string `c1..cn`. Children are owned exclusively by their parent; the tree
/// has no shared or back references.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    terminal: bool,
    frequency: u32,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether some inserted word ends exactly at this node.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// How many times the word ending here was inserted.
    ///
    /// Always 0 for non-terminal nodes.
    #[inline]
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Return the child in the given letter slot, if present.
    #[inline]
    pub fn child(&self, index: usize) -> Option<&TrieNode> {
        self.children.get(index)?.as_deref()
    }

    /// Return the child in the given letter slot, creating it if absent.
    pub(crate) fn child_or_insert(&mut self, index: usize) -> &mut TrieNode {
        self.children[index].get_or_insert_with(Box::default)
    }

    /// Iterate over the present children in alphabetical order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_deref().map(|child| (letter_at(i), child)))
    }

    /// Record one insertion of the word ending here.
    ///
    /// Returns `true` if this was the first insertion (the node just became
    /// terminal).
    pub(crate) fn record_insertion(&mut self) -> bool {
        let first = !self.terminal;
        self.terminal = true;
        self.frequency = self.frequency.saturating_add(1);
        first
    }
}

impl Drop for TrieNode {
    // Frees descendants iteratively; the default drop recurses once per letter.
    fn drop(&mut self) {
        let mut pending: Vec<Box<TrieNode>> =
            self.children.iter_mut().filter_map(Option::take).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_empty() {
        let node = TrieNode::new();
        assert!(!node.is_terminal());
        assert_eq!(node.frequency(), 0);
        assert_eq!(node.children().count(), 0);
    }

    #[test]
    fn child_or_insert_creates_once() {
        let mut node = TrieNode::new();
        node.child_or_insert(2).record_insertion();
        node.child_or_insert(2).record_insertion();
        let child = node.child(2).unwrap();
        assert_eq!(child.frequency(), 2);
        assert_eq!(node.children().count(), 1);
    }

    #[test]
    fn child_out_of_range_is_none() {
        let node = TrieNode::new();
        assert!(node.child(ALPHABET_SIZE).is_none());
    }

    #[test]
    fn children_iterate_alphabetically() {
        let mut node = TrieNode::new();
        node.child_or_insert(25);
        node.child_or_insert(0);
        node.child_or_insert(7);
        let letters: Vec<char> = node.children().map(|(c, _)| c).collect();
        assert_eq!(letters, vec!['a', 'h', 'z']);
    }

    #[test]
    fn record_insertion_reports_first_time_only() {
        let mut node = TrieNode::new();
        assert!(node.record_insertion());
        assert!(!node.record_insertion());
        assert!(!node.record_insertion());
        assert!(node.is_terminal());
        assert_eq!(node.frequency(), 3);
    }

    #[test]
    fn deep_chain_drops_without_recursion() {
        let mut root = TrieNode::new();
        let mut current = &mut root;
        for _ in 0..200_000 {
            current = current.child_or_insert(0);
        }
        current.record_insertion();
        drop(root);
    }
}
