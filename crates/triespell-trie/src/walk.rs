// Depth-first traversal of the prefix tree
//
// Nodes are visited in pre-order with children in alphabetical order. The
// visitor sees every node together with the string it represents and decides
// whether the walk descends into that node's children. Skipping a node's
// children does not stop the walk: siblings still pending higher up the tree
// are visited normally.

use crate::node::TrieNode;

/// What the walk should do after visiting a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// Descend into the node's children.
    Continue,
    /// Do not descend below this node.
    SkipChildren,
}

/// Callback invoked for every node reached by [`walk`].
pub trait TrieVisitor {
    /// Visit a node. `path` is the string the node represents (empty for the
    /// root).
    fn visit(&mut self, path: &str, node: &TrieNode) -> Walk;
}

impl<F> TrieVisitor for F
where
    F: FnMut(&str, &TrieNode) -> Walk,
{
    fn visit(&mut self, path: &str, node: &TrieNode) -> Walk {
        self(path, node)
    }
}

/// Walk the subtree rooted at `root`, starting with an empty path.
///
/// The walk keeps its own stack, so arbitrarily deep trees are safe.
pub fn walk<V: TrieVisitor + ?Sized>(root: &TrieNode, visitor: &mut V) {
    let mut path = String::new();
    // (length of the parent path, letter leading here, node)
    let mut stack: Vec<(usize, Option<char>, &TrieNode)> = vec![(0, None, root)];

    while let Some((depth, letter, node)) = stack.pop() {
        // Paths are ASCII, so byte length equals depth.
        path.truncate(depth);
        if let Some(letter) = letter {
            path.push(letter);
        }
        if visitor.visit(&path, node) == Walk::SkipChildren {
            continue;
        }
        let first_child = stack.len();
        let depth = path.len();
        stack.extend(node.children().map(|(letter, child)| (depth, Some(letter), child)));
        stack[first_child..].reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrefixDictionary;

    fn dictionary(words: &[&str]) -> PrefixDictionary {
        words.iter().collect()
    }

    #[test]
    fn visits_every_prefix_in_preorder() {
        let dict = dictionary(&["ab", "b"]);
        let mut seen = Vec::new();
        dict.walk(&mut |path: &str, _: &TrieNode| {
            seen.push(path.to_string());
            Walk::Continue
        });
        assert_eq!(seen, vec!["", "a", "ab", "b"]);
    }

    #[test]
    fn skip_children_prunes_only_that_subtree() {
        let dict = dictionary(&["aa", "ab", "ba"]);
        let mut seen = Vec::new();
        dict.walk(&mut |path: &str, _: &TrieNode| {
            seen.push(path.to_string());
            if path == "a" {
                Walk::SkipChildren
            } else {
                Walk::Continue
            }
        });
        assert_eq!(seen, vec!["", "a", "b", "ba"]);
    }

    #[test]
    fn skipping_at_root_visits_root_only() {
        let dict = dictionary(&["word"]);
        let mut count = 0;
        dict.walk(&mut |_: &str, _: &TrieNode| {
            count += 1;
            Walk::SkipChildren
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn terminal_flags_are_visible_to_visitor() {
        let dict = dictionary(&["to", "top", "top"]);
        let mut terminals = Vec::new();
        dict.walk(&mut |path: &str, node: &TrieNode| {
            if node.is_terminal() {
                terminals.push((path.to_string(), node.frequency()));
            }
            Walk::Continue
        });
        assert_eq!(terminals, vec![("to".to_string(), 1), ("top".to_string(), 2)]);
    }

    #[test]
    fn skipped_subtree_is_followed_by_deeper_siblings() {
        let dict = dictionary(&["abc", "abd", "ac", "b"]);
        let mut seen = Vec::new();
        dict.walk(&mut |path: &str, _: &TrieNode| {
            seen.push(path.to_string());
            if path == "ab" {
                Walk::SkipChildren
            } else {
                Walk::Continue
            }
        });
        assert_eq!(seen, vec!["", "a", "ab", "ac", "b"]);
    }

    #[test]
    fn deep_word_is_walked_to_the_end() {
        let word = "z".repeat(200_000);
        let dict = dictionary(&[word.as_str()]);
        let mut deepest = 0;
        let mut terminal_len = 0;
        dict.walk(&mut |path: &str, node: &TrieNode| {
            deepest = deepest.max(path.len());
            if node.is_terminal() {
                terminal_len = path.len();
            }
            Walk::Continue
        });
        assert_eq!(deepest, 200_000);
        assert_eq!(terminal_len, 200_000);
    }
}
