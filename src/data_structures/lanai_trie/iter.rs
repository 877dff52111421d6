//! Lazy depth-first traversal over the words below a trie position.

use std::iter::FusedIterator;

use super::node::{NodeList, TrieNode};

/// Iterator over stored words sharing a prefix, in pre-order.
///
/// A node's own word is yielded before anything in its subtree, children are
/// visited in insertion order, and a subtree is finished before the next
/// sibling starts. The traversal keeps an explicit stack of sibling cursors, so
/// work stops the moment the caller stops pulling items.
#[derive(Debug, Clone)]
pub struct PrefixMatches<'a> {
    /// Word of the node the prefix resolved to, yielded first
    pending: Option<&'a [u8]>,

    /// One cursor per depth still being explored
    stack: Vec<std::slice::Iter<'a, TrieNode>>,
}

impl<'a> PrefixMatches<'a> {
    /// Iterator that yields nothing. Does not allocate.
    pub(crate) fn empty() -> Self {
        Self {
            pending: None,
            stack: Vec::new(),
        }
    }

    /// Iterator over every word below the root list.
    pub(crate) fn from_roots(roots: &'a NodeList) -> Self {
        if roots.is_empty() {
            return Self::empty();
        }
        Self {
            pending: None,
            stack: vec![roots.iter()],
        }
    }

    /// Iterator over `node`'s own word followed by every word in its subtree.
    pub(crate) fn from_node(node: &'a TrieNode) -> Self {
        let stack = if node.children.is_empty() {
            Vec::new()
        } else {
            vec![node.children.iter()]
        };
        Self {
            pending: node.word.as_deref(),
            stack,
        }
    }
}

impl<'a> Iterator for PrefixMatches<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(word) = self.pending.take() {
            return Some(word);
        }

        loop {
            let cursor = self.stack.last_mut()?;
            match cursor.next() {
                Some(node) => {
                    if !node.children.is_empty() {
                        self.stack.push(node.children.iter());
                    }
                    if let Some(word) = node.word.as_deref() {
                        return Some(word);
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl FusedIterator for PrefixMatches<'_> {}
