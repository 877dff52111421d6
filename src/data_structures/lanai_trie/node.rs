//! Node and node-list implementation for the Lanai Trie.
//!
//! A [`NodeList`] holds the sibling nodes of one trie depth in insertion order.
//! Each [`TrieNode`] owns its child list outright, so ownership flows strictly
//! from the root list down to the leaves.

use std::collections::TryReserveError;

/// A node in the Lanai Trie.
///
/// Each node represents one byte of a key path. Terminal nodes carry an owned
/// copy of the word that ends at them.
#[derive(Debug)]
pub(crate) struct TrieNode {
    /// The byte this node matches
    pub(crate) character: u8,

    /// The complete word ending at this node, if one was inserted
    pub(crate) word: Option<Box<[u8]>>,

    /// Nodes for the next byte position
    pub(crate) children: NodeList,
}

impl TrieNode {
    /// Creates a non-terminal node with no children.
    pub(crate) fn new(character: u8) -> Self {
        Self {
            character,
            word: None,
            children: NodeList::new(),
        }
    }

    /// Whether a word terminates at this node.
    pub(crate) fn is_terminal(&self) -> bool {
        self.word.is_some()
    }
}

/// The siblings at one trie depth, keyed by byte and kept in insertion order.
///
/// At most one node per list matches a given byte. Lookups are linear scans;
/// lists are bounded by the alphabet size.
#[derive(Debug, Default)]
pub(crate) struct NodeList {
    nodes: Vec<TrieNode>,
}

impl NodeList {
    /// Creates an empty list. Does not allocate.
    pub(crate) const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Returns the position of the node matching `character`.
    pub(crate) fn position(&self, character: u8) -> Option<usize> {
        self.nodes.iter().position(|node| node.character == character)
    }

    /// Returns the node matching `character`.
    pub(crate) fn find(&self, character: u8) -> Option<&TrieNode> {
        self.nodes.iter().find(|node| node.character == character)
    }

    /// Returns the node at `index`, as handed out by `position` or `append`.
    pub(crate) fn node_mut(&mut self, index: usize) -> &mut TrieNode {
        &mut self.nodes[index]
    }

    /// Appends `node` at the end of the list and returns its position.
    ///
    /// Room for the node is reserved fallibly first, so an allocator refusal is
    /// reported instead of aborting. The caller guarantees no sibling already
    /// matches the node's byte.
    pub(crate) fn append(&mut self, node: TrieNode) -> Result<usize, TryReserveError> {
        debug_assert!(self.position(node.character).is_none());
        self.nodes.try_reserve(1)?;
        self.nodes.push(node);
        Ok(self.nodes.len() - 1)
    }

    /// Iterates the nodes in insertion order.
    pub(crate) fn iter(&self) -> std::slice::Iter<'_, TrieNode> {
        self.nodes.iter()
    }

    /// Moves every node of this list onto the end of `out`, leaving it empty.
    pub(crate) fn drain_into(&mut self, out: &mut Vec<TrieNode>) {
        out.append(&mut self.nodes);
    }

    /// Number of sibling nodes.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the list has no nodes.
    pub(crate) fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
