//! Lanai Trie Implementation
//!
//! This module provides an in-memory prefix trie for predictive typing and
//! autocomplete: words are inserted once, then queried for exact membership or
//! retrieved in bounded batches by prefix.
//!
//! Keys are byte strings compared by raw value; any byte, including `0x00` and
//! `0xFF`, is a valid key character.
//!
//! # Example
//!
//! ```
//! use lanai_lib::data_structures::lanai_trie::LanaiTrie;
//!
//! let mut trie = LanaiTrie::new();
//! trie.add_word("aardvark").unwrap();
//! trie.add_word("wolf").unwrap();
//! trie.add_word("aardwolf").unwrap();
//!
//! assert!(trie.contains_word("wolf"));
//! assert!(!trie.contains_word("aard"));
//!
//! let matches = trie.words_matching_prefix("aard", 2);
//! assert_eq!(matches, vec![&b"aardvark"[..], &b"aardwolf"[..]]);
//! ```
//!
//! # Ownership
//!
//! Each node owns its child list outright and every inserted word is copied
//! into the trie, so the caller's buffers can be dropped right after
//! insertion. Destroying the trie (or simply dropping it) releases every node
//! with an explicit work stack; very long words cannot overflow the call stack.
//!
//! # Partial failure
//!
//! Insertion is not transactional. When a node cannot be allocated part way
//! through a word, the nodes already created for the walked prefix stay in the
//! trie as non-terminal nodes.

mod config;
mod error;
pub mod handle;
mod iter;
mod listener;
mod node;

use std::fmt;
use std::mem;

pub use config::LanaiTrieConfig;
pub use error::{LanaiTrieError, LanaiTrieResult};
pub use iter::PrefixMatches;
#[cfg(test)]
pub(crate) use listener::MockAllocationListener;
pub use listener::{
    AllocationEvent, AllocationKind, AllocationListener, CountingListener,
    SharedAllocationListener, TracingListener,
};
use listener::Ledger;
use node::{NodeList, TrieNode};

/// Lanai Trie is a prefix tree over byte-string words.
///
/// Key features:
/// * Exact membership queries that never report bare prefixes as words
/// * Bounded prefix retrieval in insertion order, depth first
/// * Owned word storage with no lifetime ties to the caller
/// * Per-instance allocation instrumentation
///
/// The trie has no internal synchronization; mutation takes `&mut self`.
pub struct LanaiTrie {
    /// Nodes for the first byte of every word
    roots: NodeList,

    /// Node and word accounting, node budget and listener
    ledger: Ledger,

    /// Longest accepted word in bytes
    max_word_len: Option<usize>,
}

impl LanaiTrie {
    /// Creates a new empty `LanaiTrie` with default configuration.
    ///
    /// Construction does not touch the heap.
    pub fn new() -> Self {
        Self::with_config(LanaiTrieConfig::default())
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    ///
    /// When the configuration carries a listener it receives one
    /// [`AllocationKind::Trie`] allocation event here.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        let mut ledger = Ledger::new(config.listener(), config.node_limit());
        ledger.allocated(AllocationKind::Trie);
        tracing::debug!(?config, "created trie");

        Self {
            roots: NodeList::new(),
            ledger,
            max_word_len: config.max_word_len(),
        }
    }

    /// Inserts a word into the trie.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert. Its bytes are copied into the trie.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word was new, `false` if it was already stored.
    /// * `Err(LanaiTrieError)` - `EmptyWord`, `WordTooLong`, or `AllocationFailure`.
    ///   After an allocation failure the nodes created for the walked prefix remain.
    pub fn add_word<W>(&mut self, word: W) -> LanaiTrieResult<bool>
    where
        W: AsRef<[u8]>,
    {
        let word = word.as_ref();
        let (last, init) = word.split_last().ok_or(LanaiTrieError::EmptyWord)?;

        if let Some(max_len) = self.max_word_len {
            if word.len() > max_len {
                return Err(LanaiTrieError::WordTooLong {
                    len: word.len(),
                    max_len,
                });
            }
        }

        let Self { roots, ledger, .. } = self;

        let mut list = roots;
        for &character in init {
            list = &mut child_or_insert(list, character, ledger)?.children;
        }
        let node = child_or_insert(list, *last, ledger)?;

        if node.is_terminal() {
            return Ok(false);
        }

        node.word = Some(copy_word(word)?);
        ledger.allocated(AllocationKind::Word);
        tracing::trace!(len = word.len(), words = ledger.words(), "inserted word");

        Ok(true)
    }

    /// Inserts every word from `words`, stopping at the first error.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - How many of the words were new.
    /// * `Err(LanaiTrieError)` - The first insertion error; earlier words stay inserted.
    pub fn add_words<I, W>(&mut self, words: I) -> LanaiTrieResult<usize>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<[u8]>,
    {
        let mut inserted = 0;
        for word in words {
            if self.add_word(word)? {
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    /// Checks whether `word` was inserted.
    ///
    /// A node that only exists as part of a longer word does not count, and the
    /// empty word is never contained.
    pub fn contains_word<W>(&self, word: W) -> bool
    where
        W: AsRef<[u8]>,
    {
        self.find_node(word.as_ref())
            .is_some_and(TrieNode::is_terminal)
    }

    /// Returns a lazy iterator over the stored words starting with `prefix`.
    ///
    /// The empty prefix matches every word. An unknown prefix yields nothing.
    /// Words come out depth first: a node's own word before its subtree,
    /// branches in the order their first byte was inserted.
    pub fn prefix_matches<P>(&self, prefix: P) -> PrefixMatches<'_>
    where
        P: AsRef<[u8]>,
    {
        let prefix = prefix.as_ref();
        if prefix.is_empty() {
            return PrefixMatches::from_roots(&self.roots);
        }

        match self.find_node(prefix) {
            Some(node) => PrefixMatches::from_node(node),
            None => PrefixMatches::empty(),
        }
    }

    /// Retrieves at most `capacity` words starting with `prefix`.
    ///
    /// Traversal stops as soon as `capacity` words have been found.
    ///
    /// # Returns
    ///
    /// The matching words, borrowed from the trie. Empty when nothing matches.
    pub fn words_matching_prefix<P>(&self, prefix: P, capacity: usize) -> Vec<&[u8]>
    where
        P: AsRef<[u8]>,
    {
        if capacity == 0 {
            return Vec::new();
        }
        self.prefix_matches(prefix).take(capacity).collect()
    }

    /// Writes words starting with `prefix` into `out`, whose length is the capacity.
    ///
    /// # Returns
    ///
    /// The number of slots filled, never more than `out.len()`. Slots past the
    /// count are left untouched.
    pub fn fill_prefix_matches<'a, P>(&'a self, prefix: P, out: &mut [&'a [u8]]) -> usize
    where
        P: AsRef<[u8]>,
    {
        if out.is_empty() {
            return 0;
        }

        let mut count = 0;
        for (slot, word) in out.iter_mut().zip(self.prefix_matches(prefix)) {
            *slot = word;
            count += 1;
        }
        count
    }

    /// Iterates every stored word, in the same order as an empty-prefix query.
    pub fn iter(&self) -> PrefixMatches<'_> {
        PrefixMatches::from_roots(&self.roots)
    }

    /// Returns the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.ledger.words()
    }

    /// Checks whether the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of nodes, including prefix-only nodes.
    pub fn node_count(&self) -> usize {
        self.ledger.nodes()
    }

    /// Removes every word and node, reporting each release to the listener.
    ///
    /// The trie stays usable and keeps its configuration.
    pub fn clear(&mut self) {
        let nodes = self.ledger.nodes();
        release_nodes(&mut self.roots, &mut self.ledger);
        tracing::debug!(nodes, "cleared trie");
    }

    /// Destroys the trie, releasing every node and then the trie itself.
    ///
    /// Equivalent to dropping it; provided so that call sites can make the end
    /// of the trie's life explicit.
    pub fn destroy(self) {
        tracing::debug!(
            words = self.ledger.words(),
            nodes = self.ledger.nodes(),
            "destroying trie"
        );
        drop(self);
    }

    /// Walks `key` from the root without creating anything.
    fn find_node(&self, key: &[u8]) -> Option<&TrieNode> {
        let (first, rest) = key.split_first()?;
        let mut node = self.roots.find(*first)?;
        for &character in rest {
            node = node.children.find(character)?;
        }
        Some(node)
    }
}

/// Returns the child of `list` matching `character`, appending it if missing.
fn child_or_insert<'l>(
    list: &'l mut NodeList,
    character: u8,
    ledger: &mut Ledger,
) -> LanaiTrieResult<&'l mut TrieNode> {
    let index = match list.position(character) {
        Some(index) => index,
        None => {
            let failure = LanaiTrieError::AllocationFailure {
                requested: mem::size_of::<TrieNode>(),
            };
            if !ledger.has_node_budget() {
                tracing::warn!(nodes = ledger.nodes(), "node budget exhausted");
                return Err(failure);
            }
            let index = list
                .append(TrieNode::new(character))
                .map_err(|_| failure)?;
            ledger.allocated(AllocationKind::Node);
            index
        }
    };
    Ok(list.node_mut(index))
}

/// Copies `word` into an exactly sized heap buffer, reporting allocator refusal.
fn copy_word(word: &[u8]) -> LanaiTrieResult<Box<[u8]>> {
    let mut copy = Vec::new();
    copy.try_reserve_exact(word.len())
        .map_err(|_| LanaiTrieError::AllocationFailure {
            requested: word.len(),
        })?;
    copy.extend_from_slice(word);
    Ok(copy.into_boxed_slice())
}

/// Releases every node below `roots` depth first, without recursion.
fn release_nodes(roots: &mut NodeList, ledger: &mut Ledger) {
    let mut pending = Vec::new();
    roots.drain_into(&mut pending);

    while let Some(mut node) = pending.pop() {
        node.children.drain_into(&mut pending);
        if node.word.take().is_some() {
            ledger.released(AllocationKind::Word);
        }
        ledger.released(AllocationKind::Node);
    }
}

impl Drop for LanaiTrie {
    fn drop(&mut self) {
        release_nodes(&mut self.roots, &mut self.ledger);
        self.ledger.released(AllocationKind::Trie);
    }
}

impl Default for LanaiTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LanaiTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanaiTrie")
            .field("words", &self.ledger.words())
            .field("nodes", &self.ledger.nodes())
            .field("roots", &self.roots.len())
            .field("max_word_len", &self.max_word_len)
            .field("instrumented", &self.ledger.has_listener())
            .finish()
    }
}

impl<'a> IntoIterator for &'a LanaiTrie {
    type Item = &'a [u8];
    type IntoIter = PrefixMatches<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
