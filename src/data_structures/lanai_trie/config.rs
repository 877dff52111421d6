//! Configuration for the Lanai Trie.

use std::fmt;
use std::sync::Arc;

use super::listener::{AllocationListener, SharedAllocationListener};

/// Configuration for a Lanai Trie instance.
///
/// All limits are disabled by default and no listener is installed.
///
/// # Example
///
/// ```
/// use lanai_lib::data_structures::lanai_trie::{LanaiTrie, LanaiTrieConfig, LanaiTrieError};
///
/// let config = LanaiTrieConfig::new().with_max_word_len(4);
/// let mut trie = LanaiTrie::with_config(config);
///
/// assert!(trie.add_word("kona").is_ok());
/// assert!(matches!(
///     trie.add_word("kahuna"),
///     Err(LanaiTrieError::WordTooLong { len: 6, max_len: 4 })
/// ));
/// ```
#[derive(Clone, Default)]
pub struct LanaiTrieConfig {
    /// Longest word, in bytes, that insertion accepts
    max_word_len: Option<usize>,

    /// Maximum number of nodes the trie may hold; further nodes fail to allocate
    node_limit: Option<usize>,

    /// Receiver of allocation and deallocation events
    listener: Option<SharedAllocationListener>,
}

impl LanaiTrieConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject words longer than `max_word_len` bytes with `WordTooLong`.
    pub fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = Some(max_word_len);
        self
    }

    /// Cap the number of nodes. Insertions that would exceed the cap fail with
    /// `AllocationFailure`, exactly as if the allocator had refused.
    pub fn with_node_limit(mut self, node_limit: usize) -> Self {
        self.node_limit = Some(node_limit);
        self
    }

    /// Install a listener for allocation and deallocation events.
    pub fn with_listener<L>(mut self, listener: Arc<L>) -> Self
    where
        L: AllocationListener + Send + Sync + 'static,
    {
        let listener: SharedAllocationListener = listener;
        self.listener = Some(listener);
        self
    }

    /// Get the maximum word length, if any
    pub fn max_word_len(&self) -> Option<usize> {
        self.max_word_len
    }

    /// Get the node budget, if any
    pub fn node_limit(&self) -> Option<usize> {
        self.node_limit
    }

    pub(crate) fn listener(&self) -> Option<SharedAllocationListener> {
        self.listener.clone()
    }
}

impl fmt::Debug for LanaiTrieConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanaiTrieConfig")
            .field("max_word_len", &self.max_word_len)
            .field("node_limit", &self.node_limit)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}
