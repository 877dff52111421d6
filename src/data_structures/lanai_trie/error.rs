//! Error types for the Lanai Trie.
//!
//! This module defines the error types that can occur during Lanai Trie operations.

/// Errors that can occur in Lanai Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LanaiTrieError {
    /// The operation was invoked without a trie handle.
    #[error("Trie handle is missing")]
    NullTrie,

    /// The word (or prefix) argument was missing.
    #[error("Word argument is missing")]
    NullWord,

    /// Error when an empty word is inserted.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// Error when a word exceeds the configured maximum length.
    #[error("Word of {len} bytes exceeds maximum word length of {max_len}")]
    WordTooLong {
        /// Length of the rejected word in bytes.
        len: usize,
        /// The configured maximum.
        max_len: usize,
    },

    /// Memory for a node or a stored word could not be obtained, either from the
    /// allocator or because the configured node budget is exhausted.
    #[error("Allocation of {requested} bytes failed")]
    AllocationFailure {
        /// Number of bytes the failed allocation asked for.
        requested: usize,
    },
}

/// Result type for Lanai Trie operations
pub type LanaiTrieResult<T> = Result<T, LanaiTrieError>;
