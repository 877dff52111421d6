//! Data structures for Lanai.
//!
//! This module contains the trie that backs word storage and prefix lookups.
//! Implementations adhere to the project requirements:
//! - No unsafe code
//! - Explicit, fallible allocation on the insertion path
//! - Bounded work for bounded queries

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{LanaiTrie, LanaiTrieConfig, LanaiTrieError, LanaiTrieResult};
