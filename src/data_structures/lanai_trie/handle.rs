//! Handle-style operations over optional trie and word arguments.
//!
//! These functions mirror the trie's methods for callers that carry a trie or a
//! word that may be missing, for example values coming out of a foreign-call
//! boundary or a lookup table. A missing trie is reported as
//! [`LanaiTrieError::NullTrie`] and a missing word or prefix as
//! [`LanaiTrieError::NullWord`]; otherwise each call behaves exactly like the
//! corresponding method on [`LanaiTrie`].
//!
//! # Example
//!
//! ```
//! use lanai_lib::data_structures::lanai_trie::{handle, LanaiTrieError};
//!
//! let mut trie = handle::create();
//! handle::add_word(Some(&mut trie), Some(&b"bone"[..])).unwrap();
//!
//! assert_eq!(handle::contains_word(Some(&trie), Some(&b"bone"[..])), Ok(true));
//! assert_eq!(handle::contains_word(None, Some(&b"bone"[..])), Err(LanaiTrieError::NullTrie));
//! assert_eq!(handle::contains_word(Some(&trie), None), Err(LanaiTrieError::NullWord));
//!
//! handle::destroy(trie);
//! ```

use super::{LanaiTrie, LanaiTrieConfig, LanaiTrieError, LanaiTrieResult};

/// Creates an empty trie with default configuration.
pub fn create() -> LanaiTrie {
    LanaiTrie::new()
}

/// Creates an empty trie with the given configuration.
pub fn create_with_config(config: LanaiTrieConfig) -> LanaiTrie {
    LanaiTrie::with_config(config)
}

/// Adds `word` to `trie`.
///
/// # Returns
///
/// * `Ok(())` - The word is stored, whether or not it was present before.
/// * `Err(LanaiTrieError)` - `NullTrie`, `NullWord`, or any insertion error.
pub fn add_word(trie: Option<&mut LanaiTrie>, word: Option<&[u8]>) -> LanaiTrieResult<()> {
    let trie = trie.ok_or(LanaiTrieError::NullTrie)?;
    let word = word.ok_or(LanaiTrieError::NullWord)?;
    trie.add_word(word).map(|_| ())
}

/// Checks whether `trie` contains `word`. The empty word is never contained.
pub fn contains_word(trie: Option<&LanaiTrie>, word: Option<&[u8]>) -> LanaiTrieResult<bool> {
    let trie = trie.ok_or(LanaiTrieError::NullTrie)?;
    let word = word.ok_or(LanaiTrieError::NullWord)?;
    Ok(trie.contains_word(word))
}

/// Fills `out` with words of `trie` starting with `prefix`.
///
/// The capacity is `out.len()`. An unknown prefix or an empty trie is not an
/// error and yields a count of zero.
///
/// # Returns
///
/// * `Ok(usize)` - Number of words written to the front of `out`.
/// * `Err(LanaiTrieError)` - `NullTrie` or `NullWord`.
pub fn words_matching_prefix<'t>(
    trie: Option<&'t LanaiTrie>,
    prefix: Option<&[u8]>,
    out: &mut [&'t [u8]],
) -> LanaiTrieResult<usize> {
    let trie = trie.ok_or(LanaiTrieError::NullTrie)?;
    let prefix = prefix.ok_or(LanaiTrieError::NullWord)?;
    Ok(trie.fill_prefix_matches(prefix, out))
}

/// Destroys `trie`, releasing all of its nodes.
///
/// Taking the trie by value makes any later use a compile error.
pub fn destroy(trie: LanaiTrie) {
    trie.destroy();
}
