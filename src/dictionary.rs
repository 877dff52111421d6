//! Dictionary loading.
//!
//! Reads newline-delimited word lists into a [`LanaiTrie`]. Lines are treated
//! as raw bytes, so dictionaries in any 8-bit encoding load unchanged. A
//! trailing `\n` or `\r\n` is stripped from every line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::dictionary::DictionaryConfig;
use crate::data_structures::lanai_trie::{LanaiTrie, LanaiTrieError};
use crate::error::{LanaiError, LanaiResult};

/// How dictionary lines are turned into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Skip blank lines instead of failing with `EmptyWord`
    pub skip_empty_lines: bool,

    /// Strip leading and trailing ASCII whitespace from each line
    pub trim_whitespace: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            skip_empty_lines: true,
            trim_whitespace: false,
        }
    }
}

impl From<&DictionaryConfig> for LoadOptions {
    fn from(config: &DictionaryConfig) -> Self {
        Self {
            skip_empty_lines: config.skip_empty_lines,
            trim_whitespace: config.trim_whitespace,
        }
    }
}

/// Counts gathered while loading a dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Lines read from the source
    pub lines: usize,

    /// Words that were new to the trie
    pub inserted: usize,

    /// Words the trie already held
    pub duplicates: usize,

    /// Blank lines that were skipped
    pub skipped: usize,
}

/// Loads every line of `reader` into `trie`.
///
/// # Returns
///
/// * `Ok(LoadSummary)` - Counts for the whole source.
/// * `Err(LanaiError)` - A read failure, or a line the trie rejected. Lines
///   before the failing one stay inserted.
pub fn load_words<R: BufRead>(
    reader: R,
    trie: &mut LanaiTrie,
    options: LoadOptions,
) -> LanaiResult<LoadSummary> {
    let mut summary = LoadSummary::default();

    for line in reader.split(b'\n') {
        let line = line?;
        summary.lines += 1;

        let mut word = line.as_slice();
        if let Some(stripped) = word.strip_suffix(b"\r") {
            word = stripped;
        }
        if options.trim_whitespace {
            word = trim_ascii(word);
        }

        if word.is_empty() && options.skip_empty_lines {
            summary.skipped += 1;
            continue;
        }

        match trie.add_word(word) {
            Ok(true) => summary.inserted += 1,
            Ok(false) => summary.duplicates += 1,
            Err(source) => {
                return Err(LanaiError::Dictionary {
                    line: summary.lines,
                    source,
                })
            }
        }
    }

    tracing::debug!(
        lines = summary.lines,
        inserted = summary.inserted,
        duplicates = summary.duplicates,
        skipped = summary.skipped,
        "dictionary loaded"
    );
    Ok(summary)
}

/// Opens `path` and loads it with [`load_words`].
pub fn load_file<P: AsRef<Path>>(
    path: P,
    trie: &mut LanaiTrie,
    options: LoadOptions,
) -> LanaiResult<LoadSummary> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "loading dictionary");
    let file = File::open(path)?;
    load_words(BufReader::new(file), trie, options)
}

/// Returns whether a failed load was caused by a blank line.
pub fn is_empty_line_error(error: &LanaiError) -> bool {
    matches!(
        error,
        LanaiError::Dictionary {
            source: LanaiTrieError::EmptyWord,
            ..
        }
    )
}

fn trim_ascii(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |last| last + 1);
    &bytes[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_ascii() {
        assert_eq!(trim_ascii(b"  kona \t"), b"kona");
        assert_eq!(trim_ascii(b"   "), b"");
        assert_eq!(trim_ascii(b""), b"");
        assert_eq!(trim_ascii(b"a"), b"a");
    }

    #[test]
    fn test_load_strips_line_endings() {
        let mut trie = LanaiTrie::new();
        let source: &[u8] = b"bar\r\nbark\nbarn";
        let summary = load_words(source, &mut trie, LoadOptions::default()).unwrap();

        assert_eq!(summary.lines, 3);
        assert_eq!(summary.inserted, 3);
        assert!(trie.contains_word("bar"));
        assert!(trie.contains_word("barn"));
        assert!(!trie.contains_word("bar\r"));
    }
}
