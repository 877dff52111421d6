//! Dictionary source configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where words come from and how dictionary lines are cleaned up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Newline-delimited word list
    pub path: PathBuf,

    /// Skip blank lines instead of failing on them
    pub skip_empty_lines: bool,

    /// Strip leading and trailing ASCII whitespace from each line
    pub trim_whitespace: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("/usr/share/dict/words"),
            skip_empty_lines: true,
            trim_whitespace: false,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dictionary path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
