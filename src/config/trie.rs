//! Trie limits configuration module.

use super::{ConfigResult, Validate};
use crate::data_structures::lanai_trie::LanaiTrieConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Limits applied to tries built from configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrieSettings {
    /// Longest accepted word in bytes (None for unlimited)
    pub max_word_len: Option<usize>,

    /// Maximum number of trie nodes (None for unlimited)
    pub node_limit: Option<usize>,
}

impl TrieSettings {
    /// Builds the trie configuration these settings describe.
    pub fn to_trie_config(&self) -> LanaiTrieConfig {
        let mut config = LanaiTrieConfig::new();
        if let Some(max_word_len) = self.max_word_len {
            config = config.with_max_word_len(max_word_len);
        }
        if let Some(node_limit) = self.node_limit {
            config = config.with_node_limit(node_limit);
        }
        config
    }
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_len == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_word_len must be greater than 0".to_string(),
            ));
        }

        if self.node_limit == Some(0) {
            return Err(ConfigError::ValidationError(
                "node_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
