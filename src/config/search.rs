//! Prefix search configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Defaults for prefix queries issued from the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Prefix used when none is given
    pub default_prefix: String,

    /// Number of matches returned when no limit is given
    pub default_limit: usize,

    /// Largest limit a caller may request
    pub max_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_prefix: "bar".to_string(),
            default_limit: 6,
            max_limit: 10_000,
        }
    }
}

impl SearchConfig {
    /// Resolves a requested limit against the configured default and maximum.
    pub fn resolve_limit(&self, requested: Option<usize>) -> ConfigResult<usize> {
        let limit = requested.unwrap_or(self.default_limit);
        if limit > self.max_limit {
            return Err(ConfigError::ValueOutOfRange {
                key: "search.limit".to_string(),
                message: format!("{limit} exceeds max_limit {}", self.max_limit),
            });
        }
        Ok(limit)
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_limit == 0 {
            return Err(ConfigError::ValidationError(
                "max_limit must be greater than 0".to_string(),
            ));
        }

        if self.default_limit == 0 || self.default_limit > self.max_limit {
            return Err(ConfigError::ValueOutOfRange {
                key: "search.default_limit".to_string(),
                message: format!("must be between 1 and {}", self.max_limit),
            });
        }

        Ok(())
    }
}
