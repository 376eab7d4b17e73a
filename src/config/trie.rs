//! Word trie configuration module.

use super::{ConfigResult, Validate};
use crate::data_structures::lau_trie::LauTrieConfig;
use crate::error::config::ConfigError;

impl Validate for LauTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == 0 {
            return Err(ConfigError::ValidationError(
                "max_depth must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
