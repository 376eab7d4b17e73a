//! Dictionary source configuration module.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// What the loader does with a line it cannot store.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvalidWordPolicy {
    /// Report the line and keep loading
    #[default]
    Skip,
    /// Stop loading and return the error
    Abort,
}

/// Dictionary source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DictionaryConfig {
    /// Path to the `word: definition` file
    pub path: PathBuf,

    /// Separator between word and definition (a single character)
    pub separator: String,

    /// Policy for malformed lines and rejected words
    pub on_invalid_word: InvalidWordPolicy,
}

impl DictionaryConfig {
    /// The separator as a `char`. Only meaningful after validation.
    pub fn separator_char(&self) -> char {
        self.separator.chars().next().unwrap_or(':')
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("files/dictionary.txt"),
            separator: ":".to_string(),
            on_invalid_word: InvalidWordPolicy::default(),
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "dictionary path cannot be empty".to_string(),
            ));
        }

        let mut chars = self.separator.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() => Ok(()),
            _ => Err(ConfigError::ValidationError(format!(
                "separator must be a single non-whitespace character, got {:?}",
                self.separator
            ))),
        }
    }
}
