//! Dictionary load error module.

use std::path::PathBuf;
use thiserror::Error;

use crate::data_structures::lau_trie::LauTrieError;

/// Errors that can occur while reading `word: definition` lines.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The dictionary file does not exist.
    #[error("Dictionary file not found: {0}")]
    FileNotFound(PathBuf),

    /// Reading from the dictionary source failed.
    #[error("Failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),

    /// A line has no separator or no word before it.
    #[error("Malformed line {line_number}: {reason}")]
    MalformedLine {
        /// 1-based line number in the source
        line_number: usize,
        /// What is wrong with the line
        reason: String,
    },

    /// The word on a line was rejected by the trie.
    #[error("Invalid word on line {line_number}: {source}")]
    InvalidWord {
        /// 1-based line number in the source
        line_number: usize,
        /// Why the trie rejected the word
        #[source]
        source: LauTrieError,
    },
}
