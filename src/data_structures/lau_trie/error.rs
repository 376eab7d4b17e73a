// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lau word trie.
//!
//! Only insertion can fail. Queries that cannot match simply return
//! an empty result.

/// Errors that can occur while adding words to a [`LauTrie`](super::LauTrie).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LauTrieError {
    /// The word was empty after normalization.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// The word contains a symbol outside the `a`..=`z` alphabet.
    #[error("Word '{word}' contains unsupported symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// The offending word, as normalized.
        word: String,
        /// The first unsupported symbol found.
        symbol: char,
        /// Symbol index (not byte index) of `symbol` in `word`.
        position: usize,
    },

    /// The word has more symbols than the trie is configured to hold.
    #[error("Word '{word}' exceeds maximum trie depth of {max_depth}")]
    WordTooLong {
        /// The word that was too long.
        word: String,
        /// The maximum allowed depth.
        max_depth: usize,
    },

    /// A node without a letter was offered as a child.
    #[error("Cannot attach a node without a letter as a child")]
    DetachedRoot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LauTrieError::EmptyWord;
        assert_eq!(err.to_string(), "Empty word not allowed");

        let err = LauTrieError::InvalidSymbol {
            word: "don't".to_string(),
            symbol: '\'',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "Word 'don't' contains unsupported symbol '\\'' at position 3"
        );

        let err = LauTrieError::WordTooLong {
            word: "test".to_string(),
            max_depth: 2,
        };
        assert_eq!(err.to_string(), "Word 'test' exceeds maximum trie depth of 2");

        let err = LauTrieError::DetachedRoot;
        assert_eq!(err.to_string(), "Cannot attach a node without a letter as a child");
    }
}
