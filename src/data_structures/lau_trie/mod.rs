// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lau Word Trie Implementation
//!
//! This module provides an alphabet-indexed prefix tree that stores a
//! vocabulary of lowercase words and enumerates every stored word that
//! starts with a given prefix.
//!
//! # Features
//!
//! - Fixed 26-slot branching per node, so children are always visited in
//!   alphabetical order and prefix results come out sorted without a sort step
//! - Words are validated before any node is created; a rejected word never
//!   leaves a partial branch behind
//! - Build with `&mut self`, then share behind an `Arc` and query from any
//!   number of threads without locking
//!
//! # Example
//!
//! ```
//! use olelo_lib::data_structures::lau_trie::LauTrie;
//!
//! let mut trie = LauTrie::new();
//! trie.insert("cat").unwrap();
//! trie.insert("cats").unwrap();
//! trie.insert("car").unwrap();
//!
//! assert_eq!(trie.prefix_search("ca"), vec!["car", "cat", "cats"]);
//! assert_eq!(trie.prefix_search("cat"), vec!["cat", "cats"]);
//! assert!(trie.prefix_search("dog").is_empty());
//! assert!(trie.prefix_search("").is_empty());
//! ```

mod alphabet;
mod error;
mod node;

#[cfg(test)]
mod tests;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

pub use alphabet::ALPHABET_SIZE;
pub use error::LauTrieError;
pub use node::TrieNode;

/// Result type for Lau Trie operations
pub type LauTrieResult<T> = Result<T, LauTrieError>;

/// Configuration options for the Lau Word Trie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauTrieConfig {
    /// Whether words and prefixes are matched case-sensitively.
    /// When `false`, ASCII uppercase input is lowercased before validation.
    pub case_sensitive: bool,

    /// Maximum number of symbols in a stored word
    pub max_depth: usize,
}

impl Default for LauTrieConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            max_depth: 64,
        }
    }
}

/// Lau Word Trie stores a vocabulary and answers prefix queries.
///
/// The trie follows a two-phase lifecycle: it is filled through
/// [`insert`](Self::insert) while exclusively owned, then only read.
/// All read operations take `&self` and touch no shared mutable state.
#[derive(Debug)]
pub struct LauTrie {
    /// The letterless root node
    root: TrieNode,

    /// Number of distinct stored words
    word_count: usize,

    /// Configuration options
    config: LauTrieConfig,
}

impl LauTrie {
    /// Creates a new empty `LauTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LauTrieConfig::default())
    }

    /// Creates a new empty `LauTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: LauTrieConfig) -> Self {
        Self {
            root: TrieNode::root(),
            word_count: 0,
            config,
        }
    }

    /// Returns the configuration this trie was built with.
    pub fn config(&self) -> &LauTrieConfig {
        &self.config
    }

    /// Normalizes and validates a word the same way [`insert`](Self::insert) does.
    ///
    /// # Returns
    ///
    /// * `Ok(Cow<str>)` - The word as it would be stored.
    /// * `Err(LauTrieError)` - If the word is empty, too long, or holds an unsupported symbol.
    pub fn normalize<'a>(&self, word: &'a str) -> LauTrieResult<Cow<'a, str>> {
        let normalized = self.apply_case(word);
        if normalized.is_empty() {
            return Err(LauTrieError::EmptyWord);
        }

        let invalid = normalized
            .chars()
            .enumerate()
            .find(|&(_, symbol)| alphabet::slot_index(symbol).is_none());
        if let Some((position, symbol)) = invalid {
            return Err(LauTrieError::InvalidSymbol {
                word: normalized.into_owned(),
                symbol,
                position,
            });
        }

        // All symbols are ASCII here, so bytes and symbols coincide
        if normalized.len() > self.config.max_depth {
            return Err(LauTrieError::WordTooLong {
                word: normalized.into_owned(),
                max_depth: self.config.max_depth,
            });
        }

        Ok(normalized)
    }

    /// Inserts a word into the trie.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word is new, `false` if it was already stored.
    /// * `Err(LauTrieError)` - If the word was rejected. The trie is left unchanged.
    pub fn insert<W>(&mut self, word: W) -> LauTrieResult<bool>
    where
        W: AsRef<str>,
    {
        let word = self.normalize(word.as_ref())?.into_owned();

        let mut node = &mut self.root;
        for symbol in word.chars() {
            node = node.child_or_insert(symbol)?;
        }

        let is_new = node.mark_terminal();
        if is_new {
            self.word_count += 1;
            tracing::trace!(word = %word, "Inserted word");
        }
        Ok(is_new)
    }

    /// Finds all stored words starting with `prefix`, in ascending order.
    ///
    /// An empty or blank prefix yields nothing. So does a prefix that is
    /// not on any stored path, including one with a symbol the trie
    /// cannot hold.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to search for.
    pub fn prefix_search<P>(&self, prefix: P) -> Vec<String>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        if prefix.trim().is_empty() {
            return Vec::new();
        }

        let prefix = self.apply_case(prefix);
        let landing = match self.descend(&prefix) {
            Some(node) => node,
            None => {
                tracing::debug!(prefix = %prefix, "Prefix not present");
                return Vec::new();
            }
        };

        let mut words = Vec::new();
        let mut path = prefix.into_owned();
        collect_words(landing, &mut path, &mut words);
        tracing::debug!(prefix = %path, matches = words.len(), "Prefix search complete");
        words
    }

    /// Checks whether `word` is stored as a complete word.
    pub fn contains<W>(&self, word: W) -> bool
    where
        W: AsRef<str>,
    {
        let word = self.apply_case(word.as_ref());
        !word.is_empty() && self.descend(&word).is_some_and(TrieNode::is_terminal)
    }

    /// Returns the number of distinct stored words.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Checks if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Follows `path` from the root, returning the node it lands on.
    fn descend(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for symbol in path.chars() {
            node = node.get_child(symbol)?;
        }
        Some(node)
    }

    fn apply_case<'a>(&self, text: &'a str) -> Cow<'a, str> {
        // ASCII-only folding: non-ASCII symbols must stay visible to validation
        if self.config.case_sensitive || !text.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(text.to_ascii_lowercase())
        }
    }
}

impl Default for LauTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for LauTrie {
    /// Inserts every word, skipping (and logging) the ones that are rejected.
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            if let Err(e) = self.insert(word.as_ref()) {
                tracing::warn!(error = %e, "Skipping word");
            }
        }
    }
}

/// Depth-first, preorder walk below `node`.
///
/// `path` holds the letters from the root to `node` on entry and is
/// restored before returning. Recursion depth is bounded by the longest
/// stored word, which `max_depth` caps.
fn collect_words(node: &TrieNode, path: &mut String, words: &mut Vec<String>) {
    if node.is_terminal() {
        words.push(path.clone());
    }

    for child in node.children() {
        if let Some(letter) = child.letter() {
            path.push(letter);
            collect_words(child, path, words);
            path.pop();
        }
    }
}
