//! Olelo Library
//!
//! This library contains the core components of Olelo: an alphabet-indexed
//! word trie for prefix autocomplete, and the thin dictionary layer that
//! loads `word: definition` files and serves lookups. The library is used
//! by the `olelo` binary, but can also be used as a dependency by other
//! projects.
//!
//! # Architecture
//!
//! - [`data_structures::LauTrie`] stores the vocabulary and enumerates prefixes
//! - [`dictionary::VocabularyLoader`] builds the trie and the definition store
//! - [`dictionary::DictionaryService`] serves both from shared, read-only state
//! - [`config`] and [`error`] carry settings and failures across the crate

pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;

#[cfg(test)]
pub(crate) mod tests;

#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for Olelo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
