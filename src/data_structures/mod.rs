//! Data structures for Olelo.
//!
//! No unsafe code; structures that are built once and then only read
//! are shared through `Arc` without locking.

pub mod lau_trie;

pub use lau_trie::{LauTrie, LauTrieConfig, LauTrieError, LauTrieResult};
