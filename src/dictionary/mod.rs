//! Dictionary collaborators around the word trie.
//!
//! [`VocabularyLoader`] reads `word: definition` lines and fills both a
//! [`LauTrie`](crate::data_structures::LauTrie) and a [`DefinitionStore`].
//! [`DictionaryService`] then serves definition lookups and prefix
//! matches from the finished, read-only pair.

pub mod loader;
pub mod service;
pub mod store;

pub use loader::{LoadReport, Vocabulary, VocabularyLoader};
pub use service::DictionaryService;
pub use store::DefinitionStore;
