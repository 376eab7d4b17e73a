//! Lookup service over a loaded vocabulary.

use std::sync::Arc;

use crate::data_structures::lau_trie::LauTrie;
use crate::dictionary::loader::Vocabulary;
use crate::dictionary::store::DefinitionStore;

/// Read-only lookups over a loaded vocabulary.
///
/// Cloning is cheap: clones share the same trie and definitions, so a
/// service can be handed to as many threads as needed.
#[derive(Debug, Clone)]
pub struct DictionaryService {
    trie: Arc<LauTrie>,
    definitions: Arc<DefinitionStore>,
}

impl DictionaryService {
    /// Freezes a built trie and its definitions for serving.
    pub fn new(trie: LauTrie, definitions: DefinitionStore) -> Self {
        Self {
            trie: Arc::new(trie),
            definitions: Arc::new(definitions),
        }
    }

    /// Returns the definition of `word`, if it is stored.
    pub fn get_definition(&self, word: &str) -> Option<&str> {
        let key = self.trie.normalize(word.trim()).ok()?;
        self.definitions.get(&key)
    }

    /// Returns every stored word starting with `prefix`, in ascending order.
    pub fn get_matches(&self, prefix: &str) -> Vec<String> {
        self.trie.prefix_search(prefix.trim())
    }

    /// Number of stored words.
    pub fn word_count(&self) -> usize {
        self.trie.len()
    }
}

impl From<Vocabulary> for DictionaryService {
    fn from(vocabulary: Vocabulary) -> Self {
        Self::new(vocabulary.trie, vocabulary.definitions)
    }
}
