//! Word to definition store.

use hashbrown::HashMap;

/// A plain associative store from normalized word to definition.
#[derive(Debug, Default, Clone)]
pub struct DefinitionStore {
    entries: HashMap<String, String>,
}

impl DefinitionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `definition` for `word`, returning the definition it replaced.
    pub fn insert<W, D>(&mut self, word: W, definition: D) -> Option<String>
    where
        W: Into<String>,
        D: Into<String>,
    {
        self.entries.insert(word.into(), definition.into())
    }

    /// Returns the definition stored for `word`.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no word has been stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
