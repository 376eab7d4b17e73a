// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lau word trie.
//!
//! Each node owns one slot per alphabet symbol. The slot a child lives in
//! is derived from the child's own letter, so a node can never be filed
//! under the wrong edge.

use super::alphabet::{slot_index, ALPHABET_SIZE};
use super::error::LauTrieError;

/// A node in the Lau word trie.
///
/// Represents one letter position along a word path. Terminal nodes mark
/// the end of a stored word and may still have children.
#[derive(Debug, Default)]
pub struct TrieNode {
    /// The letter on the edge leading into this node (`None` for the root)
    letter: Option<char>,

    /// Child slots indexed by `symbol - 'a'`
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],

    /// Whether the path from the root to this node spells a stored word
    is_terminal: bool,
}

impl TrieNode {
    /// Creates the letterless root node.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a non-terminal node for `letter`.
    pub fn new(letter: char) -> Self {
        Self {
            letter: Some(letter),
            ..Self::default()
        }
    }

    /// The letter this node represents, `None` for the root.
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// Whether this node ends a stored word.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Whether the node has no children at all.
    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Whether a child exists for `symbol`. Symbols outside the alphabet never have one.
    pub fn has_child(&self, symbol: char) -> bool {
        self.get_child(symbol).is_some()
    }

    /// Returns the child for `symbol`, or `None` if absent or outside the alphabet.
    pub fn get_child(&self, symbol: char) -> Option<&TrieNode> {
        slot_index(symbol).and_then(|slot| self.children[slot].as_deref())
    }

    /// Installs `child` in the slot matching its letter and returns it.
    ///
    /// An existing child in that slot is replaced, so callers check
    /// [`has_child`](Self::has_child) first when they want to keep it.
    pub fn add_child(&mut self, child: TrieNode) -> Result<&mut TrieNode, LauTrieError> {
        let letter = child.letter.ok_or(LauTrieError::DetachedRoot)?;
        let slot = slot_index(letter).ok_or_else(|| LauTrieError::InvalidSymbol {
            word: letter.to_string(),
            symbol: letter,
            position: 0,
        })?;

        let installed = self.children[slot].insert(Box::new(child));
        Ok(&mut **installed)
    }

    /// Marks this node as the end of a word. Returns `true` if it was not already.
    pub fn mark_terminal(&mut self) -> bool {
        !std::mem::replace(&mut self.is_terminal, true)
    }

    /// Iterates over present children in slot (alphabetical) order.
    pub fn children(&self) -> impl Iterator<Item = &TrieNode> {
        self.children.iter().filter_map(|slot| slot.as_deref())
    }

    /// Returns the existing child for `symbol` or creates it.
    ///
    /// Fails with `InvalidSymbol` if `symbol` is outside the alphabet.
    pub(crate) fn child_or_insert(&mut self, symbol: char) -> Result<&mut TrieNode, LauTrieError> {
        let slot = slot_index(symbol).ok_or_else(|| LauTrieError::InvalidSymbol {
            word: symbol.to_string(),
            symbol,
            position: 0,
        })?;

        let child = self.children[slot].get_or_insert_with(|| Box::new(TrieNode::new(symbol)));
        Ok(&mut **child)
    }
}
