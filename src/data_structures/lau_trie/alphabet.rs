// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The symbol set a trie node can branch on.

/// Number of child slots per node, one per lowercase ASCII letter.
pub const ALPHABET_SIZE: usize = 26;

/// First symbol of the alphabet; slot `i` holds symbol `FIRST_SYMBOL + i`.
const FIRST_SYMBOL: u8 = b'a';

/// Maps a symbol to its child slot, or `None` when it is outside `a`..=`z`.
#[inline]
pub fn slot_index(symbol: char) -> Option<usize> {
    if symbol.is_ascii_lowercase() {
        Some((symbol as u8 - FIRST_SYMBOL) as usize)
    } else {
        None
    }
}
