// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit tests for Lau Word Trie insertion and prefix search.

use std::sync::{Arc, Barrier};
use std::thread;

use test_case::test_case;

use crate::data_structures::lau_trie::{LauTrie, LauTrieConfig, LauTrieError};

fn cat_trie() -> LauTrie {
    let mut trie = LauTrie::new();
    for word in ["cat", "cats", "car"] {
        trie.insert(word).unwrap();
    }
    trie
}

#[test_case("ca" => vec!["car", "cat", "cats"]; "shared prefix")]
#[test_case("cat" => vec!["cat", "cats"]; "prefix is itself a word")]
#[test_case("c" => vec!["car", "cat", "cats"]; "single letter")]
#[test_case("cats" => vec!["cats"]; "leaf word")]
#[test_case("dog" => Vec::<String>::new(); "absent prefix")]
#[test_case("catsup" => Vec::<String>::new(); "runs past a leaf")]
#[test_case("" => Vec::<String>::new(); "empty prefix")]
#[test_case("   " => Vec::<String>::new(); "blank prefix")]
fn test_prefix_search_scenario(prefix: &str) -> Vec<String> {
    cat_trie().prefix_search(prefix)
}

#[test]
fn test_trie_basic_operations() {
    let mut trie = LauTrie::new();
    assert!(trie.is_empty());

    assert!(trie.insert("hello").unwrap());
    assert_eq!(trie.len(), 1);
    assert!(!trie.is_empty());
    assert!(trie.contains("hello"));
    assert!(!trie.contains("hell"));
    assert!(!trie.contains(""));

    // Re-inserting is a no-op
    assert!(!trie.insert("hello").unwrap());
    assert_eq!(trie.len(), 1);
    assert_eq!(trie.prefix_search("he"), vec!["hello"]);
}

#[test]
fn test_insert_rejects_invalid_words() {
    let mut trie = LauTrie::new();

    assert_eq!(trie.insert(""), Err(LauTrieError::EmptyWord));
    assert_eq!(
        trie.insert("don't"),
        Err(LauTrieError::InvalidSymbol {
            word: "don't".to_string(),
            symbol: '\'',
            position: 3,
        })
    );
    assert!(matches!(
        trie.insert("well-known"),
        Err(LauTrieError::InvalidSymbol { symbol: '-', position: 4, .. })
    ));
    assert!(matches!(
        trie.insert("route66"),
        Err(LauTrieError::InvalidSymbol { symbol: '6', .. })
    ));

    assert!(trie.is_empty());
}

#[test]
fn test_rejected_word_leaves_no_partial_branch() {
    let mut trie = cat_trie();
    let before = trie.prefix_search("d");

    assert!(trie.insert("dog's").is_err());

    assert_eq!(trie.prefix_search("d"), before);
    assert!(trie.prefix_search("dog").is_empty());
    assert_eq!(trie.len(), 3);
}

#[test]
fn test_word_too_long() {
    let config = LauTrieConfig {
        max_depth: 4,
        ..Default::default()
    };
    let mut trie = LauTrie::with_config(config);
    assert_eq!(trie.config().max_depth, 4);

    assert!(trie.insert("four").unwrap());
    assert_eq!(
        trie.insert("fives"),
        Err(LauTrieError::WordTooLong {
            word: "fives".to_string(),
            max_depth: 4,
        })
    );
    assert_eq!(trie.prefix_search("f"), vec!["four"]);
}

#[test]
fn test_case_insensitive_by_default() {
    let mut trie = LauTrie::new();
    assert!(trie.insert("Apple").unwrap());
    assert!(!trie.insert("APPLE").unwrap());

    assert!(trie.contains("apple"));
    assert_eq!(trie.prefix_search("AP"), vec!["apple"]);
}

#[test]
fn test_case_sensitive_rejects_uppercase() {
    let config = LauTrieConfig {
        case_sensitive: true,
        ..Default::default()
    };
    let mut trie = LauTrie::with_config(config);

    assert!(matches!(
        trie.insert("Apple"),
        Err(LauTrieError::InvalidSymbol { symbol: 'A', position: 0, .. })
    ));
    trie.insert("apple").unwrap();
    assert!(trie.prefix_search("Ap").is_empty());
    assert_eq!(trie.prefix_search("ap"), vec!["apple"]);
}

#[test]
fn test_case_folding_is_ascii_only() {
    let mut trie = LauTrie::new();

    // KELVIN SIGN lowercases to ASCII 'k' under full Unicode folding
    assert!(matches!(
        trie.insert("\u{212A}at"),
        Err(LauTrieError::InvalidSymbol { symbol: '\u{212A}', position: 0, .. })
    ));
    assert!(trie.is_empty());
    assert!(!trie.contains("kat"));

    trie.insert("kat").unwrap();
    assert!(trie.prefix_search("\u{212A}").is_empty());
    assert!(!trie.contains("\u{212A}at"));
}

#[test]
fn test_prefix_with_unsupported_symbol_matches_nothing() {
    let trie = cat_trie();
    assert!(trie.prefix_search("ca'").is_empty());
    assert!(trie.prefix_search("c-").is_empty());
    assert!(trie.prefix_search("ĉ").is_empty());
}

#[test]
fn test_results_are_alphabetical_regardless_of_insert_order() {
    let mut trie = LauTrie::new();
    for word in ["zebra", "apple", "mango", "applet", "app", "banana", "appendix"] {
        trie.insert(word).unwrap();
    }

    assert_eq!(
        trie.prefix_search("a"),
        vec!["app", "appendix", "apple", "applet"]
    );
    assert_eq!(trie.prefix_search("z"), vec!["zebra"]);
}

#[test]
fn test_extend_skips_rejected_words() {
    let mut trie = LauTrie::new();
    trie.extend(["alpha", "be-ta", "gamma", ""]);

    assert_eq!(trie.len(), 2);
    assert!(trie.contains("alpha"));
    assert!(trie.contains("gamma"));
}

/// Builds once, then queries the same trie from many threads at once.
#[test]
fn test_concurrent_prefix_search() {
    const THREAD_COUNT: usize = 8;
    const QUERIES_PER_THREAD: usize = 200;

    let mut trie = LauTrie::new();
    let letters = ['a', 'b', 'c', 'd'];
    for &first in &letters {
        for &second in &letters {
            for &third in &letters {
                trie.insert(format!("{first}{second}{third}")).unwrap();
            }
        }
    }
    let trie = Arc::new(trie);
    let barrier = Arc::new(Barrier::new(THREAD_COUNT));

    let handles: Vec<_> = (0..THREAD_COUNT)
        .map(|thread_id| {
            let trie = Arc::clone(&trie);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let prefix = letters[thread_id % letters.len()].to_string();
                let expected = trie.prefix_search(&prefix);
                for _ in 0..QUERIES_PER_THREAD {
                    assert_eq!(trie.prefix_search(&prefix), expected);
                }
                expected.len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 16);
    }
}
