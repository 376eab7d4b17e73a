//! Test utilities and fixtures for Olelo.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use std::path::PathBuf;
use tempfile::TempDir;

/// Strategy for `word: definition` lines with storable words.
///
/// Yields the word alongside the full line so tests can check what was stored.
pub fn dictionary_line_strategy() -> BoxedStrategy<(String, String)> {
    (
        "[a-z]{1,10}",
        "[ ]{0,2}",
        "[A-Za-z ,.;:()]{0,40}",
    )
        .prop_map(|(word, padding, definition)| {
            let line = format!("{padding}{word}{padding}: {definition}");
            (word, line)
        })
        .boxed()
}

/// Test fixture for tests that need files on disk.
///
/// Environment variables set through the fixture are removed on drop.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    env_vars: Vec<String>,
}

impl TestFixture {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn write_file<C: AsRef<[u8]>>(&self, name: &str, contents: C) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
