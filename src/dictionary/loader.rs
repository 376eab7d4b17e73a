//! Vocabulary loader for `word: definition` sources.
//!
//! Each non-blank line holds a word, a separator, and a definition. The
//! word is everything before the first separator; the definition is
//! everything after it. Both are trimmed.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::{DictionaryConfig, InvalidWordPolicy};
use crate::data_structures::lau_trie::{LauTrie, LauTrieConfig};
use crate::dictionary::store::DefinitionStore;
use crate::error::load::LoadError;
use crate::error::{report_error, ErrorContext};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Counters describing one load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines whose word was stored for the first time
    pub loaded: usize,
    /// Lines whose word was already stored; their definition replaced the earlier one
    pub duplicates: usize,
    /// Lines skipped as malformed or holding a rejected word
    pub skipped: usize,
}

/// The result of a load: the built trie, its definitions, and the counters.
#[derive(Debug)]
pub struct Vocabulary {
    pub trie: LauTrie,
    pub definitions: DefinitionStore,
    pub report: LoadReport,
}

/// Builds a [`Vocabulary`] from a dictionary source.
#[derive(Debug, Clone)]
pub struct VocabularyLoader {
    separator: char,
    policy: InvalidWordPolicy,
    trie_config: LauTrieConfig,
}

impl Default for VocabularyLoader {
    fn default() -> Self {
        Self::new(&DictionaryConfig::default(), LauTrieConfig::default())
    }
}

impl VocabularyLoader {
    /// Creates a loader from validated configuration sections.
    pub fn new(dictionary: &DictionaryConfig, trie_config: LauTrieConfig) -> Self {
        Self {
            separator: dictionary.separator_char(),
            policy: dictionary.on_invalid_word,
            trie_config,
        }
    }

    /// Overrides the policy for malformed lines and rejected words.
    pub fn with_policy(mut self, policy: InvalidWordPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Loads the dictionary file at `path`.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Vocabulary, LoadError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.to_path_buf()));
        }

        tracing::info!(path = %path.display(), "Loading dictionary");
        let file = File::open(path)?;
        self.load_reader(BufReader::new(file))
    }

    /// Loads dictionary lines from any buffered reader.
    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<Vocabulary, LoadError> {
        let mut trie = LauTrie::with_config(self.trie_config.clone());
        let mut definitions = DefinitionStore::new();
        let mut report = LoadReport::default();

        for (index, raw) in reader.split(b'\n').enumerate() {
            let raw = raw?;
            let line_number = index + 1;

            let outcome = match decode_line(raw, line_number) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.load_line(&mut trie, &mut definitions, &line, line_number),
                Err(e) => Err(e),
            };

            match outcome {
                Ok(true) => report.loaded += 1,
                Ok(false) => report.duplicates += 1,
                Err(e) => match self.policy {
                    InvalidWordPolicy::Abort => return Err(e),
                    InvalidWordPolicy::Skip => {
                        report.skipped += 1;
                        report_error(ErrorContext::new(e, "vocabulary_loader"));
                    }
                },
            }
        }

        tracing::info!(
            case_sensitive = trie.config().case_sensitive,
            loaded = report.loaded,
            duplicates = report.duplicates,
            skipped = report.skipped,
            "Dictionary loaded"
        );
        Ok(Vocabulary {
            trie,
            definitions,
            report,
        })
    }

    /// Stores one line. Returns `Ok(true)` when the word is new.
    fn load_line(
        &self,
        trie: &mut LauTrie,
        definitions: &mut DefinitionStore,
        line: &str,
        line_number: usize,
    ) -> Result<bool, LoadError> {
        let (word, definition) = line
            .split_once(self.separator)
            .ok_or_else(|| LoadError::MalformedLine {
                line_number,
                reason: format!("missing '{}' separator", self.separator),
            })?;

        let word = word.trim();
        if word.is_empty() {
            return Err(LoadError::MalformedLine {
                line_number,
                reason: "no word before separator".to_string(),
            });
        }

        let key = trie
            .normalize(word)
            .map_err(|source| LoadError::InvalidWord {
                line_number,
                source,
            })?
            .into_owned();
        let is_new = trie
            .insert(&key)
            .map_err(|source| LoadError::InvalidWord {
                line_number,
                source,
            })?;
        definitions.insert(key, definition.trim());

        Ok(is_new)
    }
}

/// Decodes one raw line, dropping the line ending and, on the first line,
/// a UTF-8 byte order mark.
fn decode_line(mut raw: Vec<u8>, line_number: usize) -> Result<String, LoadError> {
    if raw.last() == Some(&b'\r') {
        raw.pop();
    }

    let mut line = String::from_utf8(raw).map_err(|e| LoadError::MalformedLine {
        line_number,
        reason: format!("not valid UTF-8: {}", e.utf8_error()),
    })?;
    if line_number == 1 && line.starts_with(BYTE_ORDER_MARK) {
        line.remove(0);
    }
    Ok(line)
}
