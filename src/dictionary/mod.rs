// Copyright (c) 2025 Lehua Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Word dictionary backed by a [`LehuaTrie`] of letters.
//!
//! A dictionary is loaded from delimited text, one entry per line:
//!
//! ```text
//! walk,verb,to move on foot
//! sky,noun,the expanse above the earth, as seen from it
//! ```
//!
//! The meaning is the remainder of the line, so it may contain the delimiter.

mod word;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::ops::ControlFlow;
use std::path::Path;

use serde::Serialize;

use crate::config::{DictionaryConfig, TrieSettings};
use crate::data_structures::lehua_trie::{LehuaTrie, LehuaTrieConfig, PutOutcome};
use crate::error::dictionary::{DictionaryError, DictionaryResult};

pub use word::{key_word, word_key, Letter, WordMetaData};

/// Summary figures for a loaded dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryStats {
    /// Number of distinct words
    pub words: usize,

    /// Number of trie nodes holding them
    pub nodes: usize,

    /// Word count per lowercased part of speech
    pub parts_of_speech: BTreeMap<String, usize>,
}

/// A collection of words with their part of speech and meaning.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    trie: LehuaTrie<Letter, WordMetaData>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new(settings: LehuaTrieConfig) -> Self {
        Self {
            trie: LehuaTrie::with_config(settings),
        }
    }

    /// Loads the dictionary described by `config`.
    pub fn from_config(config: &DictionaryConfig, settings: TrieSettings) -> DictionaryResult<Self> {
        Self::load(&config.path, config.delimiter, settings.into())
    }

    /// Loads a dictionary file.
    ///
    /// # Errors
    ///
    /// * `DictionaryError::Io` - If the file cannot be opened or read.
    /// * `DictionaryError::MalformedLine` - If a line lacks one of its fields.
    pub fn load<P: AsRef<Path>>(
        path: P,
        delimiter: char,
        settings: LehuaTrieConfig,
    ) -> DictionaryResult<Self> {
        let path = path.as_ref();
        let with_path = |source: std::io::Error| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(with_path)?;
        let dictionary =
            Self::from_reader(BufReader::new(file), delimiter, settings).map_err(|e| match e {
                DictionaryError::Read(source) => with_path(source),
                other => other,
            })?;

        tracing::info!(path = %path.display(), words = dictionary.len(), "Dictionary loaded");
        Ok(dictionary)
    }

    /// Reads `word<delimiter>part of speech<delimiter>meaning` lines.
    ///
    /// Blank lines are skipped. Fields are trimmed. A repeated word follows
    /// the overwrite policy in `settings`.
    pub fn from_reader<R: BufRead>(
        reader: R,
        delimiter: char,
        settings: LehuaTrieConfig,
    ) -> DictionaryResult<Self> {
        let mut dictionary = Self::new(settings);

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let mut fields = trimmed.splitn(3, delimiter).map(str::trim);
            let (Some(word), Some(pos), Some(meaning)) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(DictionaryError::MalformedLine {
                    line: index + 1,
                    content: line,
                });
            };
            if word.is_empty() {
                return Err(DictionaryError::MalformedLine {
                    line: index + 1,
                    content: line,
                });
            }

            if let PutOutcome::Kept(_) = dictionary.insert(WordMetaData::new(word, pos, meaning))? {
                tracing::warn!(word, line = index + 1, "Duplicate word kept its first definition");
            }
        }

        Ok(dictionary)
    }

    /// Adds or updates an entry, keyed by its word.
    pub fn insert(&mut self, meta: WordMetaData) -> DictionaryResult<PutOutcome<WordMetaData>> {
        let key = word_key(&meta.word);
        Ok(self.trie.put(&key, meta)?)
    }

    /// Looks up a word.
    pub fn lookup(&self, word: &str) -> DictionaryResult<Option<&WordMetaData>> {
        Ok(self.trie.get(&word_key(word))?)
    }

    /// Whether the dictionary has an entry for `word`.
    pub fn contains(&self, word: &str) -> DictionaryResult<bool> {
        Ok(self.trie.contains_key(&word_key(word))?)
    }

    /// Removes a word, returning its entry.
    pub fn remove(&mut self, word: &str) -> DictionaryResult<Option<WordMetaData>> {
        Ok(self.trie.remove(&word_key(word))?)
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Whether the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// All entries whose part of speech matches `pos`, ignoring case,
    /// sorted by word.
    pub fn words_with_part_of_speech(&self, pos: &str) -> Vec<&WordMetaData> {
        let mut found = Vec::new();
        self.trie.depth_first_traversal(|path| {
            if let Some(meta) = path.payload().filter(|meta| meta.is_part_of_speech(pos)) {
                found.push(meta);
            }
            ControlFlow::Continue(())
        });
        sort_by_word(found)
    }

    /// All entries whose word starts with `prefix`, sorted by word.
    pub fn words_with_prefix(&self, prefix: &str) -> DictionaryResult<Vec<&WordMetaData>> {
        let entries = self.trie.entries_with_prefix(&word_key(prefix))?;
        Ok(sort_by_word(entries.into_iter().map(|(_, meta)| meta).collect()))
    }

    /// Every entry, sorted by word.
    pub fn entries(&self) -> Vec<&WordMetaData> {
        sort_by_word(self.trie.values())
    }

    /// Word and node counts, plus a breakdown by part of speech.
    pub fn stats(&self) -> DictionaryStats {
        let mut parts_of_speech = BTreeMap::new();
        for meta in self.trie.values() {
            *parts_of_speech
                .entry(meta.part_of_speech.to_lowercase())
                .or_insert(0) += 1;
        }

        DictionaryStats {
            words: self.trie.len(),
            nodes: self.trie.node_count(),
            parts_of_speech,
        }
    }

    /// The underlying trie.
    pub fn trie(&self) -> &LehuaTrie<Letter, WordMetaData> {
        &self.trie
    }
}

fn sort_by_word(mut entries: Vec<&WordMetaData>) -> Vec<&WordMetaData> {
    entries.sort_by(|a, b| a.word.cmp(&b.word));
    entries
}
