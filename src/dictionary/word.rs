// Copyright (c) 2025 Lehua Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Letters and word entries stored in the dictionary trie.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A single character of a word, used as the trie symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(pub char);

impl From<char> for Letter {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Splits a word into its trie key.
pub fn word_key(word: &str) -> Vec<Letter> {
    word.chars().map(Letter).collect()
}

/// Rebuilds a word from its trie key.
pub fn key_word(key: &[Letter]) -> String {
    key.iter().map(|letter| letter.0).collect()
}

/// A dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMetaData {
    /// The headword
    pub word: String,

    /// Grammatical category, e.g. `noun`
    pub part_of_speech: String,

    /// Definition text
    pub meaning: String,
}

impl WordMetaData {
    /// Creates a new entry.
    pub fn new(
        word: impl Into<String>,
        part_of_speech: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            part_of_speech: part_of_speech.into(),
            meaning: meaning.into(),
        }
    }

    /// Whether this entry's part of speech matches `pos`, ignoring case.
    pub fn is_part_of_speech(&self, pos: &str) -> bool {
        self.part_of_speech.to_lowercase() == pos.to_lowercase()
    }
}

impl Display for WordMetaData {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}; part of speech: {}; meaning: {}]",
            self.word, self.part_of_speech, self.meaning
        )
    }
}
