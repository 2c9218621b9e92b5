// Copyright (c) 2025 Lehua Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Dictionary configuration module.
//!
//! Where the word list lives, how its fields are separated, and which queries
//! the CLI runs when none are given on the command line.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// Dictionary configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Path to the word list
    pub path: PathBuf,

    /// Field separator between word, part of speech and meaning
    pub delimiter: char,

    /// Words looked up when `lookup` runs without arguments
    pub lookup_words: Vec<String>,

    /// Part of speech listed when `browse` runs without `--pos`
    pub part_of_speech: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/dictionary.csv"),
            delimiter: ',',
            lookup_words: vec!["walk".to_string(), "sky".to_string(), "lie".to_string()],
            part_of_speech: "noun".to_string(),
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingValue("dictionary.path".to_string()));
        }

        if self.delimiter.is_alphanumeric() || self.delimiter.is_whitespace() {
            return Err(ConfigError::ValueOutOfRange {
                key: "dictionary.delimiter".to_string(),
                message: format!(
                    "{:?} would split words; use punctuation such as ',' or '|'",
                    self.delimiter
                ),
            });
        }

        if self.part_of_speech.trim().is_empty() {
            return Err(ConfigError::MissingValue(
                "dictionary.part_of_speech".to_string(),
            ));
        }

        Ok(())
    }
}
