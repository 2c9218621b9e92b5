// Copyright (c) 2025 Lehua Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Dictionary error module.

use std::path::PathBuf;
use thiserror::Error;

use crate::data_structures::lehua_trie::LehuaTrieError;

/// Errors that can occur while loading or querying a dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The dictionary file could not be opened or read.
    #[error("Failed to read dictionary {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// A read failure on a stream with no associated path.
    #[error("Failed to read dictionary stream: {0}")]
    Read(#[from] std::io::Error),

    /// A line did not contain all three fields.
    #[error("Malformed dictionary line {line}: {content:?}")]
    MalformedLine {
        /// One-based line number
        line: usize,
        /// The offending line
        content: String,
    },

    /// A word was rejected by the underlying trie.
    #[error("Invalid word key: {0}")]
    Key(#[from] LehuaTrieError),
}

/// Result type for dictionary operations.
pub type DictionaryResult<T> = Result<T, DictionaryError>;
