// Copyright (c) 2025 Lehua Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Error types for the Lehua Trie.
//!
//! Every variant is raised while validating a key argument, before the trie
//! is touched.

/// Errors that can occur in Lehua Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LehuaTrieError {
    /// The key sequence itself is absent.
    #[error("Key sequence cannot be absent")]
    NullInput,

    /// The key sequence contains an absent symbol.
    #[error("Key sequence contains an absent symbol at position {position}")]
    InvalidElement {
        /// Zero-based index of the first absent symbol.
        position: usize,
    },
}

/// Result type for Lehua Trie operations
pub type LehuaTrieResult<T> = Result<T, LehuaTrieError>;
