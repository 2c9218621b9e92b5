// Copyright (c) 2025 Lehua Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Data structures for Lehua.
//!
//! This module contains the generic symbol-sequence trie that backs the
//! dictionary and any other prefix-keyed store built on this crate.

pub mod lehua_trie;

// Re-export common data structures
pub use lehua_trie::{LehuaTrie, LehuaTrieConfig, LehuaTrieError, LehuaTrieResult, PutOutcome};
