// Copyright (c) 2025 Lehua Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Lehua Library
//!
//! A generic prefix tree keyed by symbol sequences, with a word dictionary
//! built on top of it. The `lehua` binary is a thin command-line front end to
//! the dictionary; everything it does is available from this library.
//!
//! # Modules
//!
//! - [`data_structures`]: the [`LehuaTrie`](data_structures::LehuaTrie) itself.
//! - [`dictionary`]: word entries stored in a trie of letters.
//! - [`config`]: layered configuration loading and validation.
//! - [`error`]: the crate error type and error reporting.

pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lehua.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
