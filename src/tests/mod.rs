// Copyright (c) 2025 Lehua Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Test modules for Lehua.
//!
//! Crate-internal suites for configuration, error reporting and the
//! dictionary, plus shared fixtures. Trie unit and property tests live next
//! to the trie itself.

pub mod error_tests;
pub mod test_utils;
