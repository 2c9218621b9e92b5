// Copyright (c) 2025 Lehua Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Test utilities and fixtures for Lehua.

use std::path::PathBuf;

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use tempfile::TempDir;

use crate::data_structures::lehua_trie::LehuaTrieConfig;
use crate::dictionary::Dictionary;

/// A small word list in the default comma-separated layout.
pub const SAMPLE_DICTIONARY: &str = "\
walk,verb,to move along on foot
sky,noun,the region of the atmosphere seen from the earth
lie,verb,to be in a horizontal position

lie,noun,a false statement
walker,noun,a person who walks
wall,Noun,a continuous vertical structure, usually of brick or stone
";

/// Builds a dictionary from [`SAMPLE_DICTIONARY`].
pub fn sample_dictionary(settings: LehuaTrieConfig) -> Dictionary {
    Dictionary::from_reader(SAMPLE_DICTIONARY.as_bytes(), ',', settings)
        .expect("sample dictionary parses")
}

/// Lowercase words over a small alphabet, so prefixes are shared often.
pub fn word_strategy() -> BoxedStrategy<String> {
    "[a-e]{1,6}".prop_map(|s| s).boxed()
}

/// Test fixture for tests that touch the filesystem or the environment.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after the test
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// The variable will be cleaned up when the fixture is dropped.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(&self, name: &str, contents: C) -> std::io::Result<PathBuf> {
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
