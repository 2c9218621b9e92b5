// Copyright (c) 2025 Lehua Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Trie configuration section.

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::data_structures::lehua_trie::{LehuaTrieConfig, TraversalMode};

/// Trie behaviour settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieSettings {
    /// Search strategy (`incremental` or `recursive`)
    pub traversal: TraversalMode,

    /// Whether inserting an existing key replaces its payload
    pub overwrite_allowed: bool,
}

impl Default for TrieSettings {
    fn default() -> Self {
        let defaults = LehuaTrieConfig::default();
        Self {
            traversal: defaults.traversal,
            overwrite_allowed: defaults.overwrite_allowed,
        }
    }
}

impl Validate for TrieSettings {
    // Every combination is usable.
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}

impl From<TrieSettings> for LehuaTrieConfig {
    fn from(settings: TrieSettings) -> Self {
        Self {
            traversal: settings.traversal,
            overwrite_allowed: settings.overwrite_allowed,
        }
    }
}
