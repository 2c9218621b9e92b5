// Copyright (c) 2025 Lehua Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Symbols and key sequences for the Lehua Trie.
//!
//! A [`Symbol`] is any value that can label an edge of the trie. A
//! [`KeySequence`] is anything that can be checked and viewed as an ordered
//! run of symbols. Checking happens once per public call, before any node is
//! visited, so a rejected key never leaves the trie half-modified.

use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

use super::error::{LehuaTrieError, LehuaTrieResult};

/// Capability required of an edge label.
///
/// Equality must agree with hashing: equal symbols hash equally. Any type
/// meeting the bounds is a symbol.
pub trait Symbol: Eq + Hash + Clone + Debug {}

impl<T: Eq + Hash + Clone + Debug> Symbol for T {}

/// A caller-supplied key that can be validated into a symbol slice.
pub trait KeySequence<S: Symbol> {
    /// Checks the key and returns its symbols.
    ///
    /// # Returns
    ///
    /// * `Ok(Cow<[S]>)` - The symbols of the key, borrowed where possible.
    /// * `Err(LehuaTrieError)` - If the key or one of its symbols is absent.
    fn validate(&self) -> LehuaTrieResult<Cow<'_, [S]>>;
}

impl<S: Symbol> KeySequence<S> for [S] {
    fn validate(&self) -> LehuaTrieResult<Cow<'_, [S]>> {
        Ok(Cow::Borrowed(self))
    }
}

impl<S: Symbol, const N: usize> KeySequence<S> for [S; N] {
    fn validate(&self) -> LehuaTrieResult<Cow<'_, [S]>> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl<S: Symbol> KeySequence<S> for Vec<S> {
    fn validate(&self) -> LehuaTrieResult<Cow<'_, [S]>> {
        Ok(Cow::Borrowed(self.as_slice()))
    }
}

impl KeySequence<char> for str {
    fn validate(&self) -> LehuaTrieResult<Cow<'_, [char]>> {
        Ok(Cow::Owned(self.chars().collect()))
    }
}

impl KeySequence<char> for String {
    fn validate(&self) -> LehuaTrieResult<Cow<'_, [char]>> {
        self.as_str().validate()
    }
}

impl<S: Symbol, K: KeySequence<S> + ?Sized> KeySequence<S> for &K {
    fn validate(&self) -> LehuaTrieResult<Cow<'_, [S]>> {
        (**self).validate()
    }
}

impl<S: Symbol, K: KeySequence<S>> KeySequence<S> for Option<K> {
    fn validate(&self) -> LehuaTrieResult<Cow<'_, [S]>> {
        match self {
            Some(key) => key.validate(),
            None => Err(LehuaTrieError::NullInput),
        }
    }
}

/// A key whose symbols may be individually absent.
///
/// Useful when a key is assembled from a decoding step that can fail per
/// position. Validation rejects the key at the first hole.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UncheckedKey<S> {
    slots: Vec<Option<S>>,
}

impl<S> UncheckedKey<S> {
    /// Wraps a run of optional symbols.
    pub fn new(slots: Vec<Option<S>>) -> Self {
        Self { slots }
    }

    /// Number of slots, present or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the key has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<S> From<Vec<Option<S>>> for UncheckedKey<S> {
    fn from(slots: Vec<Option<S>>) -> Self {
        Self::new(slots)
    }
}

impl<S> FromIterator<Option<S>> for UncheckedKey<S> {
    fn from_iter<I: IntoIterator<Item = Option<S>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<S: Symbol> KeySequence<S> for UncheckedKey<S> {
    fn validate(&self) -> LehuaTrieResult<Cow<'_, [S]>> {
        let symbols = self
            .slots
            .iter()
            .enumerate()
            .map(|(position, slot)| {
                slot.clone()
                    .ok_or(LehuaTrieError::InvalidElement { position })
            })
            .collect::<LehuaTrieResult<Vec<S>>>()?;
        Ok(Cow::Owned(symbols))
    }
}
