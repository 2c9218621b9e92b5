// Copyright (c) 2025 Lehua Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Lehua Trie Implementation
//!
//! A generic prefix tree keyed by ordered sequences of symbols. Keys share
//! storage for common prefixes; deleting a key prunes the chain of nodes that
//! no longer lead to any stored key.
//!
//! # Features
//!
//! - Any `Eq + Hash + Clone + Debug` type can be a symbol.
//! - Two interchangeable search strategies ([`TraversalMode`]).
//! - Configurable overwrite policy for keys that are already present.
//! - Visitor-based depth-first traversal that can stop early.
//!
//! # Example
//!
//! ```
//! use lehua_lib::data_structures::lehua_trie::{LehuaTrie, PutOutcome};
//!
//! let mut trie: LehuaTrie<char, i32> = LehuaTrie::new();
//! trie.put("cat", 1).unwrap();
//! trie.put("car", 2).unwrap();
//!
//! assert_eq!(trie.get("car").unwrap(), Some(&2));
//! assert_eq!(trie.remove("cat").unwrap(), Some(1));
//! assert!(!trie.contains_key("cat").unwrap());
//! assert!(matches!(trie.put("", 3).unwrap(), PutOutcome::Ignored(3)));
//! assert_eq!(trie.len(), 1);
//! ```
//!
//! # Thread Safety
//!
//! The trie has no interior mutability. Mutation needs `&mut self`; wrap the
//! whole container in a lock to share it between threads.

mod arena;
mod error;
mod key;
mod node;
mod traversal;

#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::ops::ControlFlow;

pub use error::{LehuaTrieError, LehuaTrieResult};
pub use key::{KeySequence, Symbol, UncheckedKey};
pub use node::{NodeId, TrieNode};
pub use traversal::{TraversalMode, TraversalPath};

use arena::{NodeArena, NodeIndex};
use node::ChildMap;

/// Configuration options for the Lehua Trie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LehuaTrieConfig {
    /// Search strategy used by every keyed operation
    pub traversal: TraversalMode,

    /// Whether `put` replaces the payload of a key that is already present
    pub overwrite_allowed: bool,
}

impl Default for LehuaTrieConfig {
    fn default() -> Self {
        Self {
            traversal: TraversalMode::Incremental,
            overwrite_allowed: true,
        }
    }
}

/// What [`LehuaTrie::put`] did with its value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum PutOutcome<V> {
    /// The key was empty; nothing was stored and the value is handed back.
    Ignored(V),
    /// The key was not present and now is.
    Inserted,
    /// The key was present; holds the payload it replaced.
    Replaced(V),
    /// The key was present and overwriting is disabled; the value is handed back.
    Kept(V),
}

impl<V> PutOutcome<V> {
    /// Whether the value passed to `put` is now stored in the trie.
    pub fn is_stored(&self) -> bool {
        matches!(self, PutOutcome::Inserted | PutOutcome::Replaced(_))
    }
}

/// A prefix tree mapping symbol sequences to payloads.
///
/// # Type Parameters
///
/// * `S` - Symbol labelling each edge.
/// * `V` - Payload stored at the end of each key.
#[derive(Debug, Clone)]
pub struct LehuaTrie<S, V> {
    /// Node storage
    arena: NodeArena<S, V>,

    /// Root entries, one per distinct first symbol
    roots: ChildMap<S>,

    /// Number of keys currently stored
    count: usize,

    /// Configuration options
    config: LehuaTrieConfig,
}

impl<S: Symbol, V> LehuaTrie<S, V> {
    /// Creates a new empty `LehuaTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LehuaTrieConfig::default())
    }

    /// Creates a new empty `LehuaTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: LehuaTrieConfig) -> Self {
        Self {
            arena: NodeArena::new(),
            roots: ChildMap::default(),
            count: 0,
            config,
        }
    }

    /// Creates a new empty `LehuaTrie` that searches with `traversal`.
    pub fn with_traversal(traversal: TraversalMode) -> Self {
        Self::with_config(LehuaTrieConfig {
            traversal,
            ..LehuaTrieConfig::default()
        })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> LehuaTrieConfig {
        self.config
    }

    /// Returns the search strategy in use.
    pub fn traversal(&self) -> TraversalMode {
        self.config.traversal
    }

    /// Switches the search strategy. Results are unaffected.
    pub fn set_traversal(&mut self, traversal: TraversalMode) {
        self.config.traversal = traversal;
    }

    /// Whether `put` replaces the payload of a key that is already present.
    pub fn is_overwrite_allowed(&self) -> bool {
        self.config.overwrite_allowed
    }

    /// Sets the overwrite policy used by `put`.
    pub fn set_overwrite_allowed(&mut self, overwrite_allowed: bool) {
        self.config.overwrite_allowed = overwrite_allowed;
    }

    /// Returns the number of keys in the trie.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Checks if the trie holds no keys.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of nodes in the forest, valid or not.
    pub fn node_count(&self) -> usize {
        self.arena.live()
    }

    /// Retrieves the payload stored for a key.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to look up.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(&V))` - The payload, if the key is present.
    /// * `Ok(None)` - If the key is absent or empty.
    /// * `Err(LehuaTrieError)` - If the key failed validation.
    pub fn get<K>(&self, key: &K) -> LehuaTrieResult<Option<&V>>
    where
        K: KeySequence<S> + ?Sized,
    {
        let symbols = key.validate()?;
        Ok(self
            .find_valid(&symbols)
            .and_then(|index| self.arena[index].payload()))
    }

    /// Retrieves a mutable reference to the payload stored for a key.
    pub fn get_mut<K>(&mut self, key: &K) -> LehuaTrieResult<Option<&mut V>>
    where
        K: KeySequence<S> + ?Sized,
    {
        let symbols = key.validate()?;
        Ok(match self.find_valid(&symbols) {
            Some(index) => self.arena[index].payload_mut(),
            None => None,
        })
    }

    /// Checks if a key exists in the trie.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the key is present, `false` otherwise.
    /// * `Err(LehuaTrieError)` - If the key failed validation.
    pub fn contains_key<K>(&self, key: &K) -> LehuaTrieResult<bool>
    where
        K: KeySequence<S> + ?Sized,
    {
        let symbols = key.validate()?;
        Ok(self.find_valid(&symbols).is_some())
    }

    /// Inserts a key-value pair into the trie.
    ///
    /// An empty key is a no-op. When the key is already present, the payload
    /// is replaced only if overwriting is allowed.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert.
    /// * `value` - The value to associate with the key.
    ///
    /// # Returns
    ///
    /// * `Ok(PutOutcome)` - What happened to `value`.
    /// * `Err(LehuaTrieError)` - If the key failed validation.
    pub fn put<K>(&mut self, key: &K, value: V) -> LehuaTrieResult<PutOutcome<V>>
    where
        K: KeySequence<S> + ?Sized,
    {
        let symbols = key.validate()?;
        Ok(self.put_symbols(&symbols, value))
    }

    /// Inserts every pair, stopping at the first key that fails validation.
    ///
    /// Pairs applied before a failure stay applied.
    pub fn put_all<K, I>(&mut self, pairs: I) -> LehuaTrieResult<()>
    where
        K: KeySequence<S>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in pairs {
            let symbols = key.validate()?;
            let _ = self.put_symbols(&symbols, value);
        }
        Ok(())
    }

    /// Removes a key from the trie, pruning nodes that no longer lead anywhere.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(V))` - The payload of the removed key.
    /// * `Ok(None)` - If the key was absent or empty.
    /// * `Err(LehuaTrieError)` - If the key failed validation.
    pub fn remove<K>(&mut self, key: &K) -> LehuaTrieResult<Option<V>>
    where
        K: KeySequence<S> + ?Sized,
    {
        let symbols = key.validate()?;
        Ok(self.remove_symbols(&symbols))
    }

    /// Clears all entries and restarts node id allocation.
    pub fn clear(&mut self) {
        let dropped = self.arena.live();
        self.roots.clear();
        self.arena.clear();
        self.count = 0;
        tracing::debug!(dropped, "Cleared trie");
    }

    /// Checks whether any key holds a payload equal to `value`.
    ///
    /// This walks the forest and stops at the first match.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        let mut found = false;
        self.depth_first_traversal(|path| {
            if path.payload() == Some(value) {
                found = true;
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        found
    }

    /// Returns a snapshot of every key.
    pub fn key_set(&self) -> HashSet<Vec<S>> {
        let mut keys = HashSet::with_capacity(self.count);
        self.depth_first_traversal(|path| {
            keys.insert(path.key());
            ControlFlow::Continue(())
        });
        keys
    }

    /// Returns a snapshot of every payload, in no particular order.
    pub fn values(&self) -> Vec<&V> {
        let mut values = Vec::with_capacity(self.count);
        self.depth_first_traversal(|path| {
            values.extend(path.payload());
            ControlFlow::Continue(())
        });
        values
    }

    /// Returns a snapshot of every key with its payload, in no particular order.
    pub fn entry_set(&self) -> Vec<(Vec<S>, &V)> {
        let mut entries = Vec::with_capacity(self.count);
        self.depth_first_traversal(|path| {
            if let Some(payload) = path.payload() {
                entries.push((path.key(), payload));
            }
            ControlFlow::Continue(())
        });
        entries
    }

    /// Finds all keys starting with `prefix`, together with their payloads.
    ///
    /// An empty prefix matches every key.
    pub fn entries_with_prefix<K>(&self, prefix: &K) -> LehuaTrieResult<Vec<(Vec<S>, &V)>>
    where
        K: KeySequence<S> + ?Sized,
    {
        let symbols = prefix.validate()?;
        if symbols.is_empty() {
            return Ok(self.entry_set());
        }

        let mut chain = self.search(&symbols, self.config.traversal);
        if chain.len() != symbols.len() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        if let Some(start) = chain.pop() {
            let _ = traversal::walk(&self.arena, chain, [start], &mut |path| {
                if let Some(payload) = path.payload() {
                    entries.push((path.key(), payload));
                }
                ControlFlow::Continue(())
            });
        }
        Ok(entries)
    }

    /// Returns the longest chain of nodes matching a prefix of `key`, using
    /// the configured search strategy.
    pub fn longest_prefix_chain<K>(&self, key: &K) -> LehuaTrieResult<Vec<&TrieNode<S, V>>>
    where
        K: KeySequence<S> + ?Sized,
    {
        self.longest_prefix_chain_with(key, self.config.traversal)
    }

    /// Same as [`longest_prefix_chain`](Self::longest_prefix_chain) with an
    /// explicit strategy. The stored strategy is left untouched.
    pub fn longest_prefix_chain_with<K>(
        &self,
        key: &K,
        traversal: TraversalMode,
    ) -> LehuaTrieResult<Vec<&TrieNode<S, V>>>
    where
        K: KeySequence<S> + ?Sized,
    {
        let symbols = key.validate()?;
        Ok(self
            .search(&symbols, traversal)
            .into_iter()
            .map(|index| &self.arena[index])
            .collect())
    }

    /// Walks every node depth-first and calls `visit` for each valid one.
    ///
    /// The visitor receives the path from the root entry down to the valid
    /// node. Returning `ControlFlow::Break(())` ends the walk immediately.
    /// Sibling order is unspecified.
    pub fn depth_first_traversal<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&TraversalPath<'a, '_, S, V>) -> ControlFlow<()>,
    {
        let _ = traversal::walk(
            &self.arena,
            Vec::new(),
            self.roots.values().copied(),
            &mut visit,
        );
    }

    fn search(&self, symbols: &[S], mode: TraversalMode) -> Vec<NodeIndex> {
        traversal::search(&self.arena, &self.roots, symbols, mode)
    }

    /// Index of the valid node spelled exactly by `symbols`.
    fn find_valid(&self, symbols: &[S]) -> Option<NodeIndex> {
        if symbols.is_empty() {
            return None;
        }

        let chain = self.search(symbols, self.config.traversal);
        if chain.len() != symbols.len() {
            return None;
        }
        chain
            .last()
            .copied()
            .filter(|&index| self.arena[index].is_valid())
    }

    fn put_symbols(&mut self, symbols: &[S], value: V) -> PutOutcome<V> {
        if symbols.is_empty() {
            return PutOutcome::Ignored(value);
        }

        let chain = self.search(symbols, self.config.traversal);
        let outcome = match chain.last().copied() {
            None => {
                let head = self.new_chain(None, symbols, value);
                self.roots.insert(symbols[0].clone(), head);
                PutOutcome::Inserted
            }
            Some(last) if chain.len() == symbols.len() => {
                let node = &mut self.arena[last];
                if node.is_valid() && !self.config.overwrite_allowed {
                    PutOutcome::Kept(value)
                } else {
                    match node.put_payload(value) {
                        Some(previous) => PutOutcome::Replaced(previous),
                        None => PutOutcome::Inserted,
                    }
                }
            }
            Some(last) => {
                let rest = &symbols[chain.len()..];
                let head = self.new_chain(Some(last), rest, value);
                self.arena[last].add_child(rest[0].clone(), head);
                PutOutcome::Inserted
            }
        };

        // Only a node turning valid adds a key; replacing a payload does not.
        if matches!(outcome, PutOutcome::Inserted) {
            self.count += 1;
        }
        outcome
    }

    /// Builds one node per symbol below `parent` and stores `value` on the last.
    /// `symbols` must not be empty. Returns the head of the new chain.
    fn new_chain(&mut self, parent: Option<NodeIndex>, symbols: &[S], value: V) -> NodeIndex {
        let head = self.arena.allocate(symbols[0].clone(), parent);
        let mut tail = head;
        for symbol in &symbols[1..] {
            let next = self.arena.allocate(symbol.clone(), Some(tail));
            self.arena[tail].add_child(symbol.clone(), next);
            tail = next;
        }
        let _ = self.arena[tail].put_payload(value);

        tracing::trace!(
            head = %self.arena[head].id(),
            nodes = symbols.len(),
            "Created trie chain"
        );
        head
    }

    fn remove_symbols(&mut self, symbols: &[S]) -> Option<V> {
        let target = self.find_valid(symbols)?;
        let payload = self.arena[target].take_payload();
        self.count -= 1;

        if self.arena[target].child_count() > 0 {
            return payload;
        }

        // Climb while the parent exists only to lead here.
        let mut dead = target;
        while let Some(parent) = self.arena[dead].parent() {
            let ancestor = &self.arena[parent];
            if ancestor.child_count() > 1 || ancestor.is_valid() {
                break;
            }
            dead = parent;
        }

        self.detach(dead);
        payload
    }

    /// Unlinks `head` from its owner and releases its subtree.
    fn detach(&mut self, head: NodeIndex) {
        let node = &self.arena[head];
        let symbol = node.symbol().clone();
        match node.parent() {
            Some(parent) => {
                self.arena[parent].remove_child(&symbol);
            }
            None => {
                self.roots.remove(&symbol);
            }
        }

        let released = self.arena.release_subtree(head);
        tracing::debug!(released, ?symbol, "Pruned dead trie chain");
    }
}

impl<S: Symbol, V> Default for LehuaTrie<S, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol, V> Extend<(Vec<S>, V)> for LehuaTrie<S, V> {
    fn extend<I: IntoIterator<Item = (Vec<S>, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            let _ = self.put_symbols(&key, value);
        }
    }
}

impl<S: Symbol, V> FromIterator<(Vec<S>, V)> for LehuaTrie<S, V> {
    fn from_iter<I: IntoIterator<Item = (Vec<S>, V)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}
