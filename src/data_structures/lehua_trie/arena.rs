// Copyright (c) 2025 Lehua Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Slot storage for trie nodes.
//!
//! Nodes live in a `Vec` and refer to each other by index, so parent links
//! never form ownership cycles. Pruned slots are recycled through a free list.
//! Recycling a slot never recycles a node id.

use std::ops::{Index, IndexMut};

use super::key::Symbol;
use super::node::{NodeId, TrieNode};

/// Stable address of a node slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct NodeIndex(usize);

impl NodeIndex {
    #[cfg(test)]
    pub(super) fn new(raw: usize) -> Self {
        Self(raw)
    }
}

#[derive(Debug, Clone)]
pub(super) struct NodeArena<S, V> {
    slots: Vec<TrieNode<S, V>>,
    free: Vec<NodeIndex>,
    last_id: u64,
}

impl<S: Symbol, V> NodeArena<S, V> {
    pub(super) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            last_id: 0,
        }
    }

    /// Creates an invalid, childless node with the next id.
    pub(super) fn allocate(&mut self, symbol: S, parent: Option<NodeIndex>) -> NodeIndex {
        self.last_id += 1;
        let node = TrieNode::new(NodeId::new(self.last_id), symbol, parent);

        match self.free.pop() {
            Some(index) => {
                self.slots[index.0] = node;
                index
            }
            None => {
                self.slots.push(node);
                NodeIndex(self.slots.len() - 1)
            }
        }
    }

    /// Releases `head` and everything below it. Returns the number of slots freed.
    ///
    /// The caller must already have unlinked `head` from its owner.
    pub(super) fn release_subtree(&mut self, head: NodeIndex) -> usize {
        let mut pending = vec![head];
        let mut released = 0;

        while let Some(index) = pending.pop() {
            let node = &mut self.slots[index.0];
            pending.extend(node.drain_children());
            node.take_payload();
            self.free.push(index);
            released += 1;
        }

        released
    }

    /// Number of nodes currently linked into the forest.
    pub(super) fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Drops every node and restarts id allocation.
    pub(super) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.last_id = 0;
    }
}

impl<S, V> Index<NodeIndex> for NodeArena<S, V> {
    type Output = TrieNode<S, V>;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.slots[index.0]
    }
}

impl<S, V> IndexMut<NodeIndex> for NodeArena<S, V> {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        &mut self.slots[index.0]
    }
}
