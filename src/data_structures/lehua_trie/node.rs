// Copyright (c) 2025 Lehua Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Node implementation for the Lehua Trie.
//!
//! A node is one vertex of the forest: the symbol on the edge leading to it,
//! an optional payload, and the arena indices of its children and parent.
//! A node is valid (terminates a stored key) exactly when it holds a payload.

use std::fmt::{Display, Formatter};

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

use super::arena::NodeIndex;
use super::key::Symbol;

/// Symbol-keyed map of child (or root) nodes.
pub(super) type ChildMap<S> = HashMap<S, NodeIndex, FnvBuildHasher>;

/// Identifier assigned to a node when it is created.
///
/// Ids increase within one trie and are only meant for identity checks and
/// debugging output. They are not addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub(super) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the Lehua Trie.
#[derive(Debug, Clone)]
pub struct TrieNode<S, V> {
    id: NodeId,
    symbol: S,
    payload: Option<V>,
    children: ChildMap<S>,
    parent: Option<NodeIndex>,
}

impl<S: Symbol, V> TrieNode<S, V> {
    /// Creates an invalid, childless node.
    pub(super) fn new(id: NodeId, symbol: S, parent: Option<NodeIndex>) -> Self {
        Self {
            id,
            symbol,
            payload: None,
            children: ChildMap::default(),
            parent,
        }
    }

    /// Returns the id assigned when the node was created.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the symbol on the edge leading to this node.
    pub fn symbol(&self) -> &S {
        &self.symbol
    }

    /// Returns the payload if this node terminates a stored key.
    pub fn payload(&self) -> Option<&V> {
        self.payload.as_ref()
    }

    /// Whether this node terminates a stored key.
    pub fn is_valid(&self) -> bool {
        self.payload.is_some()
    }

    /// Whether this node sits in the root set.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Whether a direct child is labelled with `symbol`.
    pub fn has_child(&self, symbol: &S) -> bool {
        self.children.contains_key(symbol)
    }

    /// Symbols of the direct children, in no particular order.
    pub fn child_symbols(&self) -> impl Iterator<Item = &S> + '_ {
        self.children.keys()
    }

    pub(super) fn payload_mut(&mut self) -> Option<&mut V> {
        self.payload.as_mut()
    }

    /// Stores `payload`, making the node valid. Returns the previous payload.
    pub(super) fn put_payload(&mut self, payload: V) -> Option<V> {
        self.payload.replace(payload)
    }

    /// Clears the payload, making the node invalid.
    pub(super) fn take_payload(&mut self) -> Option<V> {
        self.payload.take()
    }

    pub(super) fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    pub(super) fn child(&self, symbol: &S) -> Option<NodeIndex> {
        self.children.get(symbol).copied()
    }

    pub(super) fn add_child(&mut self, symbol: S, child: NodeIndex) {
        self.children.insert(symbol, child);
    }

    /// Unlinks the child labelled `symbol`; a missing child is ignored.
    pub(super) fn remove_child(&mut self, symbol: &S) -> Option<NodeIndex> {
        self.children.remove(symbol)
    }

    pub(super) fn children(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.children.values().copied()
    }

    pub(super) fn drain_children(&mut self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.children.drain().map(|(_, child)| child)
    }
}
