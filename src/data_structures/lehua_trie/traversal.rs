// Copyright (c) 2025 Lehua Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Depth-first search and depth-first traversal over the node arena.
//!
//! Search (DFS) follows one key and returns the longest chain of existing
//! nodes matching a prefix of it. Two strategies exist and must always agree.
//! Traversal (DFT) walks the whole forest, or one subtree, and hands every
//! valid node's root-to-node path to a visitor.

use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

use super::arena::{NodeArena, NodeIndex};
use super::key::Symbol;
use super::node::{ChildMap, TrieNode};

// Headroom kept free before a recursive step, and the segment size added
// once it runs out.
const STACK_RED_ZONE: usize = 64 * 1024;
const STACK_SEGMENT: usize = 1024 * 1024;

/// Strategy used for depth-first search. Both produce identical chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalMode {
    /// Iterative child-by-child descent.
    #[default]
    Incremental,
    /// One recursive call per matched symbol.
    Recursive,
}

impl TraversalMode {
    /// Every available mode.
    pub const ALL: [TraversalMode; 2] = [TraversalMode::Incremental, TraversalMode::Recursive];
}

/// Finds the longest chain of nodes matching a prefix of `symbols`.
pub(super) fn search<S: Symbol, V>(
    arena: &NodeArena<S, V>,
    roots: &ChildMap<S>,
    symbols: &[S],
    mode: TraversalMode,
) -> Vec<NodeIndex> {
    match mode {
        TraversalMode::Incremental => search_incremental(arena, roots, symbols),
        TraversalMode::Recursive => {
            let mut chain = Vec::with_capacity(symbols.len());
            let head = symbols.first().and_then(|first| roots.get(first).copied());
            search_recursive(arena, symbols, 0, head, &mut chain);
            chain
        }
    }
}

fn search_incremental<S: Symbol, V>(
    arena: &NodeArena<S, V>,
    roots: &ChildMap<S>,
    symbols: &[S],
) -> Vec<NodeIndex> {
    let mut chain = Vec::with_capacity(symbols.len());
    let Some((first, rest)) = symbols.split_first() else {
        return chain;
    };
    let Some(&root) = roots.get(first) else {
        return chain;
    };

    chain.push(root);
    let mut current = root;
    for symbol in rest {
        match arena[current].child(symbol) {
            Some(next) => {
                chain.push(next);
                current = next;
            }
            None => break,
        }
    }

    chain
}

fn search_recursive<S: Symbol, V>(
    arena: &NodeArena<S, V>,
    symbols: &[S],
    depth: usize,
    current: Option<NodeIndex>,
    chain: &mut Vec<NodeIndex>,
) {
    let Some(index) = current else {
        return;
    };
    chain.push(index);

    let depth = depth + 1;
    if depth >= symbols.len() {
        return;
    }
    let next = arena[index].child(&symbols[depth]);
    stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || {
        search_recursive(arena, symbols, depth, next, chain)
    });
}

/// The root-to-node path handed to a traversal visitor.
///
/// The last node of the path is always valid.
#[derive(Debug)]
pub struct TraversalPath<'a, 'p, S, V> {
    arena: &'a NodeArena<S, V>,
    indices: &'p [NodeIndex],
    terminal: NodeIndex,
}

impl<'a, 'p, S: Symbol, V> TraversalPath<'a, 'p, S, V> {
    /// Number of nodes on the path, which is also the key length.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always `false`; a visited path contains at least its terminal node.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The valid node that triggered this visit.
    pub fn terminal(&self) -> &'a TrieNode<S, V> {
        &self.arena[self.terminal]
    }

    /// Payload of the terminal node.
    pub fn payload(&self) -> Option<&'a V> {
        self.terminal().payload()
    }

    /// Nodes from the root entry down to the terminal node.
    pub fn nodes<'s>(&'s self) -> impl Iterator<Item = &'a TrieNode<S, V>> + 's {
        let arena = self.arena;
        let indices: &'s [NodeIndex] = self.indices;
        indices.iter().map(move |&index| &arena[index])
    }

    /// Symbols spelling out the key of the terminal node.
    pub fn symbols(&self) -> impl Iterator<Item = &'a S> + '_ {
        self.nodes().map(TrieNode::symbol)
    }

    /// Rebuilds the full key of the terminal node.
    pub fn key(&self) -> Vec<S> {
        self.symbols().cloned().collect()
    }
}

enum Step {
    Enter(NodeIndex),
    Leave,
}

/// Walks every node below `starts`, visiting each valid node.
///
/// `prefix` holds the ancestors of the start nodes, outermost first, so keys
/// rebuilt from the path are complete. A `Break` from the visitor ends the
/// whole walk. Uses an explicit work stack, so depth is not bounded by the
/// call stack.
pub(super) fn walk<'a, S, V, F>(
    arena: &'a NodeArena<S, V>,
    prefix: Vec<NodeIndex>,
    starts: impl IntoIterator<Item = NodeIndex>,
    visit: &mut F,
) -> ControlFlow<()>
where
    S: Symbol,
    F: FnMut(&TraversalPath<'a, '_, S, V>) -> ControlFlow<()>,
{
    let mut path = prefix;
    let mut pending: Vec<Step> = starts.into_iter().map(Step::Enter).collect();

    while let Some(step) = pending.pop() {
        match step {
            Step::Enter(index) => {
                path.push(index);
                let node = &arena[index];

                if node.is_valid() {
                    let current = TraversalPath {
                        arena,
                        indices: &path,
                        terminal: index,
                    };
                    if visit(&current).is_break() {
                        return ControlFlow::Break(());
                    }
                }

                pending.push(Step::Leave);
                pending.extend(node.children().map(Step::Enter));
            }
            Step::Leave => {
                path.pop();
            }
        }
    }

    ControlFlow::Continue(())
}
