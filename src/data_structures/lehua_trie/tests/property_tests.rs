// Copyright (c) 2025 Lehua Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Property-based tests for the Lehua Trie.

use proptest::prelude::*;
use std::collections::HashMap;

use crate::data_structures::lehua_trie::{LehuaTrie, NodeId, TraversalMode};

// Short keys over a tiny alphabet, so prefixes collide often
fn key_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..6)
}

#[derive(Debug, Clone)]
enum Op {
    Put(Vec<u8>, u32),
    Remove(Vec<u8>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (key_strategy(), any::<u32>()).prop_map(|(key, value)| Op::Put(key, value)),
        key_strategy().prop_map(Op::Remove),
    ]
}

fn mode_strategy() -> impl Strategy<Value = TraversalMode> {
    prop::sample::select(TraversalMode::ALL.to_vec())
}

proptest! {
    // Property: a put is visible to the next get
    #[test]
    fn prop_put_then_get(
        keys in prop::collection::vec(key_strategy(), 0..20),
        key in key_strategy(),
        value in any::<u32>(),
        mode in mode_strategy()
    ) {
        let mut trie = LehuaTrie::with_traversal(mode);
        for (i, other) in keys.iter().enumerate() {
            let _ = trie.put(other, i as u32).unwrap();
        }

        let before = trie.len();
        let outcome = trie.put(&key, value).unwrap();

        if key.is_empty() {
            prop_assert!(!outcome.is_stored());
            prop_assert_eq!(trie.len(), before);
            prop_assert_eq!(trie.get(&key).unwrap(), None);
        } else {
            prop_assert_eq!(trie.get(&key).unwrap(), Some(&value));
        }
    }

    // Property: remove hands back what put stored and leaves nothing behind
    #[test]
    fn prop_remove_after_put(
        keys in prop::collection::vec(key_strategy(), 0..20),
        key in key_strategy().prop_filter("non-empty", |k| !k.is_empty()),
        value in any::<u32>()
    ) {
        let mut trie = LehuaTrie::new();
        for other in &keys {
            let _ = trie.put(other, 0).unwrap();
        }
        let _ = trie.put(&key, value).unwrap();

        prop_assert_eq!(trie.remove(&key).unwrap(), Some(value));
        prop_assert_eq!(trie.get(&key).unwrap(), None);

        // Every other key survives the removal.
        for other in keys.iter().filter(|k| !k.is_empty() && **k != key) {
            prop_assert!(trie.contains_key(other).unwrap());
        }
    }

    // Property: the trie behaves like a map, and its snapshots agree with len
    #[test]
    fn prop_matches_reference_map(
        ops in prop::collection::vec(op_strategy(), 0..60),
        mode in mode_strategy()
    ) {
        let mut trie = LehuaTrie::with_traversal(mode);
        let mut reference: HashMap<Vec<u8>, u32> = HashMap::new();

        for op in ops {
            match op {
                Op::Put(key, value) => {
                    let _ = trie.put(&key, value).unwrap();
                    if !key.is_empty() {
                        reference.insert(key, value);
                    }
                }
                Op::Remove(key) => {
                    prop_assert_eq!(trie.remove(&key).unwrap(), reference.remove(&key));
                }
            }

            prop_assert_eq!(trie.len(), reference.len());
            prop_assert_eq!(trie.key_set().len(), trie.len());
            prop_assert_eq!(trie.values().len(), trie.len());
            prop_assert_eq!(trie.entry_set().len(), trie.len());
        }

        for (key, value) in &reference {
            prop_assert_eq!(trie.get(key).unwrap(), Some(value));
        }
        for (key, value) in trie.entry_set() {
            prop_assert_eq!(reference.get(&key), Some(value));
        }
    }

    // Property: pruning never leaves dead nodes behind
    #[test]
    fn prop_no_dead_nodes_after_removal(
        keys in prop::collection::vec(key_strategy(), 1..20)
    ) {
        let mut trie = LehuaTrie::new();
        for key in &keys {
            let _ = trie.put(key, ()).unwrap();
        }
        for key in &keys {
            trie.remove(key).unwrap();
        }

        prop_assert!(trie.is_empty());
        prop_assert_eq!(trie.node_count(), 0);
    }

    // Property: both search strategies return the same chain
    #[test]
    fn prop_modes_agree(
        keys in prop::collection::vec(key_strategy(), 0..20),
        probe in key_strategy()
    ) {
        let mut trie = LehuaTrie::new();
        for key in &keys {
            let _ = trie.put(key, ()).unwrap();
        }

        let chain = |mode| -> Vec<NodeId> {
            trie.longest_prefix_chain_with(&probe, mode)
                .unwrap()
                .iter()
                .map(|node| node.id())
                .collect()
        };
        prop_assert_eq!(chain(TraversalMode::Incremental), chain(TraversalMode::Recursive));
    }
}
