// Copyright (c) 2025 Lehua Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Lehua Benchmarks
//!
//! Criterion benchmarks for the trie and the dictionary built on it.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use std::ops::ControlFlow;
use std::time::Duration;

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BatchSize, BenchmarkId,
    Criterion, SamplingMode, Throughput,
};

use lehua_lib::data_structures::lehua_trie::{LehuaTrie, TraversalMode};
use lehua_lib::dictionary::{Dictionary, WordMetaData};

fn keys(count: usize, length: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{:0width$}", i, width = length))
        .collect()
}

fn filled(mode: TraversalMode, keys: &[String]) -> LehuaTrie<char, usize> {
    let mut trie = LehuaTrie::with_traversal(mode);
    for (i, key) in keys.iter().enumerate() {
        let _ = trie.put(key, i).unwrap();
    }
    trie
}

/// Benchmark the Lehua Trie
fn bench_lehua_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("lehua_trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    // Insert with different key lengths
    for length in [8, 16, 32, 64] {
        let keys = keys(1000, length);
        group.throughput(Throughput::Elements(keys.len() as u64));
        group.bench_with_input(BenchmarkId::new("insert", length), &keys, |b, keys| {
            b.iter(|| black_box(filled(TraversalMode::Incremental, keys)));
        });
    }

    // Lookup under each search strategy
    let lookup_keys = keys(1000, 16);
    for mode in TraversalMode::ALL {
        let trie = filled(mode, &lookup_keys);
        let mut index = 0;
        group.bench_function(BenchmarkId::new("lookup", format!("{mode:?}")), |b| {
            b.iter(|| {
                let key = &lookup_keys[index % lookup_keys.len()];
                index += 1;
                black_box(trie.get(key).unwrap());
            });
        });
    }

    // Removal with pruning
    group.bench_function("remove_all", |b| {
        b.iter_batched(
            || filled(TraversalMode::Incremental, &lookup_keys),
            |mut trie| {
                for key in &lookup_keys {
                    black_box(trie.remove(key).unwrap());
                }
            },
            BatchSize::SmallInput,
        );
    });

    // Full depth-first traversal
    let trie = filled(TraversalMode::Incremental, &lookup_keys);
    group.bench_function("depth_first_traversal", |b| {
        b.iter(|| {
            let mut visited = 0usize;
            trie.depth_first_traversal(|_| {
                visited += 1;
                ControlFlow::Continue(())
            });
            black_box(visited)
        });
    });

    group.finish();
}

/// Benchmark dictionary queries
fn bench_dictionary(c: &mut Criterion) {
    let mut group = c.benchmark_group("dictionary");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));

    let mut dictionary = Dictionary::default();
    for i in 0..100 {
        for j in 0..10 {
            let pos = if j % 2 == 0 { "noun" } else { "verb" };
            let _ = dictionary
                .insert(WordMetaData::new(format!("prefix{i}word{j}"), pos, "meaning"))
                .unwrap();
        }
    }

    let mut prefix_index = 0;
    group.bench_function("words_with_prefix", |b| {
        b.iter(|| {
            let prefix = format!("prefix{}w", prefix_index % 100);
            prefix_index += 1;
            black_box(dictionary.words_with_prefix(&prefix).unwrap());
        });
    });

    group.bench_function("words_with_part_of_speech", |b| {
        b.iter(|| black_box(dictionary.words_with_part_of_speech("NOUN")));
    });

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_lehua_trie, bench_dictionary
}

criterion_main!(benches);
