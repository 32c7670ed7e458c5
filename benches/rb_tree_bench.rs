//! Benchmark for RbTree vs standard BTreeSet.
//!
//! Compares the engine's unique and equal insertion, lookup, erasure and
//! full traversal against Rust's standard BTreeSet.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ordtree::tree::RbTree;
use std::collections::BTreeSet;
use std::hint::black_box;

/// Deterministic pseudo-random keys so both containers see the same input.
fn scrambled_keys(size: u64) -> Vec<u64> {
    (0..size)
        .map(|index| index.wrapping_mul(0x9E37_79B9_7F4A_7C15) % (size * 4))
        .collect()
}

fn rb_tree_of(keys: &[u64]) -> RbTree<u64> {
    let mut tree = RbTree::new();
    for key in keys {
        tree.insert_unique(*key);
    }
    tree
}

// =============================================================================
// insert Benchmark
// =============================================================================

fn benchmark_insert(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("insert");

    for size in [100_u64, 1000, 10000] {
        let keys = scrambled_keys(size);

        group.bench_with_input(
            BenchmarkId::new("RbTree::insert_unique", size),
            &keys,
            |bencher, keys| {
                bencher.iter(|| {
                    let mut tree: RbTree<u64> = RbTree::new();
                    for key in keys {
                        tree.insert_unique(black_box(*key));
                    }
                    black_box(tree)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("RbTree::insert_equal", size),
            &keys,
            |bencher, keys| {
                bencher.iter(|| {
                    let mut tree: RbTree<u64> = RbTree::new();
                    for key in keys {
                        tree.insert_equal(black_box(*key));
                    }
                    black_box(tree)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeSet::insert", size),
            &keys,
            |bencher, keys| {
                bencher.iter(|| {
                    let mut set = BTreeSet::new();
                    for key in keys {
                        set.insert(black_box(*key));
                    }
                    black_box(set)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// find Benchmark
// =============================================================================

fn benchmark_find(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("find");

    for size in [100_u64, 1000, 10000] {
        let keys = scrambled_keys(size);
        let tree = rb_tree_of(&keys);
        let set: BTreeSet<u64> = keys.iter().copied().collect();

        group.bench_with_input(
            BenchmarkId::new("RbTree::find", size),
            &keys,
            |bencher, keys| {
                bencher.iter(|| {
                    for key in keys {
                        black_box(tree.find(black_box(key)));
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeSet::get", size),
            &keys,
            |bencher, keys| {
                bencher.iter(|| {
                    for key in keys {
                        black_box(set.get(black_box(key)));
                    }
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// erase Benchmark
// =============================================================================

fn benchmark_erase(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("erase");

    for size in [100_u64, 1000, 10000] {
        let keys = scrambled_keys(size);
        let tree = rb_tree_of(&keys);
        let set: BTreeSet<u64> = keys.iter().copied().collect();

        group.bench_with_input(
            BenchmarkId::new("RbTree::erase_key", size),
            &keys,
            |bencher, keys| {
                bencher.iter(|| {
                    let mut tree = tree.clone();
                    for key in keys {
                        tree.erase_key(black_box(key));
                    }
                    black_box(tree)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BTreeSet::remove", size),
            &keys,
            |bencher, keys| {
                bencher.iter(|| {
                    let mut set = set.clone();
                    for key in keys {
                        set.remove(black_box(key));
                    }
                    black_box(set)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// iteration Benchmark
// =============================================================================

fn benchmark_iteration(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iteration");

    for size in [100_u64, 1000, 10000] {
        let keys = scrambled_keys(size);
        let tree = rb_tree_of(&keys);
        let set: BTreeSet<u64> = keys.iter().copied().collect();

        group.bench_function(BenchmarkId::new("RbTree", size), |bencher| {
            bencher.iter(|| black_box(tree.iter().sum::<u64>()));
        });

        group.bench_function(BenchmarkId::new("RbTree::clone", size), |bencher| {
            bencher.iter(|| black_box(tree.clone()));
        });

        group.bench_function(BenchmarkId::new("BTreeSet", size), |bencher| {
            bencher.iter(|| black_box(set.iter().sum::<u64>()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_find,
    benchmark_erase,
    benchmark_iteration
);
criterion_main!(benches);
