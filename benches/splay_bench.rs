//! Overall simple performance bench for the splay tree in a few access
//! patterns. Here to quickly test for regressions.

use std::collections::BTreeSet;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use splaytree::tree::SplayTree;

// Variations on the number of keys for benchmarks that measure accesses.
const TREE_SIZES: [u64; 3] = [1 << 10, 1 << 14, 1 << 18];

// Insertion in shuffled order keeps the freshly built tree shallow; inserting
// in key order would hand the first measured search a full-height spine.
fn build_tree(size: u64) -> SplayTree<u64> {
    let mut keys: Vec<u64> = (0..size).collect();
    keys.shuffle(&mut StdRng::seed_from_u64(42));
    let mut tree = SplayTree::new();
    for key in keys {
        tree.insert(key).unwrap();
    }
    tree
}

pub fn rand_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("rand_insert");
    group.throughput(Throughput::Elements(1));

    group.bench_function("splaytree", |b| {
        let mut tree = SplayTree::new();
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| {
            let key: u64 = rng.random_range(0..1 << 20);
            criterion::black_box(tree.insert(key).is_ok());
        })
    });

    // BTreeSet as the std baseline for the same workload.
    group.bench_function("btreeset", |b| {
        let mut set = BTreeSet::new();
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| {
            let key: u64 = rng.random_range(0..1 << 20);
            criterion::black_box(set.insert(key));
        })
    });

    group.finish();
}

pub fn rand_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("rand_search");
    group.throughput(Throughput::Elements(1));
    for size in TREE_SIZES {
        group.bench_with_input(BenchmarkId::new("uniform", size), &size, |b, size| {
            let mut tree = build_tree(*size);
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| {
                let key = rng.random_range(0..*size);
                criterion::black_box(tree.search(key));
            })
        });
    }
    group.finish();
}

pub fn skewed_search(c: &mut Criterion) {
    // Splay trees shine when a small working set gets most of the traffic;
    // keep the hot keys at 1% of the tree and hammer them.
    let mut group = c.benchmark_group("skewed_search");
    group.throughput(Throughput::Elements(1));
    for size in TREE_SIZES {
        group.bench_with_input(BenchmarkId::new("hot_1pct", size), &size, |b, size| {
            let mut tree = build_tree(*size);
            let hot = (*size / 100).max(1);
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| {
                let key = rng.random_range(0..hot);
                criterion::black_box(tree.search(key));
            })
        });
    }
    group.finish();
}

pub fn rand_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("rand_delete");
    group.throughput(Throughput::Elements(1));
    group.bench_function("delete_reinsert", |b| {
        let mut tree = build_tree(1 << 14);
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| {
            let key = rng.random_range(0..1u64 << 14);
            if tree.delete(key).is_ok() {
                let _ = tree.insert(key);
            }
        })
    });
    group.finish();
}

criterion_group!(benches, rand_insert, rand_search, skewed_search, rand_delete);
criterion_main!(benches);
