use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use randbst::Bst;
use std::collections::BTreeMap;

const N: usize = 10_000;

/// Sorted input is kept small for the unbalanced tree, whose height is `n`.
const SORTED_N: usize = 2_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    let mut keys = ordered_keys(n);
    keys.shuffle(&mut StdRng::seed_from_u64(12_345));
    keys
}

fn unbalanced(keys: &[i64]) -> Bst<i64, i64> {
    let mut tree = Bst::new();
    for &key in keys {
        tree.insert(key, key);
    }
    tree
}

fn balanced(keys: &[i64]) -> Bst<i64, i64> {
    let mut tree = Bst::new();
    for &key in keys {
        tree.balanced_insert(key, key);
    }
    tree
}

// ─── Insert ─────────────────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion) {
    for (name, keys) in [("insert_random", random_keys(N)), ("insert_ordered", ordered_keys(SORTED_N))] {
        let mut group = c.benchmark_group(name);
        let n = keys.len();

        group.bench_function(BenchmarkId::new("Bst::insert", n), |b| b.iter(|| unbalanced(&keys)));
        group.bench_function(BenchmarkId::new("Bst::balanced_insert", n), |b| b.iter(|| balanced(&keys)));
        group.bench_function(BenchmarkId::new("BTreeMap", n), |b| {
            b.iter(|| keys.iter().map(|&key| (key, key)).collect::<BTreeMap<_, _>>());
        });

        group.finish();
    }
}

// ─── Lookup ─────────────────────────────────────────────────────────────────

fn bench_find(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("find_random");

    let tree = unbalanced(&keys);
    group.bench_function(BenchmarkId::new("Bst::insert", N), |b| {
        b.iter(|| keys.iter().filter(|&key| tree.find(key).is_some()).count());
    });

    let tree = balanced(&keys);
    group.bench_function(BenchmarkId::new("Bst::balanced_insert", N), |b| {
        b.iter(|| keys.iter().filter(|&key| tree.find(key).is_some()).count());
    });

    let map: BTreeMap<_, _> = keys.iter().map(|&key| (key, key)).collect();
    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| keys.iter().filter(|&key| map.contains_key(key)).count());
    });

    group.finish();
}

// ─── Delete ─────────────────────────────────────────────────────────────────

fn bench_delete(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("delete_random");

    group.bench_function(BenchmarkId::new("Bst::delete", N), |b| {
        b.iter_batched(
            || unbalanced(&keys),
            |mut tree| {
                for key in &keys {
                    tree.delete(key);
                }
                tree
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("Bst::balanced_delete", N), |b| {
        b.iter_batched(
            || balanced(&keys),
            |mut tree| {
                for key in &keys {
                    tree.balanced_delete(key);
                }
                tree
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&key| (key, key)).collect::<BTreeMap<_, _>>(),
            |mut map| {
                for key in &keys {
                    map.remove(key);
                }
                map
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ─── Order statistics ───────────────────────────────────────────────────────

fn bench_order_statistics(c: &mut Criterion) {
    let keys = random_keys(N);
    let tree = balanced(&keys);
    let mut group = c.benchmark_group("order_statistics");

    group.bench_function(BenchmarkId::new("select", N), |b| {
        b.iter(|| (1..=N).step_by(7).map(|rank| *tree.select(rank).0).sum::<i64>());
    });
    group.bench_function(BenchmarkId::new("rank_of", N), |b| {
        b.iter(|| keys.iter().step_by(7).filter_map(|key| tree.rank_of(key)).sum::<usize>());
    });
    group.bench_function(BenchmarkId::new("pred", N), |b| {
        b.iter(|| keys.iter().step_by(7).filter(|&key| tree.pred(key).is_some()).count());
    });

    group.finish();
}

// ─── Split and join ─────────────────────────────────────────────────────────

fn bench_split_join(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("split_join");

    group.bench_function(BenchmarkId::new("split_middle_then_join", N), |b| {
        b.iter_batched(
            || balanced(&keys),
            |tree| {
                let (mut low, high) = tree.split(black_box(&(N as i64 / 2)));
                low.join(high);
                low
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function(BenchmarkId::new("split_edge_then_join", N), |b| {
        b.iter_batched(
            || balanced(&keys),
            |tree| {
                let (mut low, high) = tree.split(black_box(&16));
                low.join(high);
                low
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_find,
    bench_delete,
    bench_order_statistics,
    bench_split_join
);
criterion_main!(benches);
