//! Criterion micro-benchmarks for disjoint-set forest operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use seep_forest::DisjointSetForest;

/// Benchmark: union all 100K elements into one tree along a chain.
fn bench_union_chain_100k(c: &mut Criterion) {
    let n = 100_000;
    c.bench_function("union_chain_100k", |b| {
        b.iter(|| {
            let mut forest = DisjointSetForest::new(n).unwrap();
            for i in 1..n {
                forest.union(i - 1, i).unwrap();
            }
            black_box(forest.component_count());
        });
    });
}

/// Benchmark: 100K pseudo-random unions followed by a find on every element.
fn bench_random_union_find_100k(c: &mut Criterion) {
    let n = 100_000usize;
    // Deterministic pseudo-random pairs within bounds.
    let pairs: Vec<(usize, usize)> = (0..n as u64)
        .map(|i| {
            let a = (i.wrapping_mul(6364136223846793007) % n as u64) as usize;
            let b = (i.wrapping_mul(1442695040888963407) % n as u64) as usize;
            (a, b)
        })
        .collect();

    c.bench_function("random_union_find_100k", |b| {
        b.iter(|| {
            let mut forest = DisjointSetForest::new(n).unwrap();
            for &(a, bv) in &pairs {
                forest.union(a, bv).unwrap();
            }
            for i in 0..n {
                black_box(forest.find(i).unwrap());
            }
        });
    });
}

criterion_group!(benches, bench_union_chain_100k, bench_random_union_find_100k);
criterion_main!(benches);
