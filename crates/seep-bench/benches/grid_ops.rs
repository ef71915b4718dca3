//! Criterion micro-benchmarks for percolation grid operations.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use seep_bench::shuffled_sites;
use seep_grid::PercolationGrid;

/// Benchmark: open sites of a 200x200 grid in shuffled order until it
/// percolates, checking after every open as a trial does.
fn bench_open_until_percolates_200(c: &mut Criterion) {
    let n = 200;
    let sites = shuffled_sites(n, 42);

    c.bench_function("open_until_percolates_200", |b| {
        b.iter(|| {
            let mut grid = PercolationGrid::new(n).unwrap();
            for &site in &sites {
                grid.open_site(site).unwrap();
                if grid.percolates() {
                    break;
                }
            }
            black_box(grid.number_of_open_sites());
        });
    });
}

/// Benchmark: `is_full` on every site of a fully opened 200x200 grid.
fn bench_is_full_scan_200(c: &mut Criterion) {
    let n = 200;
    let mut grid = PercolationGrid::new(n).unwrap();
    for site in shuffled_sites(n, 7) {
        grid.open_site(site).unwrap();
    }

    c.bench_function("is_full_scan_200", |b| {
        b.iter(|| {
            for row in 0..n {
                for col in 0..n {
                    black_box(grid.is_full(row, col).unwrap());
                }
            }
        });
    });
}

criterion_group!(benches, bench_open_until_percolates_200, bench_is_full_scan_200);
criterion_main!(benches);
