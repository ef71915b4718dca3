//! Benchmark profiles and utilities for the Seep percolation toolkit.
//!
//! Provides pre-built [`EstimatorConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 100x100 grids, 50 trials
//! - [`stress_profile`]: 400x400 grids, 50 trials, auto-detected workers
//! - [`shuffled_sites`]: deterministic site permutation via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use seep_core::Site;
use seep_estimate::EstimatorConfig;

/// Build a reference benchmark profile: 100x100 grids (10K sites), 50
/// trials on one thread.
pub fn reference_profile(seed: u64) -> EstimatorConfig {
    EstimatorConfig {
        grid_size: 100,
        trials: 50,
        seed: Some(seed),
        worker_count: Some(1),
    }
}

/// Build a stress benchmark profile: 400x400 grids (160K sites).
///
/// Same trial count as [`reference_profile`] at 16x the site count, spread
/// over all available cores.
pub fn stress_profile(seed: u64) -> EstimatorConfig {
    EstimatorConfig {
        grid_size: 400,
        trials: 50,
        seed: Some(seed),
        worker_count: None,
    }
}

/// Every site of an `n`-by-`n` grid in a seeded random order.
///
/// Opening sites in this order visits each exactly once, which isolates
/// grid cost from the re-draws a real trial makes.
pub fn shuffled_sites(n: usize, seed: u64) -> Vec<Site> {
    let mut sites: Vec<Site> = (0..n * n).map(|i| Site::from_flat_index(i, n)).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    sites.shuffle(&mut rng);
    sites
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_valid() {
        assert!(reference_profile(1).validate().is_ok());
        assert!(stress_profile(1).validate().is_ok());
    }

    #[test]
    fn shuffled_sites_is_a_permutation() {
        let n = 7;
        let mut sites = shuffled_sites(n, 3);
        assert_eq!(sites.len(), n * n);
        sites.sort();
        sites.dedup();
        assert_eq!(sites.len(), n * n);
        assert!(sites.iter().all(|s| s.in_bounds(n)));
    }

    #[test]
    fn shuffled_sites_is_seeded() {
        assert_eq!(shuffled_sites(10, 5), shuffled_sites(10, 5));
        assert_ne!(shuffled_sites(10, 5), shuffled_sites(10, 6));
    }
}
