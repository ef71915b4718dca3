//! A single percolation trial.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use seep_core::GridError;
use seep_grid::PercolationGrid;

/// The RNG for trial `index` of a batch seeded with `base_seed`.
pub fn trial_rng(base_seed: u64, index: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(base_seed.wrapping_add(index))
}

/// Open uniformly random sites of a fresh `n`-by-`n` grid until it
/// percolates, and return the fraction of sites open at that moment.
///
/// Sites are drawn from all `n * n` positions, not only closed ones;
/// drawing an open site again is a no-op. The result is in `(0, 1]`.
///
/// # Examples
///
/// ```
/// use seep_estimate::{percolation_threshold, trial_rng};
///
/// let mut rng = trial_rng(7, 0);
/// let p = percolation_threshold(8, &mut rng).unwrap();
/// assert!(p > 0.0 && p <= 1.0);
/// ```
pub fn percolation_threshold<R: Rng>(n: usize, rng: &mut R) -> Result<f64, GridError> {
    let mut grid = PercolationGrid::new(n)?;
    while !grid.percolates() {
        let row = rng.random_range(0..n);
        let col = rng.random_range(0..n);
        grid.open(row, col)?;
    }
    Ok(grid.open_fraction())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_site_threshold_is_one() {
        let mut rng = trial_rng(0, 0);
        assert_eq!(percolation_threshold(1, &mut rng).unwrap(), 1.0);
    }

    #[test]
    fn zero_size_is_rejected() {
        let mut rng = trial_rng(0, 0);
        assert_eq!(
            percolation_threshold(0, &mut rng).unwrap_err(),
            GridError::EmptyGrid
        );
    }

    #[test]
    fn same_seed_same_threshold() {
        let a = percolation_threshold(20, &mut trial_rng(42, 3)).unwrap();
        let b = percolation_threshold(20, &mut trial_rng(42, 3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn threshold_is_a_multiple_of_one_site() {
        let n = 6;
        for i in 0..20 {
            let p = percolation_threshold(n, &mut trial_rng(1, i)).unwrap();
            let opened = p * (n * n) as f64;
            assert!((opened - opened.round()).abs() < 1e-9);
            // At least one site per row is needed to span the grid.
            assert!(opened.round() as usize >= n);
        }
    }
}
