//! Seep: union-find site percolation with backwash-free full-site detection.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Seep sub-crates. For most users, adding `seep` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use seep::prelude::*;
//!
//! // Open a vertical path down column 1 of a 4x4 grid, plus one isolated
//! // bottom-row site.
//! let mut grid = PercolationGrid::new(4).unwrap();
//! for row in 0..4 {
//!     grid.open(row, 1).unwrap();
//! }
//! grid.open(3, 3).unwrap();
//!
//! assert!(grid.percolates());
//! assert!(grid.is_full(3, 1).unwrap());
//! // No backwash: the isolated site is open but not full.
//! assert!(!grid.is_full(3, 3).unwrap());
//!
//! // Estimate the threshold on small grids.
//! let config = EstimatorConfig {
//!     grid_size: 16,
//!     trials: 20,
//!     seed: Some(1),
//!     worker_count: Some(2),
//! };
//! let stats = MonteCarloEstimator::new(config).unwrap().run().unwrap();
//! assert!(stats.mean > 0.0 && stats.mean <= 1.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `seep-core` | `Site`, error enums, `ErrorKind` |
//! | [`forest`] | `seep-forest` | `DisjointSetForest` |
//! | [`grid`] | `seep-grid` | `PercolationGrid`, `SiteState` |
//! | [`estimate`] | `seep-estimate` | `MonteCarloEstimator`, config, statistics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`seep-core`).
pub use seep_core as types;

/// Disjoint-set forest (`seep-forest`).
///
/// [`forest::DisjointSetForest`] is usable on its own for any union-find
/// workload over `0..n`.
pub use seep_forest as forest;

/// Percolation grid (`seep-grid`).
pub use seep_grid as grid;

/// Monte Carlo threshold estimation (`seep-estimate`).
///
/// [`estimate::percolation_threshold`] runs a single trial against any
/// [`rand`-compatible](https://docs.rs/rand) RNG.
pub use seep_estimate as estimate;

/// Common imports for typical Seep usage.
///
/// ```rust
/// use seep::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use seep_core::{ErrorKind, Site};

    // Errors
    pub use seep_core::{EstimateError, ForestError, GridError};

    // Forest
    pub use seep_forest::DisjointSetForest;

    // Grid
    pub use seep_grid::{PercolationGrid, SiteState};

    // Estimation
    pub use seep_estimate::{EstimatorConfig, MonteCarloEstimator, ThresholdStats};
}
