//! Monte Carlo estimation of the site percolation threshold.
//!
//! A trial builds a fresh [`PercolationGrid`](seep_grid::PercolationGrid),
//! opens uniformly random sites until it percolates, and records the
//! fraction of sites open at that moment. [`MonteCarloEstimator`] runs
//! many independent trials, optionally across worker threads, and reduces
//! them to [`ThresholdStats`].
//!
//! # Determinism
//!
//! Trial `i` draws from a `ChaCha8Rng` seeded with `base_seed + i`
//! (wrapping), so a batch with a fixed [`EstimatorConfig::seed`] produces
//! the same samples in the same order for any worker count.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod estimator;
pub mod stats;
pub mod trial;
mod worker;

pub use config::EstimatorConfig;
pub use estimator::MonteCarloEstimator;
pub use seep_core::EstimateError;
pub use stats::ThresholdStats;
pub use trial::{percolation_threshold, trial_rng};
