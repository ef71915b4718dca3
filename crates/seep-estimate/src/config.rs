//! Estimator configuration and validation.
//!
//! [`EstimatorConfig`] is the builder-input for a
//! [`MonteCarloEstimator`](crate::MonteCarloEstimator).
//! [`validate()`](EstimatorConfig::validate) checks it once at construction;
//! nothing downstream re-checks.

use seep_core::EstimateError;

/// Upper bound on explicitly requested worker threads.
const MAX_WORKERS: usize = 64;
/// Upper bound on auto-detected worker threads.
const MAX_AUTO_WORKERS: usize = 16;

/// Configuration for a batch of percolation trials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Side length `n` of every trial grid. Default: 200.
    pub grid_size: usize,
    /// Number of independent trials per batch. Default: 100.
    pub trials: usize,
    /// Base seed for per-trial RNGs. `None` draws one from OS entropy when
    /// the estimator is built. Default: `None`.
    pub seed: Option<u64>,
    /// Number of worker threads. `None` = auto-detect
    /// (`available_parallelism`, clamped to `[1, 16]`). Default: `Some(1)`.
    pub worker_count: Option<usize>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            grid_size: 200,
            trials: 100,
            seed: None,
            worker_count: Some(1),
        }
    }
}

impl EstimatorConfig {
    /// Check structural invariants.
    ///
    /// Rejects a zero grid size, zero trials, and an explicit worker count
    /// of zero.
    pub fn validate(&self) -> Result<(), EstimateError> {
        if self.grid_size == 0 {
            return Err(EstimateError::InvalidArgument {
                reason: "grid_size must be at least 1".into(),
            });
        }
        if self.trials == 0 {
            return Err(EstimateError::InvalidArgument {
                reason: "trials must be at least 1".into(),
            });
        }
        if self.worker_count == Some(0) {
            return Err(EstimateError::InvalidArgument {
                reason: "worker_count must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`. Either way the result never
    /// exceeds `trials`, since a worker with no trial to run is wasted.
    pub fn resolved_worker_count(&self) -> usize {
        let workers = match self.worker_count {
            Some(n) => n.clamp(1, MAX_WORKERS),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, MAX_AUTO_WORKERS),
        };
        workers.min(self.trials.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = EstimatorConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.grid_size, 200);
        assert_eq!(cfg.trials, 100);
        assert_eq!(cfg.resolved_worker_count(), 1);
    }

    #[test]
    fn zero_values_are_rejected() {
        let zero_grid = EstimatorConfig {
            grid_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            zero_grid.validate(),
            Err(EstimateError::InvalidArgument { .. })
        ));

        let zero_trials = EstimatorConfig {
            trials: 0,
            ..Default::default()
        };
        assert!(zero_trials.validate().is_err());

        let zero_workers = EstimatorConfig {
            worker_count: Some(0),
            ..Default::default()
        };
        assert!(zero_workers.validate().is_err());
    }

    #[test]
    fn explicit_workers_are_clamped() {
        let cfg = EstimatorConfig {
            trials: 1000,
            worker_count: Some(500),
            ..Default::default()
        };
        assert_eq!(cfg.resolved_worker_count(), 64);
    }

    #[test]
    fn workers_never_exceed_trials() {
        let cfg = EstimatorConfig {
            trials: 3,
            worker_count: Some(8),
            ..Default::default()
        };
        assert_eq!(cfg.resolved_worker_count(), 3);

        let auto = EstimatorConfig {
            trials: 1,
            worker_count: None,
            ..Default::default()
        };
        assert_eq!(auto.resolved_worker_count(), 1);
    }

    #[test]
    fn auto_detect_stays_in_range() {
        let cfg = EstimatorConfig {
            trials: 1000,
            worker_count: None,
            ..Default::default()
        };
        let n = cfg.resolved_worker_count();
        assert!((1..=16).contains(&n));
    }
}
