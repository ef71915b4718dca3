//! The Monte Carlo threshold estimator.

use rand::Rng;
use seep_core::EstimateError;

use crate::config::EstimatorConfig;
use crate::stats::ThresholdStats;
use crate::trial::{percolation_threshold, trial_rng};
use crate::worker;

/// Estimates the percolation threshold by repeated random trials.
///
/// Built from a validated [`EstimatorConfig`]. The configured batch runs
/// through [`run`](Self::run), which spreads trials over worker threads.
/// [`run_trial`](Self::run_trial) and [`run_trials`](Self::run_trials) run
/// on the calling thread for an arbitrary grid size, drawing trial indices
/// from a counter that starts at 0, so a fresh estimator's
/// `run_trials(grid_size, trials)` reproduces `run()` exactly.
///
/// # Examples
///
/// ```
/// use seep_estimate::{EstimatorConfig, MonteCarloEstimator};
///
/// let config = EstimatorConfig {
///     grid_size: 20,
///     trials: 30,
///     seed: Some(7),
///     worker_count: Some(2),
/// };
/// let estimator = MonteCarloEstimator::new(config).unwrap();
/// let stats = estimator.run().unwrap();
/// assert!(stats.mean > 0.4 && stats.mean < 0.8);
/// ```
#[derive(Debug)]
pub struct MonteCarloEstimator {
    config: EstimatorConfig,
    base_seed: u64,
    next_trial: u64,
}

impl MonteCarloEstimator {
    /// Validate `config` and build an estimator.
    ///
    /// With `config.seed == None` a base seed is drawn from OS entropy here;
    /// [`base_seed`](Self::base_seed) reports it so a run can be repeated.
    pub fn new(config: EstimatorConfig) -> Result<Self, EstimateError> {
        config.validate()?;
        let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Ok(Self {
            config,
            base_seed,
            next_trial: 0,
        })
    }

    /// The configuration this estimator was built from.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// The seed trial RNGs are derived from.
    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Run one trial on a fresh `n`-by-`n` grid and return the fraction of
    /// sites open when it first percolated, in `(0, 1]`.
    pub fn run_trial(&mut self, n: usize) -> Result<f64, EstimateError> {
        if n == 0 {
            return Err(EstimateError::InvalidArgument {
                reason: "grid size must be at least 1".into(),
            });
        }
        let trial = self.next_trial;
        self.next_trial = self.next_trial.wrapping_add(1);
        let threshold = percolation_threshold(n, &mut trial_rng(self.base_seed, trial))?;
        tracing::debug!(trial, threshold, "trial complete");
        Ok(threshold)
    }

    /// Run `trials` independent trials on `n`-by-`n` grids, sequentially,
    /// and reduce them to mean and standard deviation.
    pub fn run_trials(&mut self, n: usize, trials: usize) -> Result<ThresholdStats, EstimateError> {
        if n == 0 {
            return Err(EstimateError::InvalidArgument {
                reason: "grid size must be at least 1".into(),
            });
        }
        if trials == 0 {
            return Err(EstimateError::InvalidArgument {
                reason: "trials must be at least 1".into(),
            });
        }
        let samples = (0..trials)
            .map(|_| self.run_trial(n))
            .collect::<Result<Vec<_>, _>>()?;
        let stats = ThresholdStats::from_samples(n, &samples)?;
        tracing::info!(
            grid_size = n,
            trials,
            workers = 1,
            mean = stats.mean,
            stddev = stats.stddev,
            "trial batch complete"
        );
        Ok(stats)
    }

    /// Run the configured batch across the configured worker threads.
    ///
    /// Always runs trials `0..config.trials`; independent of earlier
    /// [`run_trial`](Self::run_trial) calls and of the worker count.
    pub fn run(&self) -> Result<ThresholdStats, EstimateError> {
        let EstimatorConfig {
            grid_size, trials, ..
        } = self.config;
        let workers = self.config.resolved_worker_count();
        let samples = worker::run_parallel(grid_size, trials, self.base_seed, workers)?;
        let stats = ThresholdStats::from_samples(grid_size, &samples)?;
        tracing::info!(
            grid_size,
            trials,
            workers,
            seed = self.base_seed,
            mean = stats.mean,
            stddev = stats.stddev,
            "trial batch complete"
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    fn seeded(grid_size: usize, trials: usize, workers: usize) -> MonteCarloEstimator {
        MonteCarloEstimator::new(EstimatorConfig {
            grid_size,
            trials,
            seed: Some(2024),
            worker_count: Some(workers),
        })
        .unwrap()
    }

    #[test]
    fn new_validates_config() {
        let err = MonteCarloEstimator::new(EstimatorConfig {
            trials: 0,
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, EstimateError::InvalidArgument { .. }));
    }

    #[test]
    fn explicit_seed_is_reported() {
        assert_eq!(seeded(4, 1, 1).base_seed(), 2024);
    }

    #[test]
    fn run_trial_rejects_zero_size() {
        let mut est = seeded(4, 1, 1);
        assert!(matches!(
            est.run_trial(0),
            Err(EstimateError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn run_trials_rejects_zero_arguments() {
        let mut est = seeded(4, 1, 1);
        assert!(est.run_trials(0, 5).is_err());
        assert!(est.run_trials(5, 0).is_err());
    }

    #[test]
    fn run_trial_is_in_unit_interval() {
        let mut est = seeded(4, 1, 1);
        for n in 1..12 {
            let p = est.run_trial(n).unwrap();
            assert!(p > 0.0 && p <= 1.0, "threshold {p} for n={n}");
        }
    }

    #[test]
    fn consecutive_trials_use_fresh_rngs() {
        let mut est = seeded(30, 1, 1);
        let a = est.run_trial(30).unwrap();
        let b = est.run_trial(30).unwrap();
        let c = est.run_trial(30).unwrap();
        // Three identical thresholds on a 900-site grid would mean the
        // counter is not advancing.
        assert!(!(a == b && b == c));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn sequential_trials_log_each_completion() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(captured.clone())
            .finish();
        let mut est = seeded(6, 3, 1);
        tracing::subscriber::with_default(subscriber, || {
            est.run_trials(6, 3).unwrap();
        });

        let out = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(out.matches("trial complete").count(), 3);
        assert_eq!(out.matches("trial batch complete").count(), 1);
        assert!(out.contains("trial=2"));
    }

    #[test]
    fn fresh_run_trials_matches_run() {
        let est = seeded(10, 16, 3);
        let parallel = est.run().unwrap();
        let mut fresh = seeded(10, 16, 1);
        let sequential = fresh.run_trials(10, 16).unwrap();
        assert_eq!(parallel, sequential);
    }
}
