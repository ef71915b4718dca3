//! Reduction of trial samples to summary statistics.

use std::fmt;

use seep_core::EstimateError;

/// z-score for a two-sided 95% confidence interval.
const CONFIDENCE_95: f64 = 1.96;

/// Summary of a batch of percolation thresholds.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdStats {
    /// Side length of the trial grids.
    pub grid_size: usize,
    /// Number of samples reduced.
    pub trials: usize,
    /// Sample mean.
    pub mean: f64,
    /// Sample standard deviation (Bessel-corrected; `0.0` for one sample).
    pub stddev: f64,
    /// Low end of the 95% confidence interval for the mean.
    pub confidence_low: f64,
    /// High end of the 95% confidence interval for the mean.
    pub confidence_high: f64,
}

impl ThresholdStats {
    /// Reduce `samples` from grids of side `grid_size`.
    ///
    /// Returns `Err(EstimateError::InvalidArgument)` for an empty slice.
    pub fn from_samples(grid_size: usize, samples: &[f64]) -> Result<Self, EstimateError> {
        if samples.is_empty() {
            return Err(EstimateError::InvalidArgument {
                reason: "no samples to reduce".into(),
            });
        }
        let count = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / count;
        let stddev = if samples.len() > 1 {
            let ss: f64 = samples.iter().map(|x| (x - mean) * (x - mean)).sum();
            (ss / (count - 1.0)).sqrt()
        } else {
            0.0
        };
        let half_width = CONFIDENCE_95 * stddev / count.sqrt();
        Ok(Self {
            grid_size,
            trials: samples.len(),
            mean,
            stddev,
            confidence_low: mean - half_width,
            confidence_high: mean + half_width,
        })
    }
}

impl fmt::Display for ThresholdStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mean                    = {}", self.mean)?;
        writeln!(f, "stddev                  = {}", self.stddev)?;
        write!(
            f,
            "95% confidence interval = [{}, {}]",
            self.confidence_low, self.confidence_high
        )
    }
}
