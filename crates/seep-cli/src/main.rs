//! `seep`: estimate the 2D site percolation threshold from the command line.
//!
//! ```text
//! seep 200 100 --seed 42 --workers 8
//! ```
//!
//! Prints the sample mean, standard deviation, and 95% confidence interval
//! to stdout. Diagnostics go to stderr at the level chosen by
//! `--log-level`. Exits 0 on success, 2 on invalid arguments, and 1 on any
//! other failure.

#![forbid(unsafe_code)]

use std::process::ExitCode;

use clap::Parser;
use seep::prelude::*;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Estimate the site percolation threshold of an n-by-n grid by Monte Carlo
/// simulation.
#[derive(Parser, Debug)]
#[command(name = "seep", version)]
struct Args {
    /// Side length of each trial grid.
    n: usize,

    /// Number of independent trials.
    trials: usize,

    /// Base seed for reproducible runs. Drawn from OS entropy if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads. Auto-detected from available parallelism if omitted.
    #[arg(long)]
    workers: Option<usize>,

    /// Diagnostic verbosity on stderr (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

impl Args {
    fn config(&self) -> EstimatorConfig {
        EstimatorConfig {
            grid_size: self.n,
            trials: self.trials,
            seed: self.seed,
            worker_count: self.workers,
        }
    }
}

fn init_tracing(level: LevelFilter) -> Result<(), tracing_subscriber::util::TryInitError> {
    let fmt = fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(fmt)
        .with(level)
        .try_init()
}

fn exit_status(error: &EstimateError) -> u8 {
    match error.kind() {
        ErrorKind::InvalidArgument | ErrorKind::IndexOutOfBounds => 2,
        ErrorKind::Internal => 1,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = init_tracing(args.log_level) {
        eprintln!("warning: could not install log subscriber: {e}");
    }

    let result = MonteCarloEstimator::new(args.config()).and_then(|estimator| {
        tracing::info!(seed = estimator.base_seed(), "starting trials");
        estimator.run()
    });
    match result {
        Ok(stats) => {
            println!("{stats}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(exit_status(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_arguments_map_to_config() {
        let args = Args::try_parse_from(["seep", "50", "30", "--seed", "9"]).unwrap();
        let cfg = args.config();
        assert_eq!(cfg.grid_size, 50);
        assert_eq!(cfg.trials, 30);
        assert_eq!(cfg.seed, Some(9));
        assert_eq!(cfg.worker_count, None);
        assert_eq!(args.log_level, LevelFilter::WARN);
    }

    #[test]
    fn workers_and_log_level_are_parsed() {
        let args =
            Args::try_parse_from(["seep", "8", "2", "--workers", "3", "--log-level", "debug"])
                .unwrap();
        assert_eq!(args.config().worker_count, Some(3));
        assert_eq!(args.log_level, LevelFilter::DEBUG);
    }

    #[test]
    fn negative_and_missing_arguments_are_rejected() {
        assert!(Args::try_parse_from(["seep", "-3", "10"]).is_err());
        assert!(Args::try_parse_from(["seep", "10"]).is_err());
        assert!(Args::try_parse_from(["seep", "ten", "10"]).is_err());
    }

    #[test]
    fn zero_size_is_an_invalid_argument() {
        let args = Args::try_parse_from(["seep", "0", "10"]).unwrap();
        let err = MonteCarloEstimator::new(args.config()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(exit_status(&err), 2);
    }
}
