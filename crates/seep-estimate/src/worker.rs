//! Trial worker pool.
//!
//! Trial indices are queued on a crossbeam channel up front and the sender
//! is dropped, so each worker runs until the queue is empty. Every worker
//! owns its grid and RNG; the only shared state is the pair of channels.
//! Results come back tagged with their trial index and are placed in index
//! order, which keeps a seeded batch independent of scheduling.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use seep_core::{EstimateError, GridError};

use crate::trial::{percolation_threshold, trial_rng};

/// Outcome of one trial, tagged with its index.
type TrialResult = (usize, Result<f64, GridError>);

/// Run trials `0..trials` on `worker_count` threads.
///
/// Returns the samples in trial order.
pub(crate) fn run_parallel(
    grid_size: usize,
    trials: usize,
    base_seed: u64,
    worker_count: usize,
) -> Result<Vec<f64>, EstimateError> {
    let (task_tx, task_rx) = crossbeam_channel::unbounded::<usize>();
    for index in 0..trials {
        // The receiver is alive in this scope, so this cannot fail.
        let _ = task_tx.send(index);
    }
    drop(task_tx);

    let (result_tx, result_rx) = crossbeam_channel::unbounded::<TrialResult>();
    let handles = spawn_workers(worker_count, grid_size, base_seed, &task_rx, &result_tx)?;
    drop(result_tx);

    let mut samples: Vec<Option<f64>> = vec![None; trials];
    let mut first_error = None;
    for (index, outcome) in result_rx.iter() {
        match outcome {
            Ok(threshold) => samples[index] = Some(threshold),
            Err(e) if first_error.is_none() => first_error = Some(e),
            Err(_) => {}
        }
    }

    for (i, handle) in handles.into_iter().enumerate() {
        handle.join().map_err(|_| EstimateError::WorkerFailed {
            reason: format!("seep-trial-{i} panicked"),
        })?;
    }
    if let Some(e) = first_error {
        return Err(e.into());
    }

    samples
        .into_iter()
        .enumerate()
        .map(|(index, sample)| {
            sample.ok_or_else(|| EstimateError::WorkerFailed {
                reason: format!("trial {index} produced no result"),
            })
        })
        .collect()
}

fn spawn_workers(
    worker_count: usize,
    grid_size: usize,
    base_seed: u64,
    task_rx: &Receiver<usize>,
    result_tx: &Sender<TrialResult>,
) -> Result<Vec<JoinHandle<()>>, EstimateError> {
    let mut handles = Vec::with_capacity(worker_count);
    for i in 0..worker_count {
        let task_rx = task_rx.clone();
        let result_tx = result_tx.clone();
        let handle = thread::Builder::new()
            .name(format!("seep-trial-{i}"))
            .spawn(move || worker_loop(i, grid_size, base_seed, task_rx, result_tx))
            .map_err(|e| EstimateError::WorkerFailed {
                reason: format!("failed to spawn seep-trial-{i}: {e}"),
            })?;
        handles.push(handle);
    }
    Ok(handles)
}

/// Main loop for a trial worker. Runs until the task queue is drained.
fn worker_loop(
    worker: usize,
    grid_size: usize,
    base_seed: u64,
    task_rx: Receiver<usize>,
    result_tx: Sender<TrialResult>,
) {
    tracing::trace!(worker, "trial worker started");
    let mut completed = 0usize;
    while let Ok(index) = task_rx.recv() {
        let mut rng = trial_rng(base_seed, index as u64);
        let outcome = percolation_threshold(grid_size, &mut rng);
        if let Ok(&threshold) = outcome.as_ref() {
            tracing::debug!(trial = index, worker, threshold, "trial complete");
        }
        if result_tx.send((index, outcome)).is_err() {
            break;
        }
        completed += 1;
    }
    tracing::trace!(worker, completed, "trial worker stopped");
}
