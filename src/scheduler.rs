//! Batch-parallel execution over the time axis.
//!
//! Work is split into contiguous batches of time indices sized by
//! `BatchPlan`. Each batch owns a disjoint slice of the output, so workers
//! cannot alias; a run returns only after every batch completes, which gives
//! callers a full barrier before post-processing. A single batch runs inline
//! on the calling thread.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::Config;
use crate::error::Result;
#[cfg(feature = "parallel")]
use crate::thread_pool;

/// Contiguous partition of a time axis into equally sized batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BatchPlan {
    /// Time samples per batch (the last batch may be shorter).
    pub batch_size: usize,
    /// Number of batches covering the axis.
    pub batch_count: usize,
}

impl BatchPlan {
    /// Size batches for `times` samples across `workers` threads.
    ///
    /// Batches never carry fewer than `min_batch` samples; short axes
    /// collapse to a single batch rather than paying handoff costs for
    /// slivers of work.
    pub fn new(times: usize, workers: usize, min_batch: usize) -> Self {
        let workers = workers.max(1);
        let batch_size = times.div_ceil(workers).max(min_batch).max(1);
        let batch_count = times.div_ceil(batch_size);
        Self {
            batch_size,
            batch_count,
        }
    }
}

/// Run `worker` over every time index, in batches.
///
/// The worker receives the absolute index of its first sample and the
/// matching output slice, and must write every slot it is handed. Every
/// index is covered exactly once.
pub(crate) fn run<W>(config: &Config, out: &mut [f64], worker: W) -> Result<()>
where
    W: Fn(usize, &mut [f64]) + Sync,
{
    let times = out.len();
    if times == 0 {
        return Ok(());
    }
    let min_batch = config.min_batch_size.max(1);
    if times <= min_batch {
        // One batch; the pool is not touched.
        worker(0, out);
        return Ok(());
    }

    let plan = BatchPlan::new(times, worker_count(config)?, min_batch);
    if plan.batch_count <= 1 {
        worker(0, out);
        return Ok(());
    }

    execute(plan, out, &worker)
}

#[cfg(feature = "parallel")]
fn worker_count(config: &Config) -> Result<usize> {
    match config.workers {
        Some(workers) => Ok(workers.max(1)),
        None => Ok(thread_pool::pool()?.current_num_threads()),
    }
}

#[cfg(not(feature = "parallel"))]
fn worker_count(config: &Config) -> Result<usize> {
    Ok(config.workers.unwrap_or(1).max(1))
}

#[cfg(feature = "parallel")]
fn execute<W>(plan: BatchPlan, out: &mut [f64], worker: &W) -> Result<()>
where
    W: Fn(usize, &mut [f64]) + Sync,
{
    let pool = thread_pool::pool()?;
    pool.install(|| {
        out.par_chunks_mut(plan.batch_size)
            .enumerate()
            .for_each(|(batch, chunk)| worker(batch * plan.batch_size, chunk));
    });
    Ok(())
}

#[cfg(not(feature = "parallel"))]
fn execute<W>(plan: BatchPlan, out: &mut [f64], worker: &W) -> Result<()>
where
    W: Fn(usize, &mut [f64]),
{
    for (batch, chunk) in out.chunks_mut(plan.batch_size).enumerate() {
        worker(batch * plan.batch_size, chunk);
    }
    Ok(())
}
