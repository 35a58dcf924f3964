//! Block evaluators: series, parallel, bridge, and k-out-of-n.
//!
//! Each evaluator validates its inputs, then drives the batch scheduler with
//! a scalar per-instant step function; every sample is capped before it is
//! written. The monotonic post-pass belongs to the entry points in `engine`,
//! not here, so k-out-of-n delegation to series/parallel does not
//! post-process twice.

pub(crate) mod bridge;
pub(crate) mod koon;
pub(crate) mod parallel;
pub(crate) mod series;

use crate::config::Config;
use crate::error::{RbdError, Result};
use crate::postprocess::cap;
use crate::scheduler;

/// Check that `out` matches the evaluation length derived from the inputs.
pub(crate) fn expect_output(times: usize, out: &[f64]) -> Result<()> {
    if out.len() != times {
        return Err(RbdError::OutputLength {
            expected: times,
            got: out.len(),
        });
    }
    Ok(())
}

/// Drive a one-instant step function across the whole time axis.
///
/// Capping happens here, once, so no step function has to remember it.
pub(crate) fn run_step<S>(config: &Config, out: &mut [f64], step: S) -> Result<()>
where
    S: Fn(usize) -> f64 + Sync,
{
    scheduler::run(config, out, |start, chunk| {
        for (offset, slot) in chunk.iter_mut().enumerate() {
            *slot = cap(step(start + offset));
        }
    })
}
