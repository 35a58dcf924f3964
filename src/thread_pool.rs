//! Shared worker pool for batch-parallel evaluation.
//!
//! The pool is built lazily on the first parallel call and reused for the
//! life of the process, so repeated evaluations do not pay thread spawn
//! costs per call.

#[cfg(feature = "parallel")]
use std::sync::OnceLock;

#[cfg(feature = "parallel")]
use rayon::ThreadPool;

#[cfg(feature = "parallel")]
use crate::error::{RbdError, Result};

#[cfg(feature = "parallel")]
static THREAD_POOL: OnceLock<std::result::Result<ThreadPool, String>> = OnceLock::new();

/// Get or initialize the shared worker pool.
///
/// Built with one thread per logical CPU. A build failure is latched and
/// surfaced as `RbdError::ThreadPool` on this and every later call — it is
/// never downgraded to a silent sequential run, so callers can trust that
/// `Ok` means the full barrier semantics of the scheduler held.
#[cfg(feature = "parallel")]
pub(crate) fn pool() -> Result<&'static ThreadPool> {
    THREAD_POOL
        .get_or_init(|| {
            rayon::ThreadPoolBuilder::new()
                .build()
                .map_err(|err| err.to_string())
        })
        .as_ref()
        .map_err(|err| RbdError::ThreadPool(err.clone()))
}
