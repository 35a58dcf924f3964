//! Main `RbdEngine` entry point and builder.

use crate::blocks;
use crate::config::Config;
use crate::error::Result;
use crate::postprocess;
use crate::types::Components;

/// Main entry point for reliability evaluation.
///
/// Use the builder pattern to configure and evaluate blocks. Every
/// operation comes in two forms: an owned form returning a fresh curve, and
/// an `_into` form writing into a caller-owned buffer of matching length.
/// All of them cap each sample to `[0, 1]` (NaN becomes 0) and finish with
/// a monotonic repair pass, so returned curves are always physical
/// survival curves.
///
/// # Example
///
/// ```
/// use rbd_engine::{Components, RbdEngine};
///
/// let curve: Vec<f64> = (0..100).map(|t| (-0.02 * t as f64).exp()).collect();
/// let drives = Components::identical(&curve, 6)?;
///
/// let reliability = RbdEngine::new()
///     .min_batch_size(50_000)
///     .koon(drives, 4)?;
///
/// assert_eq!(reliability.len(), 100);
/// # Ok::<(), rbd_engine::RbdError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RbdEngine {
    config: Config,
}

impl Default for RbdEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RbdEngine {
    /// Create with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the worker thread count used for batch sizing.
    pub fn workers(mut self, workers: usize) -> Self {
        self.config.workers = Some(workers);
        self
    }

    /// Set the minimum time samples per scheduler batch.
    pub fn min_batch_size(mut self, samples: usize) -> Self {
        self.config.min_batch_size = samples;
        self
    }

    /// Set the subset-count ceiling for k-out-of-n enumeration.
    pub fn koon_enumeration_limit(mut self, limit: u64) -> Self {
        self.config.koon_enumeration_limit = Some(limit);
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Evaluate a series block: the system works while every component
    /// does.
    pub fn series(&self, components: Components<'_>) -> Result<Vec<f64>> {
        let mut out = vec![0.0; components.times()];
        self.series_into(components, &mut out)?;
        Ok(out)
    }

    /// Evaluate a series block into a caller-owned buffer.
    ///
    /// # Errors
    ///
    /// `OutputLength` when `out` does not match the curve length. On any
    /// error the buffer contents are unspecified.
    pub fn series_into(&self, components: Components<'_>, out: &mut [f64]) -> Result<()> {
        blocks::series::evaluate_into(&self.config, components, out)?;
        postprocess::enforce_monotonic(out);
        Ok(())
    }

    /// Evaluate a parallel block: the system works while at least one
    /// component does.
    pub fn parallel(&self, components: Components<'_>) -> Result<Vec<f64>> {
        let mut out = vec![0.0; components.times()];
        self.parallel_into(components, &mut out)?;
        Ok(out)
    }

    /// Evaluate a parallel block into a caller-owned buffer.
    ///
    /// # Errors
    ///
    /// `OutputLength` when `out` does not match the curve length. On any
    /// error the buffer contents are unspecified.
    pub fn parallel_into(&self, components: Components<'_>, out: &mut [f64]) -> Result<()> {
        blocks::parallel::evaluate_into(&self.config, components, out)?;
        postprocess::enforce_monotonic(out);
        Ok(())
    }

    /// Evaluate a bridge block: two two-component paths cross-connected by
    /// a fifth bridge element.
    ///
    /// # Errors
    ///
    /// `BridgeComponentCount` unless the block has exactly five components.
    pub fn bridge(&self, components: Components<'_>) -> Result<Vec<f64>> {
        let mut out = vec![0.0; components.times()];
        self.bridge_into(components, &mut out)?;
        Ok(out)
    }

    /// Evaluate a bridge block into a caller-owned buffer.
    ///
    /// # Errors
    ///
    /// `BridgeComponentCount` for a component count other than five;
    /// `OutputLength` when `out` does not match the curve length. On any
    /// error the buffer contents are unspecified.
    pub fn bridge_into(&self, components: Components<'_>, out: &mut [f64]) -> Result<()> {
        blocks::bridge::evaluate_into(&self.config, components, out)?;
        postprocess::enforce_monotonic(out);
        Ok(())
    }

    /// Evaluate a k-out-of-n block: at least `min_components` of the
    /// block's components must work.
    ///
    /// Degenerate `min_components` values resolve without combinatorics:
    /// 0 is always reliable, more than n never is, 1 is a parallel block,
    /// and exactly n is a series block.
    ///
    /// # Errors
    ///
    /// `BinomialOverflow` when an identical-components expansion needs a
    /// coefficient beyond `u64`.
    pub fn koon(&self, components: Components<'_>, min_components: u8) -> Result<Vec<f64>> {
        let mut out = vec![0.0; components.times()];
        self.koon_into(components, min_components, &mut out)?;
        Ok(out)
    }

    /// Evaluate a k-out-of-n block into a caller-owned buffer.
    ///
    /// # Errors
    ///
    /// As [`RbdEngine::koon`], plus `OutputLength` when `out` does not match
    /// the curve length. On any error the buffer contents are unspecified.
    pub fn koon_into(
        &self,
        components: Components<'_>,
        min_components: u8,
        out: &mut [f64],
    ) -> Result<()> {
        blocks::koon::evaluate_into(&self.config, components, min_components, out)?;
        postprocess::enforce_monotonic(out);
        Ok(())
    }
}
