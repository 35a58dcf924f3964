//! # rbd-engine
//!
//! Time-dependent reliability evaluation for systems modeled as reliability
//! block diagrams (RBD): series, parallel, bridge, and k-out-of-n blocks.
//!
//! Components are described by reliability curves sampled at discrete time
//! instants — either one curve per component ("generic", a row-major
//! `count × times` matrix) or a single curve shared by interchangeable
//! components ("identical"). Every entry point returns the system
//! reliability over the same instants, with each sample capped to `[0, 1]`
//! (NaN becomes 0) and the whole curve repaired to be non-increasing.
//!
//! The k-out-of-n resolver picks per block between explicit subset
//! enumeration and a recursive decomposition, counting failures instead of
//! successes whenever that side is smaller. Long time axes are evaluated in
//! parallel batches on a shared thread pool when the `parallel` feature
//! (default) is enabled; results are bit-identical either way.
//!
//! ## Quick start
//!
//! ```
//! use rbd_engine::{Components, RbdEngine};
//!
//! // Four interchangeable pumps sampled hourly; at least two must run.
//! let curve: Vec<f64> = (0..24).map(|t| (-0.01 * t as f64).exp()).collect();
//! let pumps = Components::identical(&curve, 4)?;
//!
//! let reliability = RbdEngine::new().koon(pumps, 2)?;
//! assert_eq!(reliability.len(), 24);
//! assert!(reliability[23] <= reliability[0]);
//! # Ok::<(), rbd_engine::RbdError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod engine;
mod error;
mod postprocess;
mod report;
mod scheduler;
mod thread_pool;
mod types;

// Functional modules
mod blocks;
pub mod combinatorics;
pub mod output;

// Re-exports for public API
pub use config::Config;
pub use constants::{BRIDGE_COMPONENTS, MIN_BATCH_SIZE};
pub use engine::RbdEngine;
pub use error::{RbdError, Result};
pub use report::CurveReport;
pub use types::{BlockKind, Components, SampleMatrix, SharedCurve};

/// Evaluate a series block with the default configuration.
///
/// The system works while every component does.
pub fn series(components: Components<'_>) -> Result<Vec<f64>> {
    RbdEngine::new().series(components)
}

/// Evaluate a parallel block with the default configuration.
///
/// The system works while at least one component does.
pub fn parallel(components: Components<'_>) -> Result<Vec<f64>> {
    RbdEngine::new().parallel(components)
}

/// Evaluate a bridge block with the default configuration.
///
/// Exactly five components: two two-element paths plus the bridge.
pub fn bridge(components: Components<'_>) -> Result<Vec<f64>> {
    RbdEngine::new().bridge(components)
}

/// Evaluate a k-out-of-n block with the default configuration.
///
/// At least `min_components` of the block's components must work.
pub fn koon(components: Components<'_>, min_components: u8) -> Result<Vec<f64>> {
    RbdEngine::new().koon(components, min_components)
}
