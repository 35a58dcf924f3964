//! Numeric defaults shared across the crate.

/// Smallest number of time samples a scheduler batch will carry.
///
/// Slices shorter than this cost more in thread handoff than they save in
/// wall time, so time axes at or below the floor run on the calling thread.
pub const MIN_BATCH_SIZE: usize = 10_000;

/// Components in a bridge block: two two-element paths plus the bridge.
pub const BRIDGE_COMPONENTS: u8 = 5;
