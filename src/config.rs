//! Evaluation configuration.

/// Configuration options for `RbdEngine`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Worker threads for batch evaluation (default: one per logical CPU).
    ///
    /// `None` asks the shared pool for its thread count. The value only
    /// shapes batch sizes; results are bit-identical for any worker count.
    pub workers: Option<usize>,

    /// Minimum time samples per scheduler batch (default: 10,000).
    ///
    /// Time axes at or below this length run inline on the calling thread.
    pub min_batch_size: usize,

    /// Subset-count ceiling for the k-out-of-n enumeration strategy
    /// (default: `None`, meaning n² for an n-component block).
    ///
    /// Blocks whose total subset count stays at or under the ceiling are
    /// evaluated by explicit enumeration; the rest use the recursive
    /// decomposition. The two strategies agree to within rounding, so this
    /// only moves the speed/memory trade-off. The n² default is an
    /// empirical crossover and may change.
    pub koon_enumeration_limit: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: None,
            min_batch_size: crate::constants::MIN_BATCH_SIZE,
            koon_enumeration_limit: None,
        }
    }
}

impl Config {
    /// Resolve the enumeration ceiling for an `n`-component block.
    pub(crate) fn enumeration_limit(&self, n: u8) -> u64 {
        self.koon_enumeration_limit
            .unwrap_or_else(|| u64::from(n) * u64::from(n))
    }
}
