//! Evaluated-curve reports for serialization and display.

use serde::{Deserialize, Serialize};

use crate::types::BlockKind;

/// A fully evaluated reliability curve plus the block shape it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveReport {
    /// Block topology evaluated.
    pub block: BlockKind,
    /// Component count (n).
    pub components: u8,
    /// Minimum working components (k); only k-out-of-n blocks carry one.
    pub min_components: Option<u8>,
    /// Time samples covered.
    pub times: usize,
    /// System reliability per time instant; non-increasing, within [0, 1].
    pub reliability: Vec<f64>,
}

impl CurveReport {
    /// Wrap an evaluated curve.
    pub fn new(
        block: BlockKind,
        components: u8,
        min_components: Option<u8>,
        reliability: Vec<f64>,
    ) -> Self {
        Self {
            block,
            components,
            min_components,
            times: reliability.len(),
            reliability,
        }
    }

    /// Reliability at the first time instant.
    pub fn initial(&self) -> Option<f64> {
        self.reliability.first().copied()
    }

    /// Reliability at the last time instant.
    pub fn last(&self) -> Option<f64> {
        self.reliability.last().copied()
    }

    /// First time index where reliability drops below `threshold`.
    pub fn first_below(&self, threshold: f64) -> Option<usize> {
        self.reliability.iter().position(|&r| r < threshold)
    }

    /// Human-readable block label, e.g. `"2-out-of-4"` or `"series (3)"`.
    pub fn label(&self) -> String {
        match (self.block, self.min_components) {
            (BlockKind::Koon, Some(k)) => format!("{}-out-of-{}", k, self.components),
            (BlockKind::Koon, None) => format!("k-out-of-{}", self.components),
            (BlockKind::Series, _) => format!("series ({})", self.components),
            (BlockKind::Parallel, _) => format!("parallel ({})", self.components),
            (BlockKind::Bridge, _) => "bridge (5)".to_string(),
        }
    }
}
