//! Component sample layouts accepted by the block evaluators.

use serde::{Deserialize, Serialize};

use crate::error::{RbdError, Result};

/// Per-component reliability curves for one block, stored row-major as a
/// `count × times` matrix: component `c` at time `t` lives at
/// `samples[c * times + t]` (component-major, time-contiguous).
#[derive(Debug, Clone, Copy)]
pub struct SampleMatrix<'a> {
    samples: &'a [f64],
    count: u8,
    times: usize,
}

impl<'a> SampleMatrix<'a> {
    /// Wrap a row-major sample buffer for `count` components.
    ///
    /// The number of time samples per component is derived from the buffer
    /// length. Sample values are not range-checked; out-of-range inputs are
    /// tolerated and outputs are capped.
    ///
    /// # Errors
    ///
    /// `NoComponents` when `count` is zero; `LayoutMismatch` when the buffer
    /// does not divide into `count` equal-length curves.
    pub fn new(samples: &'a [f64], count: u8) -> Result<Self> {
        if count == 0 {
            return Err(RbdError::NoComponents);
        }
        if samples.len() % usize::from(count) != 0 {
            return Err(RbdError::LayoutMismatch {
                len: samples.len(),
                count,
            });
        }
        Ok(Self {
            samples,
            count,
            times: samples.len() / usize::from(count),
        })
    }

    /// Component count (n).
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Time samples per component curve.
    pub fn times(&self) -> usize {
        self.times
    }

    /// Reliability of `component` at time index `t`.
    #[inline]
    pub fn reliability(&self, component: usize, t: usize) -> f64 {
        self.samples[component * self.times + t]
    }
}

/// One reliability curve shared by every component of a block.
#[derive(Debug, Clone, Copy)]
pub struct SharedCurve<'a> {
    curve: &'a [f64],
    count: u8,
}

impl<'a> SharedCurve<'a> {
    /// Wrap a single curve shared by `count` interchangeable components.
    ///
    /// # Errors
    ///
    /// `NoComponents` when `count` is zero.
    pub fn new(curve: &'a [f64], count: u8) -> Result<Self> {
        if count == 0 {
            return Err(RbdError::NoComponents);
        }
        Ok(Self { curve, count })
    }

    /// Component count (n).
    pub fn count(&self) -> u8 {
        self.count
    }

    /// Time samples in the curve.
    pub fn times(&self) -> usize {
        self.curve.len()
    }

    /// Shared component reliability at time index `t`.
    #[inline]
    pub fn reliability(&self, t: usize) -> f64 {
        self.curve[t]
    }
}

/// Component samples for one block evaluation.
///
/// The two layouts mirror the two entry-point families: `Generic` carries a
/// distinct curve per component, `Identical` one curve shared by all of
/// them. The identical layout is both smaller and cheaper to evaluate, since
/// interchangeable components let the k-out-of-n sum collapse to a binomial
/// expansion.
#[derive(Debug, Clone, Copy)]
pub enum Components<'a> {
    /// Each component has its own reliability curve.
    Generic(SampleMatrix<'a>),
    /// All components share a single reliability curve.
    Identical(SharedCurve<'a>),
}

impl<'a> Components<'a> {
    /// Per-component curves in a row-major `count × times` buffer.
    pub fn generic(samples: &'a [f64], count: u8) -> Result<Self> {
        Ok(Self::Generic(SampleMatrix::new(samples, count)?))
    }

    /// One shared curve for `count` interchangeable components.
    pub fn identical(curve: &'a [f64], count: u8) -> Result<Self> {
        Ok(Self::Identical(SharedCurve::new(curve, count)?))
    }

    /// Component count (n).
    pub fn count(&self) -> u8 {
        match self {
            Self::Generic(matrix) => matrix.count(),
            Self::Identical(curve) => curve.count(),
        }
    }

    /// Time samples every evaluation of this block covers.
    pub fn times(&self) -> usize {
        match self {
            Self::Generic(matrix) => matrix.times(),
            Self::Identical(curve) => curve.times(),
        }
    }
}

/// Block topologies the engine evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    /// All components must work.
    Series,
    /// At least one component must work.
    Parallel,
    /// Five components: two two-element paths cross-connected by a bridge.
    Bridge,
    /// At least k of n components must work.
    Koon,
}
