//! Series blocks: the system works only while every component does.

use crate::config::Config;
use crate::error::Result;
use crate::types::{Components, SampleMatrix, SharedCurve};

/// Evaluate a series block into `out`, one reliability per time sample.
pub(crate) fn evaluate_into(
    config: &Config,
    components: Components<'_>,
    out: &mut [f64],
) -> Result<()> {
    super::expect_output(components.times(), out)?;
    match components {
        Components::Generic(matrix) => {
            super::run_step(config, out, |t| step_generic(&matrix, t))
        }
        Components::Identical(curve) => {
            super::run_step(config, out, |t| step_identical(&curve, t))
        }
    }
}

/// One-instant series reliability: the product over all component curves.
#[inline]
fn step_generic(matrix: &SampleMatrix<'_>, t: usize) -> f64 {
    let mut reliability = 1.0;
    for component in 0..usize::from(matrix.count()) {
        reliability *= matrix.reliability(component, t);
    }
    reliability
}

/// One-instant series reliability for interchangeable components: `r^n`.
#[inline]
fn step_identical(curve: &SharedCurve<'_>, t: usize) -> f64 {
    curve.reliability(t).powi(i32::from(curve.count()))
}
