//! Parallel blocks: the system works while at least one component does.

use crate::config::Config;
use crate::error::Result;
use crate::types::{Components, SampleMatrix, SharedCurve};

/// Evaluate a parallel block into `out`, one reliability per time sample.
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

/// One-instant parallel reliability: the complement of every component
/// failing at once.
#[inline]
fn step_generic(matrix: &SampleMatrix<'_>, t: usize) -> f64 {
    let mut all_fail = 1.0;
    for component in 0..usize::from(matrix.count()) {
        all_fail *= 1.0 - matrix.reliability(component, t);
    }
    1.0 - all_fail
}

/// One-instant parallel reliability for interchangeable components:
/// `1 - (1 - r)^n`.
#[inline]
fn step_identical(curve: &SharedCurve<'_>, t: usize) -> f64 {
    1.0 - (1.0 - curve.reliability(t)).powi(i32::from(curve.count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_step_complements_joint_failure() {
        let samples = [0.9, 0.5, 0.8, 0.8, 0.5, 0.0];
        let matrix = SampleMatrix::new(&samples, 3).unwrap();
        let expected = 1.0 - 0.1 * 0.2 * 0.5;
        assert!((step_generic(&matrix, 0) - expected).abs() < 1e-15);
    }

    #[test]
    fn identical_step_uses_shared_curve() {
        let curve = [0.3];
        let shared = SharedCurve::new(&curve, 3).unwrap();
        let expected = 1.0 - 0.7f64.powi(3);
        assert!((step_identical(&shared, 0) - expected).abs() < 1e-15);
    }

    #[test]
    fn one_working_component_is_enough() {
        let samples = [0.0, 1.0, 0.0];
        let matrix = SampleMatrix::new(&samples, 3).unwrap();
        assert_eq!(step_generic(&matrix, 0), 1.0);
    }
}
