//! Bridge blocks: two two-component paths cross-connected by a fifth
//! element.
//!
//! Components 0 and 1 form the top path, 2 and 3 the bottom path, and 4 is
//! the bridge between the path midpoints.

use crate::config::Config;
use crate::constants::BRIDGE_COMPONENTS;
use crate::error::{RbdError, Result};
use crate::types::{Components, SampleMatrix, SharedCurve};

/// Evaluate a bridge block into `out`, one reliability per time sample.
///
/// # Errors
///
/// `BridgeComponentCount` unless the block has exactly five components.
pub(crate) fn evaluate_into(
    config: &Config,
    components: Components<'_>,
    out: &mut [f64],
) -> Result<()> {
    if components.count() != BRIDGE_COMPONENTS {
        return Err(RbdError::BridgeComponentCount {
            got: components.count(),
        });
    }
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

/// One-instant bridge reliability by conditioning on the bridge element.
///
/// With the bridge up, the midpoints merge and the system is two parallel
/// pairs in series; with it down, the two series paths stand alone in
/// parallel.
#[inline]
fn step_generic(matrix: &SampleMatrix<'_>, t: usize) -> f64 {
    let top_in = matrix.reliability(0, t);
    let top_out = matrix.reliability(1, t);
    let bottom_in = matrix.reliability(2, t);
    let bottom_out = matrix.reliability(3, t);
    let bridge = matrix.reliability(4, t);

    let bridge_up =
        (1.0 - (1.0 - top_in) * (1.0 - bottom_in)) * (1.0 - (1.0 - top_out) * (1.0 - bottom_out));
    let bridge_down = 1.0 - (1.0 - top_in * top_out) * (1.0 - bottom_in * bottom_out);
    bridge * bridge_up + (1.0 - bridge) * bridge_down
}

/// One-instant bridge reliability for interchangeable components.
///
/// Conditioning with a single shared `r` collapses to the quintic
/// `2r^5 - 5r^4 + 2r^3 + 2r^2`, evaluated in Horner form. Exactly 1 at
/// r = 1.
#[inline]
fn step_identical(curve: &SharedCurve<'_>, t: usize) -> f64 {
    let r = curve.reliability(t);
    r * r * (2.0 + r * (2.0 + r * (2.0 * r - 5.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_components_give_certainty() {
        let samples = [1.0; 5];
        let matrix = SampleMatrix::new(&samples, 5).unwrap();
        assert_eq!(step_generic(&matrix, 0), 1.0);

        let curve = [1.0];
        let shared = SharedCurve::new(&curve, 5).unwrap();
        assert_eq!(step_identical(&shared, 0), 1.0);
    }

    #[test]
    fn dead_paths_leave_zero() {
        let samples = [0.0; 5];
        let matrix = SampleMatrix::new(&samples, 5).unwrap();
        assert_eq!(step_generic(&matrix, 0), 0.0);
    }

    #[test]
    fn identical_collapses_the_generic_formula() {
        for &r in &[0.0, 0.1, 0.37, 0.5, 0.92, 1.0] {
            let samples = [r; 5];
            let matrix = SampleMatrix::new(&samples, 5).unwrap();
            let curve = [r];
            let shared = SharedCurve::new(&curve, 5).unwrap();
            assert!(
                (step_generic(&matrix, 0) - step_identical(&shared, 0)).abs() < 1e-12,
                "r = {}",
                r
            );
        }
    }

    #[test]
    fn bridge_only_does_not_connect() {
        // Working bridge with all four path components dead.
        let samples = [0.0, 0.0, 0.0, 0.0, 1.0];
        let matrix = SampleMatrix::new(&samples, 5).unwrap();
        assert_eq!(step_generic(&matrix, 0), 0.0);
    }

    #[test]
    fn cross_path_through_bridge_connects() {
        // Top input and bottom output work; only the bridge joins them.
        let samples = [1.0, 0.0, 0.0, 1.0, 1.0];
        let matrix = SampleMatrix::new(&samples, 5).unwrap();
        assert_eq!(step_generic(&matrix, 0), 1.0);
    }
}
