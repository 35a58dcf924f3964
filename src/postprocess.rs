//! Output hygiene: per-sample capping and the monotonic repair pass.

/// Cap one evaluated sample: NaN collapses to 0, everything else is clamped
/// to `[0, 1]`. Applied by every step function before it writes.
#[inline]
pub(crate) fn cap(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Clamp upward blips so the curve is non-increasing.
///
/// Reliability is a survival probability. Rounding in the per-instant
/// formulas can push a sample a few ulp above its predecessor, typically
/// near t = 0 or near saturation; one forward pass repairs that
/// deterministically. Runs as the last step of every entry point, after the
/// scheduler barrier.
pub(crate) fn enforce_monotonic(curve: &mut [f64]) {
    for t in 1..curve.len() {
        if curve[t] > curve[t - 1] {
            curve[t] = curve[t - 1];
        }
    }
}
