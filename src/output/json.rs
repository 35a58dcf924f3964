//! JSON serialization for curve reports.

use crate::report::CurveReport;

/// Serialize a `CurveReport` to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `CurveReport`).
pub fn to_json(report: &CurveReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a `CurveReport` to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `CurveReport`).
pub fn to_json_pretty(report: &CurveReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
