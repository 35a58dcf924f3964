//! Terminal output formatting with colors.

use colored::Colorize;

use crate::report::CurveReport;

/// Format a `CurveReport` for human-readable terminal output.
///
/// `threshold` is the mission reliability target: the summary reports
/// whether the curve ever drops below it and, if so, when.
pub fn format_report(report: &CurveReport, threshold: f64) -> String {
    let mut output = String::new();
    let sep = "\u{2500}".repeat(62);

    output.push_str("rbd-engine\n");
    output.push_str(&sep);
    output.push('\n');
    output.push('\n');

    output.push_str(&format!("  Block: {}\n", report.label()));
    output.push_str(&format!("  Time samples: {}\n", report.times));
    output.push('\n');

    match (report.initial(), report.last()) {
        (Some(initial), Some(last)) => {
            output.push_str(&format!(
                "  Reliability: {:.6} at start, {:.6} at end\n",
                initial, last
            ));
            match report.first_below(threshold) {
                None => {
                    output.push_str(&format!(
                        "  {}\n",
                        format!("\u{2713} Stays at or above {:.4}", threshold)
                            .green()
                            .bold()
                    ));
                }
                Some(t) => {
                    output.push_str(&format!(
                        "  {}\n",
                        format!("\u{26A0} Drops below {:.4} at t = {}", threshold, t)
                            .yellow()
                            .bold()
                    ));
                }
            }
        }
        _ => {
            output.push_str("  (empty curve)\n");
        }
    }

    output.push('\n');
    output.push_str(&sep);
    output.push('\n');

    output
}
