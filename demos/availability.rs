//! Yearly availability of a pump skid where any 2 of 4 identical pumps
//! keep the plant running.
//!
//! Run with: cargo run --example availability

use rbd_engine::{output, BlockKind, Components, CurveReport, RbdEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // One sample per hour for a year, exponential decay with MTTF ~ 5 years.
    let hours = 24 * 365;
    let rate = 1.0 / (5.0 * 24.0 * 365.0);
    let curve: Vec<f64> = (0..hours).map(|t| (-rate * t as f64).exp()).collect();

    let pumps = Components::identical(&curve, 4)?;
    let engine = RbdEngine::new();
    let reliability = engine.koon(pumps, 2)?;

    let report = CurveReport::new(BlockKind::Koon, 4, Some(2), reliability);
    println!("{}", output::terminal::format_report(&report, 0.99));
    println!("{}", output::json::to_json_pretty(&report)?);

    Ok(())
}
