//! Series, parallel, and bridge evaluators against closed-form references
//! and exhaustive outcome enumeration.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rbd_engine::{bridge, parallel, series, Components, RbdError};

/// Success probability of the bridge over all 32 outcome masks.
///
/// Minimal paths: {0,1}, {2,3}, {0,4,3}, {2,4,1}.
fn bridge_brute_force(r: &[f64]) -> f64 {
    let mut total = 0.0;
    for mask in 0u32..32 {
        let up = |component: usize| mask & (1 << component) != 0;
        let connected = (up(0) && up(1))
            || (up(2) && up(3))
            || (up(0) && up(4) && up(3))
            || (up(2) && up(4) && up(1));
        if !connected {
            continue;
        }
        let mut outcome = 1.0;
        for (component, &rc) in r.iter().enumerate() {
            outcome *= if up(component) { rc } else { 1.0 - rc };
        }
        total += outcome;
    }
    total
}

#[test]
fn series_generic_is_the_product() {
    // Two instants, three components, each row one curve.
    let samples = [0.9, 0.8, 0.95, 0.9, 0.99, 0.98];
    let components = Components::generic(&samples, 3).unwrap();
    let out = series(components).unwrap();
    assert!((out[0] - 0.9 * 0.95 * 0.99).abs() < 1e-12);
    assert!((out[1] - 0.8 * 0.9 * 0.98).abs() < 1e-12);
}

#[test]
fn series_identical_is_the_power() {
    let curve = [1.0, 0.9, 0.8];
    let out = series(Components::identical(&curve, 4).unwrap()).unwrap();
    assert_eq!(out[0], 1.0);
    assert!((out[1] - 0.9f64.powi(4)).abs() < 1e-12);
    assert!((out[2] - 0.8f64.powi(4)).abs() < 1e-12);
}

#[test]
fn parallel_generic_complements_joint_failure() {
    let samples = [0.6, 0.5, 0.7, 0.4];
    let components = Components::generic(&samples, 2).unwrap();
    let out = parallel(components).unwrap();
    assert!((out[0] - (1.0 - 0.4 * 0.3)).abs() < 1e-12);
    assert!((out[1] - (1.0 - 0.5 * 0.6)).abs() < 1e-12);
}

#[test]
fn parallel_identical_complements_joint_failure() {
    let curve = [0.5, 0.3];
    let out = parallel(Components::identical(&curve, 3).unwrap()).unwrap();
    assert!((out[0] - (1.0 - 0.5f64.powi(3))).abs() < 1e-12);
    assert!((out[1] - (1.0 - 0.7f64.powi(3))).abs() < 1e-12);
}

/// With one component, series and parallel both reduce to its own curve.
#[test]
fn single_component_block_is_its_own_curve() {
    let curve = [1.0, 0.8, 0.6];
    let components = Components::generic(&curve, 1).unwrap();
    assert_eq!(series(components).unwrap(), curve.to_vec());
    assert_eq!(parallel(components).unwrap(), curve.to_vec());
}

#[test]
fn bridge_matches_path_enumeration() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(101);
    for _ in 0..16 {
        let samples: Vec<f64> = (0..5).map(|_| rng.random_range(0.0..=1.0)).collect();
        let components = Components::generic(&samples, 5).unwrap();
        let out = bridge(components).unwrap();
        let expected = bridge_brute_force(&samples);
        assert!(
            (out[0] - expected).abs() < 1e-9,
            "{} vs {} for {:?}",
            out[0],
            expected,
            samples
        );
    }
}

/// The quintic shortcut matches the conditional decomposition on a
/// replicated matrix.
#[test]
fn bridge_identical_matches_replicated_generic() {
    for r in [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0] {
        let curve = [r];
        let identical = bridge(Components::identical(&curve, 5).unwrap()).unwrap();
        let samples = vec![r; 5];
        let generic = bridge(Components::generic(&samples, 5).unwrap()).unwrap();
        assert!(
            (identical[0] - generic[0]).abs() < 1e-12,
            "r = {}: {} vs {}",
            r,
            identical[0],
            generic[0]
        );
    }
}

/// Perfect components make the bridge exactly certain, no rounding residue.
#[test]
fn bridge_with_perfect_components_is_certain() {
    let curve = [1.0];
    let identical = bridge(Components::identical(&curve, 5).unwrap()).unwrap();
    assert_eq!(identical[0], 1.0);

    let samples = [1.0; 5];
    let generic = bridge(Components::generic(&samples, 5).unwrap()).unwrap();
    assert_eq!(generic[0], 1.0);
}

/// Only the cross link working means no source-to-sink path.
#[test]
fn bridge_link_alone_is_dead() {
    let samples = [0.0, 0.0, 0.0, 0.0, 1.0];
    let out = bridge(Components::generic(&samples, 5).unwrap()).unwrap();
    assert_eq!(out[0], 0.0);
}

/// Top-in plus cross link plus bottom-out is a working path.
#[test]
fn bridge_cross_path_works() {
    let samples = [1.0, 0.0, 0.0, 1.0, 1.0];
    let out = bridge(Components::generic(&samples, 5).unwrap()).unwrap();
    assert_eq!(out[0], 1.0);
}

#[test]
fn bridge_rejects_other_arities() {
    let samples = [0.9; 4];
    let err = bridge(Components::generic(&samples, 4).unwrap()).unwrap_err();
    assert_eq!(err, RbdError::BridgeComponentCount { got: 4 });

    let curve = [0.9, 0.8];
    let err = bridge(Components::identical(&curve, 6).unwrap()).unwrap_err();
    assert_eq!(err, RbdError::BridgeComponentCount { got: 6 });
}

/// Samples outside [0, 1] and NaN are capped before the curve leaves.
#[test]
fn out_of_range_inputs_are_capped() {
    let curve = [1.5, 1.2];
    let out = series(Components::generic(&curve, 1).unwrap()).unwrap();
    assert_eq!(out, vec![1.0, 1.0]);

    let curve = [f64::NAN, 2.0, -3.0];
    let out = parallel(Components::identical(&curve, 2).unwrap()).unwrap();
    assert!(out.iter().all(|&r| (0.0..=1.0).contains(&r)));
    assert!(out.iter().all(|&r| !r.is_nan()));
}
