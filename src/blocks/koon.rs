//! K-out-of-n blocks: at least `k` of `n` components must work.
//!
//! Two strategies produce the same numbers. The fast path enumerates every
//! subset of working components of every size in `[k, n]` and sums their
//! probabilities; the recursive path decomposes on the last component
//! instead. Enumeration wins while the total subset count stays small, so
//! the resolver sums checked binomial coefficients against a ceiling before
//! committing to it, and falls back to recursion when the count is over
//! budget or cannot even be represented.
//!
//! When failures outnumber successes (`n - k + 1 > k`), both strategies run
//! on the failure side instead and subtract from one — same answer, smaller
//! subsets.

use super::{parallel, series};
use crate::combinatorics::{binomial, binomial_table, CombinationSet};
use crate::config::Config;
use crate::error::{RbdError, Result};
use crate::types::{Components, SampleMatrix, SharedCurve};

/// Evaluate a k-out-of-n block into `out`, one reliability per time sample.
pub(crate) fn evaluate_into(
    config: &Config,
    components: Components<'_>,
    k: u8,
    out: &mut [f64],
) -> Result<()> {
    super::expect_output(components.times(), out)?;
    let n = components.count();

    // Degenerate shapes resolve through simpler blocks or constant fills.
    if k == 1 {
        return parallel::evaluate_into(config, components, out);
    }
    if k == n {
        return series::evaluate_into(config, components, out);
    }
    if k == 0 {
        out.fill(1.0);
        return Ok(());
    }
    if k > n {
        out.fill(0.0);
        return Ok(());
    }

    let duality = Duality::normalize(n, k);
    match components {
        Components::Generic(matrix) => evaluate_generic(config, &matrix, duality, out),
        Components::Identical(curve) => evaluate_identical(config, &curve, duality, out),
    }
}

/// Orientation of the combinatorial sum.
///
/// When fewer failures than successes need enumerating (`n - k + 1 > k`),
/// the resolver counts failure subsets instead and subtracts the sum from
/// one. `order` is the smallest subset size actually enumerated:
/// `max(k, n - k + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Duality {
    order: u8,
    inverted: bool,
}

impl Duality {
    fn normalize(n: u8, k: u8) -> Self {
        let min_fail = n - k + 1;
        if min_fail > k {
            Self {
                order: min_fail,
                inverted: true,
            }
        } else {
            Self {
                order: k,
                inverted: false,
            }
        }
    }

    /// Per-component probability in the enumerated orientation.
    #[inline]
    fn oriented(&self, reliability: f64) -> f64 {
        if self.inverted {
            1.0 - reliability
        } else {
            reliability
        }
    }

    /// Map the enumerated sum back to a reliability.
    #[inline]
    fn resolve(&self, sum: f64) -> f64 {
        if self.inverted {
            1.0 - sum
        } else {
            sum
        }
    }
}

fn evaluate_generic(
    config: &Config,
    matrix: &SampleMatrix<'_>,
    duality: Duality,
    out: &mut [f64],
) -> Result<()> {
    let n = matrix.count();
    match enumeration_sets(n, duality.order, config.enumeration_limit(n)) {
        Some(sets) => super::run_step(config, out, |t| enumeration_step(matrix, &sets, duality, t)),
        None => super::run_step(config, out, |t| recursive_step(matrix, duality, t)),
    }
}

/// Subset tables for every size in `[order, n]`, or `None` when the
/// recursive strategy should run instead.
///
/// The checked subset total is compared against `limit` before any table is
/// built, so an over-budget call allocates nothing. The limit trades the
/// enumeration cost (total subsets × n per instant) against recursion; the
/// default n² ceiling is an empirical crossover, not a derived bound.
fn enumeration_sets(n: u8, order: u8, limit: u64) -> Option<Vec<CombinationSet>> {
    let mut total: u64 = 0;
    for size in order..=n {
        total = total.checked_add(binomial(n, size)?)?;
        if total > limit {
            return None;
        }
    }
    (order..=n)
        .map(|size| CombinationSet::generate(n, size))
        .collect()
}

/// Sum the oriented probability of every enumerated component subset.
///
/// A subset of size `i` contributes the product of oriented probabilities
/// over its members and of complements over everyone else. Subsets are
/// sorted, so one forward walk over the components pairs each with its side.
fn enumeration_step(
    matrix: &SampleMatrix<'_>,
    sets: &[CombinationSet],
    duality: Duality,
    t: usize,
) -> f64 {
    let n = usize::from(matrix.count());
    let mut sum = 0.0;
    for set in sets {
        for subset in set.iter() {
            let mut term = 1.0;
            let mut member = 0;
            for component in 0..n {
                let p = duality.oriented(matrix.reliability(component, t));
                if member < subset.len() && usize::from(subset[member]) == component {
                    term *= p;
                    member += 1;
                } else {
                    term *= 1.0 - p;
                }
            }
            sum += term;
        }
    }
    duality.resolve(sum)
}

/// Evaluate one instant through the inclusion recursion on the last
/// component: either it works (one fewer needed from the rest) or it does
/// not (all still needed). Stateless, so concurrent workers share nothing.
fn recursive_step(matrix: &SampleMatrix<'_>, duality: Duality, t: usize) -> f64 {
    let probability = |component: usize| duality.oriented(matrix.reliability(component, t));
    let sum = at_least(
        &probability,
        usize::from(matrix.count()),
        usize::from(duality.order),
    );
    duality.resolve(sum)
}

/// P(at least `k` of the first `n` components are up), with `prob(c)` the
/// per-component up probability.
fn at_least<P>(prob: &P, n: usize, k: usize) -> f64
where
    P: Fn(usize) -> f64,
{
    if k == 0 {
        return 1.0;
    }
    if k > n {
        return 0.0;
    }
    let p = prob(n - 1);
    (1.0 - p) * at_least(prob, n - 1, k) + p * at_least(prob, n - 1, k - 1)
}

fn evaluate_identical(
    config: &Config,
    curve: &SharedCurve<'_>,
    duality: Duality,
    out: &mut [f64],
) -> Result<()> {
    let n = curve.count();
    // Interchangeable components collapse the subset sum to a binomial
    // expansion; a coefficient that cannot be represented is a hard error
    // since there is no cheaper strategy to fall back to.
    let table = binomial_table(n, duality.order).ok_or(RbdError::BinomialOverflow {
        n,
        k: duality.order,
    })?;
    super::run_step(config, out, |t| identical_step(curve, &table, duality, t))
}

/// Weighted binomial expansion for interchangeable components:
/// `Σ C(n, i) · p^i · (1 - p)^(n - i)` over the enumerated sizes.
fn identical_step(curve: &SharedCurve<'_>, table: &[u64], duality: Duality, t: usize) -> f64 {
    let n = i32::from(curve.count());
    let p = duality.oriented(curve.reliability(t));
    let q = 1.0 - p;
    let mut sum = 0.0;
    for (offset, &coefficient) in table.iter().enumerate() {
        let i = i32::from(duality.order) + offset as i32;
        sum += coefficient as f64 * p.powi(i) * q.powi(n - i);
    }
    duality.resolve(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duality_prefers_the_smaller_side() {
        // 2-of-5 needs 4 failures to break; enumerate failures instead.
        assert_eq!(
            Duality::normalize(5, 2),
            Duality {
                order: 4,
                inverted: true
            }
        );
        // 4-of-5 already enumerates the smaller side.
        assert_eq!(
            Duality::normalize(5, 4),
            Duality {
                order: 4,
                inverted: false
            }
        );
        // Balanced case stays on the success side.
        assert_eq!(
            Duality::normalize(7, 4),
            Duality {
                order: 4,
                inverted: false
            }
        );
    }

    #[test]
    fn duality_order_is_max_of_both_sides() {
        for n in 3..=12u8 {
            for k in 2..n {
                let duality = Duality::normalize(n, k);
                assert_eq!(duality.order, k.max(n - k + 1));
            }
        }
    }

    #[test]
    fn enumeration_respects_the_budget() {
        // C(6,2..=6) totals 57 subsets.
        assert!(enumeration_sets(6, 2, 36).is_none());
        let sets = enumeration_sets(6, 2, 57).unwrap();
        let total: usize = sets.iter().map(|s| s.count()).sum();
        assert_eq!(total, 57);
        assert_eq!(sets.len(), 5);
    }

    #[test]
    fn enumeration_unavailable_on_overflow() {
        assert!(enumeration_sets(200, 90, u64::MAX).is_none());
    }

    #[test]
    fn at_least_base_cases() {
        let half = |_: usize| 0.5;
        assert_eq!(at_least(&half, 4, 0), 1.0);
        assert_eq!(at_least(&half, 4, 5), 0.0);
    }

    #[test]
    fn at_least_fair_coins() {
        // P(at least 2 of 3 heads) with fair coins = 1/2.
        let half = |_: usize| 0.5;
        assert!((at_least(&half, 3, 2) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn identical_step_matches_direct_expansion() {
        let curve = [0.8];
        let shared = SharedCurve::new(&curve, 4).unwrap();
        let duality = Duality::normalize(4, 3);
        assert_eq!(duality.order, 3);
        assert!(!duality.inverted);
        let table = binomial_table(4, 3).unwrap();
        let p: f64 = 0.8;
        let expected = 4.0 * p.powi(3) * 0.2 + p.powi(4);
        assert!((identical_step(&shared, &table, duality, 0) - expected).abs() < 1e-12);
    }
}
