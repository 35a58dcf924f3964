//! Overflow-checked binomial coefficients in 64-bit integer arithmetic.

/// Compute `C(n, k)` exactly.
///
/// The factors `n, n-1, ..` are multiplied into the result one at a time
/// while the divisor set `2..=k` is cancelled into it by GCD after every
/// multiplication. The interleaving keeps the intermediate product near the
/// final coefficient instead of near `n! / (n-k)!`, so coefficients close to
/// the `u64` ceiling still compute without overflowing.
///
/// Returns `None` when an intermediate product would overflow `u64`.
/// `k > n` yields `Some(0)`: no subsets of that size exist.
pub fn binomial(n: u8, k: u8) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    // C(n, k) = C(n, n-k); the smaller side does fewer multiplications.
    let k = u64::from(k.min(n - k));
    if k == 0 {
        return Some(1);
    }
    let n = u64::from(n);

    let mut divisors: Vec<u64> = (2..=k).collect();
    let mut partial: u64 = 1;

    for i in 0..k {
        let factor = n - i;
        if partial > u64::MAX / factor {
            return None;
        }
        partial *= factor;

        for divisor in divisors.iter_mut() {
            if *divisor > 1 {
                let common = gcd(partial, *divisor);
                if common > 1 {
                    partial /= common;
                    *divisor /= common;
                }
            }
        }
    }

    Some(partial)
}

/// Table of `C(n, i)` for `i` in `lo..=n`.
///
/// `None` if any entry overflows; an empty range yields an empty table.
pub fn binomial_table(n: u8, lo: u8) -> Option<Vec<u64>> {
    (lo..=n).map(|i| binomial(n, i)).collect()
}

/// Euclid's GCD.
fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}
