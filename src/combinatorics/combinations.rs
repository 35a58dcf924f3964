//! Lexicographic k-subset enumeration into a single flat buffer.

use super::binomial;

/// All k-subsets of `{0, .., n-1}` in lexicographic order, stored
/// contiguously.
///
/// A subset is `k` bytes of strictly increasing component indices; the whole
/// set is one `count * k` byte allocation rather than `count` separate ones.
/// Sets are built once per (n, k) pair and shared read-only by every
/// evaluation worker for the duration of a call.
#[derive(Debug, Clone)]
pub struct CombinationSet {
    k: usize,
    count: usize,
    flat: Vec<u8>,
}

impl CombinationSet {
    /// Enumerate all k-subsets of an n-element index set.
    ///
    /// Returns `None` when `k > n`, when the subset count overflows `u64`,
    /// or when the flat buffer cannot be sized or allocated. Callers treat
    /// `None` as "enumeration unavailable" and fall back to the recursive
    /// strategy.
    pub fn generate(n: u8, k: u8) -> Option<Self> {
        if k > n {
            return None;
        }
        let count = usize::try_from(binomial(n, k)?).ok()?;
        let k = usize::from(k);
        let bytes = count.checked_mul(k)?;

        let mut flat = Vec::new();
        flat.try_reserve_exact(bytes).ok()?;

        let mut current: Vec<u8> = (0..k as u8).collect();
        for _ in 0..count {
            flat.extend_from_slice(&current);
            if !advance(&mut current, n) {
                break;
            }
        }
        debug_assert_eq!(flat.len(), bytes);

        Some(Self { k, count, flat })
    }

    /// Number of subsets in the set.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Subset size.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Iterate over subsets as `k`-byte slices, in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.count).map(move |i| &self.flat[i * self.k..(i + 1) * self.k])
    }
}

/// Step `current` to the next lexicographic k-subset of `{0, .., n-1}`.
///
/// Position `i` may hold at most `n - k + i`. The walk starts at the last
/// position, moves left to the rightmost index still below its ceiling,
/// increments it, and rebuilds the tail as consecutive values. Returns
/// `false` once `current` is the final subset `{n-k, .., n-1}`.
fn advance(current: &mut [u8], n: u8) -> bool {
    let k = current.len();
    let mut i = k;
    while i > 0 {
        i -= 1;
        if current[i] < n - (k - i) as u8 {
            current[i] += 1;
            for j in i + 1..k {
                current[j] = current[j - 1] + 1;
            }
            return true;
        }
    }
    false
}
