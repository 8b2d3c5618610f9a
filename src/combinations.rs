//! Lexicographic enumeration of k-subsets.
//!
//! [`Combinations`] walks every k-subset of a sorted universe in the
//! canonical lexicographic order, keeping only an O(k) index vector between
//! steps. The pool size can be huge (C(49, 6) is already close to 14
//! million), so no intermediate partial combinations are retained.
//!
//! [`binomial`] computes the exact closed-form count C(n, k) as a `BigUint`;
//! the generator checks its output length against it before returning a pool.

use num_bigint::BigUint;

use crate::types::Combination;

/// Iterator over all k-subsets of `universe` in lexicographic order.
///
/// `universe` must be sorted ascending with distinct elements; the wheel
/// guarantees this for its own universe.
///
/// # Examples
///
/// ```
/// use wheel_rs::combinations::Combinations;
///
/// let universe = [1, 2, 3, 4];
/// let pool: Vec<_> = Combinations::new(&universe, 2).collect();
/// assert_eq!(pool.len(), 6);
/// assert_eq!(pool[0].numbers(), &[1, 2]);
/// assert_eq!(pool[5].numbers(), &[3, 4]);
/// ```
pub struct Combinations<'a> {
    universe: &'a [u32],
    /// Current positions into `universe`, strictly increasing.
    indices: Vec<usize>,
    done: bool,
}

impl<'a> Combinations<'a> {
    pub fn new(universe: &'a [u32], k: usize) -> Self {
        Self {
            universe,
            indices: (0..k).collect(),
            done: k > universe.len(),
        }
    }

    fn current(&self) -> Combination {
        let numbers = self.indices.iter().map(|&i| self.universe[i]).collect();
        Combination::from_sorted(numbers)
    }

    /// Advances the index odometer to the next k-subset.
    ///
    /// Finds the rightmost index that can still move, bumps it, and resets
    /// every index to its right to the immediately following positions.
    fn advance(&mut self) {
        let k = self.indices.len();
        let n = self.universe.len();
        for pos in (0..k).rev() {
            if self.indices[pos] < n - (k - pos) {
                self.indices[pos] += 1;
                for i in (pos + 1)..k {
                    self.indices[i] = self.indices[i - 1] + 1;
                }
                return;
            }
        }
        self.done = true;
    }
}

impl Iterator for Combinations<'_> {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        if self.done {
            return None;
        }
        let combo = self.current();
        if self.indices.is_empty() {
            // The single empty 0-subset.
            self.done = true;
        } else {
            self.advance();
        }
        Some(combo)
    }
}

/// Exact binomial coefficient C(n, k).
///
/// Computed incrementally as `C(n, k) = prod_{i=0..k} (n - i) / (i + 1)`;
/// every intermediate division is exact.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use wheel_rs::combinations::binomial;
///
/// assert_eq!(binomial(8, 6), BigUint::from(28u32));
/// assert_eq!(binomial(49, 6), BigUint::from(13_983_816u32));
/// ```
pub fn binomial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::ZERO;
    }
    let k = k.min(n - k);
    let mut result = BigUint::from(1u32);
    for i in 0..k {
        result = result * BigUint::from(n - i) / BigUint::from(i + 1);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial_small() {
        assert_eq!(binomial(0, 0), BigUint::from(1u32));
        assert_eq!(binomial(4, 2), BigUint::from(6u32));
        assert_eq!(binomial(8, 6), BigUint::from(28u32));
        assert_eq!(binomial(15, 6), BigUint::from(5005u32));
        assert_eq!(binomial(6, 7), BigUint::ZERO);
    }

    #[test]
    fn test_binomial_lottery() {
        assert_eq!(binomial(49, 6), BigUint::from(13_983_816u32));
    }

    #[test]
    fn test_enumeration_order() {
        let universe = [1, 2, 3, 4, 5];
        let pool: Vec<_> = Combinations::new(&universe, 3).collect();
        assert_eq!(pool.len(), 10);
        assert_eq!(pool[0].numbers(), &[1, 2, 3]);
        assert_eq!(pool[1].numbers(), &[1, 2, 4]);
        assert_eq!(pool[2].numbers(), &[1, 2, 5]);
        assert_eq!(pool[3].numbers(), &[1, 3, 4]);
        assert_eq!(pool[9].numbers(), &[3, 4, 5]);
        // Lexicographic and duplicate-free.
        assert!(pool.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_full_and_empty_subsets() {
        let universe = [7, 8, 9];
        let pool: Vec<_> = Combinations::new(&universe, 3).collect();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].numbers(), &[7, 8, 9]);

        let pool: Vec<_> = Combinations::new(&universe, 0).collect();
        assert_eq!(pool.len(), 1);
        assert!(pool[0].is_empty());

        let pool: Vec<_> = Combinations::new(&universe, 4).collect();
        assert!(pool.is_empty());
    }

    #[test]
    fn test_count_matches_binomial() {
        let universe: Vec<u32> = (1..=10).collect();
        for k in 0..=10 {
            let count = Combinations::new(&universe, k).count();
            assert_eq!(BigUint::from(count), binomial(10, k), "k = {}", k);
        }
    }
}
