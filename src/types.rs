//! The canonical combination type and hit counting.
//!
//! A [`Combination`] is an unordered k-subset of the universe, stored in
//! ascending order so that set equality coincides with representation
//! equality and hashing is stable.

use std::fmt;

/// A k-subset of the universe in canonical ascending order.
///
/// Two combinations compare equal iff their underlying integer sets are
/// equal. Immutable once produced.
///
/// # Invariants
///
/// - Elements are strictly increasing (sorted, no duplicates)
/// - The length is fixed by the wheel configuration at generation time
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Combination(Box<[u32]>);

impl Combination {
    /// Creates a combination from the given numbers, sorting them into
    /// canonical order.
    ///
    /// # Panics
    ///
    /// Panics if the numbers are not distinct.
    pub fn new(numbers: impl Into<Vec<u32>>) -> Self {
        let mut numbers = numbers.into();
        numbers.sort_unstable();
        assert!(
            numbers.windows(2).all(|w| w[0] < w[1]),
            "Combination elements must be distinct"
        );
        Combination(numbers.into_boxed_slice())
    }

    /// Creates a combination from numbers already in strictly ascending order.
    pub(crate) fn from_sorted(numbers: Vec<u32>) -> Self {
        debug_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        Combination(numbers.into_boxed_slice())
    }

    /// The numbers in ascending order.
    pub fn numbers(&self) -> &[u32] {
        &self.0
    }

    /// Number of elements (the `k` of this k-subset).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the hit count: the size of the intersection with `other`.
    ///
    /// Both combinations are sorted, so a single merge pass suffices.
    /// The operation is symmetric, and `a.hits(&a)` equals `a.len()`.
    pub fn hits(&self, other: &Combination) -> u32 {
        let (a, b) = (&self.0, &other.0);
        let mut count = 0;
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    count += 1;
                    i += 1;
                    j += 1;
                }
            }
        }
        count
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", n)?;
        }
        write!(f, ")")
    }
}

impl From<Combination> for Vec<u32> {
    fn from(combo: Combination) -> Self {
        combo.0.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let c = Combination::new(vec![9, 3, 7, 1]);
        assert_eq!(c.numbers(), &[1, 3, 7, 9]);
        assert_eq!(c, Combination::new(vec![1, 7, 3, 9]));
    }

    #[test]
    #[should_panic(expected = "distinct")]
    fn test_duplicates_rejected() {
        let _ = Combination::new(vec![1, 2, 2, 3]);
    }

    #[test]
    fn test_hits_symmetric() {
        let a = Combination::new(vec![1, 2, 3, 4, 5, 6]);
        let b = Combination::new(vec![4, 5, 6, 7, 8, 9]);
        assert_eq!(a.hits(&b), 3);
        assert_eq!(b.hits(&a), 3);
    }

    #[test]
    fn test_hits_self_is_len() {
        let a = Combination::new(vec![2, 4, 8, 16, 32, 64]);
        assert_eq!(a.hits(&a), 6);
    }

    #[test]
    fn test_hits_disjoint() {
        let a = Combination::new(vec![1, 2, 3]);
        let b = Combination::new(vec![4, 5, 6]);
        assert_eq!(a.hits(&b), 0);
    }

    #[test]
    fn test_display() {
        let c = Combination::new(vec![3, 1, 2]);
        assert_eq!(c.to_string(), "(1, 2, 3)");
    }
}
