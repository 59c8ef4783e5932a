//! One-dimensional closed integer intervals.

use crate::error::{Error, Result};
use std::{
    cmp::{max, min},
    fmt,
    iter::FusedIterator,
};

/// Closed interval of integers.
///
/// It includes both its end points, so `[3..3]` contains exactly one value.
///
/// To construct an `Interval1D`, use [`Interval1D::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval1D {
    /// Smallest integer in the interval.
    lo: i32,
    /// Largest integer in the interval.
    hi: i32,
}
impl Interval1D {
    /// Creates an interval from its two end points.
    ///
    /// # Parameters
    ///
    /// - `lo`: The smallest integer contained by the interval.
    /// - `hi`: The largest integer contained by the interval.
    ///
    /// # Returns
    ///
    /// - `Ok(interval)` if `lo <= hi`.
    /// - `Err(Error::InvalidBounds)` otherwise.
    pub fn new(lo: i32, hi: i32) -> Result<Interval1D> {
        if lo <= hi {
            Ok(Interval1D { lo, hi })
        } else {
            Err(Error::InvalidBounds { lo, hi })
        }
    }

    /// Creates a singleton interval which contains just one value.
    pub fn singleton(value: i32) -> Interval1D {
        Interval1D {
            lo: value,
            hi: value,
        }
    }

    /// Returns the smallest integer of the interval.
    pub fn lo(&self) -> i32 {
        self.lo
    }

    /// Returns the largest integer of the interval.
    pub fn hi(&self) -> i32 {
        self.hi
    }

    /// Returns the number of integers in the interval.
    pub fn size(&self) -> u64 {
        (i64::from(self.hi) - i64::from(self.lo) + 1) as u64
    }

    /// Tests if a value is contained by this interval.
    pub fn contains(&self, value: i32) -> bool {
        value >= self.lo && value <= self.hi
    }

    /// Returns the interval of values shared by two intervals, if any.
    pub fn intersection(&self, other: &Interval1D) -> Option<Interval1D> {
        let lo = max(self.lo, other.lo);
        let hi = min(self.hi, other.hi);
        (lo <= hi).then_some(Interval1D { lo, hi })
    }

    /// Returns the number of integers shared by two intervals.
    ///
    /// Disjoint intervals share nothing, and the result is `0`.
    pub fn size_of_intersection_with(&self, other: &Interval1D) -> u64 {
        self.intersection(other).map_or(0, |i| i.size())
    }

    /// Returns the smallest interval covering both intervals.
    ///
    /// The intervals do not have to overlap or touch. Any gap between them is
    /// covered as well.
    pub fn bounding_union(&self, other: &Interval1D) -> Interval1D {
        Interval1D {
            lo: min(self.lo, other.lo),
            hi: max(self.hi, other.hi),
        }
    }

    /// Tests if two intervals overlap or are adjacent.
    ///
    /// This holds exactly when the bounding union adds no value that is
    /// outside both intervals.
    pub fn is_unionable_with(&self, other: &Interval1D) -> bool {
        self.size() + other.size() - self.size_of_intersection_with(other)
            == self.bounding_union(other).size()
    }

    /// Returns the union of two intervals.
    ///
    /// # Returns
    ///
    /// - `Ok(interval)` if the intervals are unionable (see
    ///   [`Interval1D::is_unionable_with`]).
    /// - `Err(Error::NotUnionable)` if the union is not an interval.
    pub fn union(&self, other: &Interval1D) -> Result<Interval1D> {
        if self.is_unionable_with(other) {
            Ok(self.bounding_union(other))
        } else {
            Err(Error::NotUnionable {
                a: self.to_string(),
                b: other.to_string(),
            })
        }
    }

    /// Iterates over the integers of the interval in increasing order.
    pub fn iter(&self) -> Interval1DIter {
        Interval1DIter {
            front: i64::from(self.lo),
            back: i64::from(self.hi) + 1,
        }
    }
}

impl fmt::Display for Interval1D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.lo, self.hi)
    }
}

impl IntoIterator for &Interval1D {
    type Item = i32;
    type IntoIter = Interval1DIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the integers contained by an [`Interval1D`].
#[derive(Debug, Clone)]
pub struct Interval1DIter {
    /// Next value produced from the front.
    front: i64,
    /// One past the next value produced from the back.
    back: i64,
}

impl Iterator for Interval1DIter {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.front < self.back {
            let value = self.front as i32;
            self.front += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Interval1DIter {
    fn next_back(&mut self) -> Option<i32> {
        if self.front < self.back {
            self.back -= 1;
            Some(self.back as i32)
        } else {
            None
        }
    }
}

impl ExactSizeIterator for Interval1DIter {
    fn len(&self) -> usize {
        (self.back - self.front).max(0) as usize
    }
}

impl FusedIterator for Interval1DIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    fn iv(lo: i32, hi: i32) -> Interval1D {
        Interval1D::new(lo, hi).unwrap()
    }

    fn hash_of(interval: &Interval1D) -> u64 {
        let mut hasher = DefaultHasher::new();
        interval.hash(&mut hasher);
        hasher.finish()
    }

    /// Generates a valid interval with bounds in a small range, so that
    /// generated pairs overlap, touch, and stay apart with similar odds.
    fn interval_gen() -> impl Strategy<Value = Interval1D> {
        (-50i32..50, 0i32..20).prop_map(|(lo, len)| iv(lo, lo + len))
    }

    #[test]
    fn test_inverted_bounds_are_rejected() {
        assert_eq!(
            Interval1D::new(3, 2),
            Err(Error::InvalidBounds { lo: 3, hi: 2 })
        );
    }

    #[test]
    fn test_singleton_has_size_one() {
        let s = Interval1D::singleton(7);
        assert_eq!(s, iv(7, 7));
        assert_eq!(s.size(), 1);
        assert!(s.contains(7));
        assert!(!s.contains(6));
        assert!(!s.contains(8));
    }

    #[test]
    fn test_contains_includes_both_end_points() {
        let i = iv(-2, 3);
        assert!(i.contains(-2));
        assert!(i.contains(0));
        assert!(i.contains(3));
        assert!(!i.contains(-3));
        assert!(!i.contains(4));
    }

    #[test]
    fn test_size_of_full_range_does_not_overflow() {
        let full = iv(i32::MIN, i32::MAX);
        assert_eq!(full.size(), 1u64 << 32);
    }

    #[test]
    fn test_intersection_examples() {
        assert_eq!(iv(0, 5).intersection(&iv(3, 9)), Some(iv(3, 5)));
        assert_eq!(iv(0, 5).size_of_intersection_with(&iv(3, 9)), 3);
        assert_eq!(iv(0, 5).size_of_intersection_with(&iv(5, 9)), 1);
        assert_eq!(iv(0, 5).intersection(&iv(6, 9)), None);
        assert_eq!(iv(0, 5).size_of_intersection_with(&iv(6, 9)), 0);
    }

    #[test]
    fn test_bounding_union_covers_gap() {
        assert_eq!(iv(0, 1).bounding_union(&iv(5, 6)), iv(0, 6));
        assert_eq!(iv(5, 6).bounding_union(&iv(0, 1)), iv(0, 6));
    }

    #[test]
    fn test_unionable_when_adjacent_or_overlapping() {
        assert!(iv(0, 1).is_unionable_with(&iv(2, 3)));
        assert!(iv(0, 4).is_unionable_with(&iv(2, 3)));
        assert!(!iv(0, 1).is_unionable_with(&iv(3, 4)));
    }

    #[test]
    fn test_checked_union() {
        assert_eq!(iv(0, 1).union(&iv(2, 3)), Ok(iv(0, 3)));
        assert_eq!(
            iv(0, 1).union(&iv(3, 4)),
            Err(Error::NotUnionable {
                a: "[0..1]".to_string(),
                b: "[3..4]".to_string(),
            })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(iv(-4, 12).to_string(), "[-4..12]");
    }

    #[test]
    fn test_equal_intervals_hash_equally() {
        assert_eq!(iv(1, 4), iv(1, 4));
        assert_eq!(hash_of(&iv(1, 4)), hash_of(&iv(1, 4)));
        assert_ne!(iv(1, 4), iv(1, 5));
    }

    #[test]
    fn test_iter_both_directions() {
        let i = iv(-1, 2);
        assert_eq!(i.iter().collect::<Vec<_>>(), vec![-1, 0, 1, 2]);
        assert_eq!(i.iter().rev().collect::<Vec<_>>(), vec![2, 1, 0, -1]);
        assert_eq!(i.iter().len(), 4);

        let mut it = i.iter();
        assert_eq!(it.next(), Some(-1));
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.len(), 2);
    }

    #[test]
    fn test_iter_at_upper_limit() {
        let top = iv(i32::MAX - 1, i32::MAX);
        assert_eq!(top.iter().collect::<Vec<_>>(), vec![i32::MAX - 1, i32::MAX]);
    }

    proptest! {
        /// The intersection size never exceeds either operand, and is zero
        /// exactly when no integer is shared.
        #[test]
        fn test_intersection_size_is_bounded(a in interval_gen(), b in interval_gen()) {
            let n = a.size_of_intersection_with(&b);
            prop_assert!(n <= a.size() && n <= b.size());
            let shared = a.iter().filter(|v| b.contains(*v)).count() as u64;
            prop_assert_eq!(n, shared);
        }

        /// The bounding union is at least as large as each operand.
        #[test]
        fn test_bounding_union_is_large_enough(a in interval_gen(), b in interval_gen()) {
            let u = a.bounding_union(&b);
            prop_assert!(u.size() >= a.size());
            prop_assert!(u.size() >= b.size());
            prop_assert!(u.contains(a.lo()) && u.contains(a.hi()));
            prop_assert!(u.contains(b.lo()) && u.contains(b.hi()));
        }

        /// Unionable means overlapping or touching.
        #[test]
        fn test_unionable_matches_adjacency(a in interval_gen(), b in interval_gen()) {
            let touching = i64::from(max(a.lo(), b.lo())) <= i64::from(min(a.hi(), b.hi())) + 1;
            prop_assert_eq!(a.is_unionable_with(&b), touching);
            prop_assert_eq!(a.is_unionable_with(&b), b.is_unionable_with(&a));
        }
    }
}
