//! Closed integer intervals.
//!
//! A [`Segment`] is the storage unit of an [`IntegralSet`](crate::IntegralSet):
//! the set keeps a sorted vector of them in canonical form.

use std::fmt;

use crate::integral::Integral;

/// A closed interval `[lo, hi]` with `lo <= hi`.
///
/// Both bounds are inclusive, so a segment always contains at least one
/// value. `Segment::point(v)` is the singleton `[v, v]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segment<T> {
    /// Smallest value in the segment.
    pub lo: T,
    /// Largest value in the segment.
    pub hi: T,
}

impl<T: Integral> Segment<T> {
    /// Create the segment `[lo, hi]`.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi`.
    pub fn new(lo: T, hi: T) -> Self {
        assert!(lo <= hi, "segment bounds out of order: {lo}..{hi}");
        Self { lo, hi }
    }

    /// The singleton segment `[v, v]`.
    pub fn point(v: T) -> Self {
        Self { lo: v, hi: v }
    }

    /// Number of values in the segment.
    pub fn width(&self) -> u128 {
        T::span(self.lo, self.hi)
    }

    /// True if `v` lies within `[lo, hi]`.
    pub fn contains(&self, v: T) -> bool {
        self.lo <= v && v <= self.hi
    }

    /// The `offset`-th value of the segment (0 = `lo`).
    ///
    /// Callers guarantee `offset < self.width()`.
    pub(crate) fn at(&self, offset: u128) -> T {
        debug_assert!(offset < self.width());
        self.lo.advance(offset)
    }

    /// True if the two segments overlap or sit next to each other, so
    /// that their union is a single segment. `self` must not start after
    /// `other`.
    pub(crate) fn touches(&self, other: &Self) -> bool {
        debug_assert!(self.lo <= other.lo);
        self.hi.reaches(other.lo)
    }
}

impl<T: Integral> From<(T, T)> for Segment<T> {
    /// # Panics
    ///
    /// Panics if the pair is out of order.
    fn from((lo, hi): (T, T)) -> Self {
        Self::new(lo, hi)
    }
}

impl<T: Integral> fmt::Display for Segment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.lo, self.hi)
    }
}
