//! The [`Integral`] trait: fixed-width integers usable as set elements.
//!
//! [`IntegralSet`](crate::IntegralSet) is generic over element width. All
//! arithmetic it needs (successor/predecessor at the type bounds, segment
//! lengths, rank offsets) is routed through this trait so that sets of
//! `u8` and sets of `u64` share one implementation.
//!
//! Lengths and ranks are expressed as `u128`. Every supported type is at
//! most 64 bits wide, so the length of the full range (`2^64` for `u64`)
//! is always representable.

use std::fmt;
use std::hash::Hash;

/// A fixed-width integer type that can be stored in an
/// [`IntegralSet`](crate::IntegralSet).
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `usize`, `i8`, `i16`,
/// `i32`, `i64` and `isize`. 128-bit integers are not supported because
/// their full range would not have a representable length.
pub trait Integral: Copy + Ord + Hash + fmt::Debug + fmt::Display + 'static {
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;

    /// Widen to `i128` (lossless for every implementor).
    fn to_i128(self) -> i128;

    /// Narrow from `i128`.
    ///
    /// Callers guarantee `v` lies within `[MIN, MAX]`.
    fn from_i128(v: i128) -> Self;

    /// `self + 1`, or `None` at [`Integral::MAX`].
    #[inline]
    fn successor(self) -> Option<Self> {
        if self == Self::MAX {
            None
        } else {
            Some(Self::from_i128(self.to_i128() + 1))
        }
    }

    /// `self - 1`, or `None` at [`Integral::MIN`].
    #[inline]
    fn predecessor(self) -> Option<Self> {
        if self == Self::MIN {
            None
        } else {
            Some(Self::from_i128(self.to_i128() - 1))
        }
    }

    /// True if `self + 1 >= other`, i.e. a range ending at `self` touches or
    /// overlaps a range starting at `other`. Never overflows.
    #[inline]
    fn reaches(self, other: Self) -> bool {
        self.successor().is_none_or(|next| next >= other)
    }

    /// Number of values in the closed range `[lo, hi]`.
    ///
    /// Callers guarantee `lo <= hi`.
    #[inline]
    fn span(lo: Self, hi: Self) -> u128 {
        debug_assert!(lo <= hi);
        (hi.to_i128() - lo.to_i128()) as u128 + 1
    }

    /// `self + n`.
    ///
    /// Callers guarantee the result is representable.
    #[inline]
    fn advance(self, n: u128) -> Self {
        let v = self.to_i128() + n as i128;
        debug_assert!(v <= Self::MAX.to_i128(), "advance past {}", Self::MAX);
        Self::from_i128(v)
    }
}

macro_rules! impl_integral {
    ($($t:ty),* $(,)?) => {
        $(
            impl Integral for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn to_i128(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_i128(v: i128) -> Self {
                    v as $t
                }
            }
        )*
    };
}

impl_integral!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successor_saturates_at_max() {
        assert_eq!(7u8.successor(), Some(8));
        assert_eq!(u8::MAX.successor(), None);
        assert_eq!(i64::MAX.successor(), None);
    }

    #[test]
    fn predecessor_saturates_at_min() {
        assert_eq!(1u32.predecessor(), Some(0));
        assert_eq!(0u32.predecessor(), None);
        assert_eq!(i8::MIN.predecessor(), None);
        assert_eq!(0i8.predecessor(), Some(-1));
    }

    #[test]
    fn span_of_full_u64_range_is_exact() {
        assert_eq!(u64::span(0, u64::MAX), 1u128 << 64);
        assert_eq!(i64::span(i64::MIN, i64::MAX), 1u128 << 64);
        assert_eq!(u8::span(3, 3), 1);
    }

    #[test]
    fn reaches_handles_bounds() {
        assert!(u8::MAX.reaches(u8::MAX));
        assert!(4u8.reaches(5));
        assert!(!4u8.reaches(6));
        assert!(i32::MIN.reaches(i32::MIN));
    }

    #[test]
    fn advance_from_negative() {
        assert_eq!((-3i16).advance(5), 2);
        assert_eq!(u64::MAX.advance(0), u64::MAX);
    }
}
