//! Range-compressed sets of integers.
//!
//! An [`IntegralSet`] stores an arbitrary set of integers as a sorted vector
//! of closed [`Segment`]s in *canonical form*:
//!
//! ```text
//! {1, 2, 4, 5, 6, 9}  →  [1..2] [4..6] [9..9]
//! ```
//!
//! - segments are sorted by `lo`,
//! - no two segments overlap,
//! - no two consecutive segments are adjacent (`a.hi + 1 < b.lo`).
//!
//! Canonical form is unique per set, so equality is plain structural
//! equality of the segment vectors. Every mutating operation restores it
//! before returning.
//!
//! Besides the usual membership and set algebra, the set supports
//! *positional* extraction: [`IntegralSet::take`] removes the elements of
//! rank `from..from + n` regardless of which segments they live in. The
//! actor table uses [`IntegralSet::take_head`] and
//! [`IntegralSet::take_head_n`] on its free-list to issue the smallest
//! unused identifiers first.

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use crate::error::SetError;
use crate::integral::Integral;
use crate::segment::Segment;

/// A set of integers stored as canonical, sorted, non-adjacent segments.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IntegralSet<T> {
    segments: Vec<Segment<T>>,
}

impl<T> Default for IntegralSet<T> {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
        }
    }
}

impl<T: Integral> IntegralSet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The set of every value in `[lo, hi]`.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi`.
    pub fn range(lo: T, hi: T) -> Self {
        Self {
            segments: vec![Segment::new(lo, hi)],
        }
    }

    /// The set of every representable value of `T`.
    pub fn full() -> Self {
        Self::range(T::MIN, T::MAX)
    }

    /// Build a set from segments given in any order.
    ///
    /// Overlapping, adjacent, duplicate and unsorted input is normalized.
    ///
    /// # Panics
    ///
    /// Panics if a `(lo, hi)` pair has `lo > hi`.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Segment<T>>,
    {
        Self {
            segments: canonicalize(segments.into_iter().map(Into::into).collect()),
        }
    }

    /// Build a set from individual values given in any order, with
    /// duplicates allowed.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self {
            segments: canonicalize(values.into_iter().map(Segment::point).collect()),
        }
    }

    fn from_canonical(segments: Vec<Segment<T>>) -> Self {
        debug_assert!(
            is_canonical(&segments),
            "segments not canonical: {segments:?}"
        );
        Self { segments }
    }

    /// The canonical segments, ascending.
    pub fn segments(&self) -> &[Segment<T>] {
        &self.segments
    }

    /// Number of canonical segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// True if the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of elements in the set.
    pub fn size(&self) -> u128 {
        self.segments.iter().map(Segment::width).sum()
    }

    /// Smallest element, if any.
    pub fn first(&self) -> Option<T> {
        self.segments.first().map(|s| s.lo)
    }

    /// Largest element, if any.
    pub fn last(&self) -> Option<T> {
        self.segments.last().map(|s| s.hi)
    }

    /// True if `v` is an element of the set.
    pub fn contains(&self, v: T) -> bool {
        let idx = self.segments.partition_point(|s| s.hi < v);
        self.segments.get(idx).is_some_and(|s| s.contains(v))
    }

    /// The `idx`-th smallest element (0-based).
    pub fn nth(&self, idx: u128) -> Result<T, SetError> {
        match self.locate(idx) {
            Some((seg, offset)) => Ok(self.segments[seg].at(offset)),
            None => Err(SetError::IndexOutOfRange {
                index: idx,
                size: self.size(),
            }),
        }
    }

    /// Ascending iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            segments: self.segments.iter(),
            current: None,
        }
    }

    /// Add one value.
    pub fn insert(&mut self, v: T) {
        // First segment ending at or after `v`.
        let idx = self.segments.partition_point(|s| s.hi < v);
        let joins_next = idx < self.segments.len() && v.reaches(self.segments[idx].lo);
        let joins_prev = idx > 0 && self.segments[idx - 1].hi.reaches(v);

        match (joins_prev, joins_next) {
            (true, true) => {
                self.segments[idx - 1].hi = self.segments[idx].hi;
                self.segments.remove(idx);
            }
            (false, true) => {
                let seg = &mut self.segments[idx];
                seg.lo = seg.lo.min(v);
            }
            (true, false) => self.segments[idx - 1].hi = v,
            (false, false) => self.segments.insert(idx, Segment::point(v)),
        }
    }

    /// Union `other` into `self` in place.
    ///
    /// Walks `other`'s segments in order, resuming each search where the
    /// previous segment landed, so merging a sorted batch costs one pass
    /// over `self` rather than one full search per segment.
    pub fn merge(&mut self, other: &IntegralSet<T>) {
        let mut cursor = 0;
        for seg in &other.segments {
            cursor = self.merge_segment(*seg, cursor);
        }
    }

    /// Merge one segment, searching from index `from`. Returns the index of
    /// the segment now containing `seg`.
    fn merge_segment(&mut self, seg: Segment<T>, from: usize) -> usize {
        let begin = from + self.segments[from..].partition_point(|s| !s.hi.reaches(seg.lo));
        let end = begin + self.segments[begin..].partition_point(|s| seg.hi.reaches(s.lo));

        if begin == end {
            self.segments.insert(begin, seg);
            return begin;
        }

        let lo = self.segments[begin].lo.min(seg.lo);
        let hi = self.segments[end - 1].hi.max(seg.hi);
        self.segments[begin] = Segment { lo, hi };
        self.segments.drain(begin + 1..end);
        begin
    }

    /// The union of `self` and `other`.
    ///
    /// When both sides have a segment starting at the same value, the one
    /// from `self` is consumed first.
    pub fn unite(&self, other: &IntegralSet<T>) -> IntegralSet<T> {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }

        let mut out: Vec<Segment<T>> =
            Vec::with_capacity(self.segments.len() + other.segments.len());
        for seg in ByStart::new(&self.segments, &other.segments) {
            match out.last_mut() {
                Some(last) if last.touches(&seg) => last.hi = last.hi.max(seg.hi),
                _ => out.push(seg),
            }
        }
        Self::from_canonical(out)
    }

    /// The intersection of `self` and `other`.
    pub fn intersect(&self, other: &IntegralSet<T>) -> IntegralSet<T> {
        if self.is_empty() || other.is_empty() {
            return Self::new();
        }

        // `candidate` is the input segment reaching furthest right so far.
        // Anything starting inside it overlaps it.
        let mut out = Vec::new();
        let mut candidate: Option<Segment<T>> = None;
        for seg in ByStart::new(&self.segments, &other.segments) {
            match candidate.as_mut() {
                Some(cand) => {
                    if seg.lo <= cand.hi {
                        out.push(Segment {
                            lo: seg.lo,
                            hi: seg.hi.min(cand.hi),
                        });
                    }
                    if seg.hi > cand.hi {
                        *cand = seg;
                    }
                }
                None => candidate = Some(seg),
            }
        }
        Self::from_canonical(out)
    }

    /// True if every element of `self` is in `other`.
    pub fn is_subset(&self, other: &IntegralSet<T>) -> bool {
        self.segments.iter().all(|seg| {
            let idx = other.segments.partition_point(|s| s.hi < seg.lo);
            other
                .segments
                .get(idx)
                .is_some_and(|s| s.lo <= seg.lo && seg.hi <= s.hi)
        })
    }

    /// True if `self` and `other` share no element.
    pub fn is_disjoint(&self, other: &IntegralSet<T>) -> bool {
        let mut reach: Option<T> = None;
        for seg in ByStart::new(&self.segments, &other.segments) {
            if reach.is_some_and(|r| seg.lo <= r) {
                return false;
            }
            reach = Some(reach.map_or(seg.hi, |r| r.max(seg.hi)));
        }
        true
    }

    /// Remove and return the smallest element.
    pub fn take_head(&mut self) -> Result<T, SetError> {
        let head = self.segments.first_mut().ok_or(SetError::Empty)?;
        let v = head.lo;
        if head.lo == head.hi {
            self.segments.remove(0);
        } else {
            head.lo = v.advance(1);
        }
        Ok(v)
    }

    /// Remove and return the `n` smallest elements.
    ///
    /// Returns everything if `n >= size()`.
    pub fn take_head_n(&mut self, n: u128) -> IntegralSet<T> {
        self.take(0, n)
    }

    /// Remove and return the `n` elements of rank `from..from + n`
    /// (rank 0 is the smallest element).
    ///
    /// Ranks past the end are ignored: the result holds
    /// `min(n, size() - from)` elements, and is empty if `from >= size()`.
    pub fn take(&mut self, from: u128, n: u128) -> IntegralSet<T> {
        if n == 0 {
            return Self::new();
        }
        let Some((first_idx, first_off)) = self.locate(from) else {
            return Self::new();
        };
        let last_rank = from.saturating_add(n - 1);
        let (last_idx, last_off) = match self.locate(last_rank) {
            Some(pos) => pos,
            None => {
                let idx = self.segments.len() - 1;
                (idx, self.segments[idx].width() - 1)
            }
        };

        let head = self.segments[first_idx];
        let tail = self.segments[last_idx];
        let start = head.at(first_off);
        let end = tail.at(last_off);

        let mut taken = Vec::with_capacity(last_idx - first_idx + 1);
        if first_idx == last_idx {
            taken.push(Segment { lo: start, hi: end });
        } else {
            taken.push(Segment { lo: start, hi: head.hi });
            taken.extend_from_slice(&self.segments[first_idx + 1..last_idx]);
            taken.push(Segment { lo: tail.lo, hi: end });
        }

        // What survives of the boundary segments. A slice strictly inside
        // one segment leaves both pieces, growing the segment count by one.
        let left = start
            .predecessor()
            .filter(|_| start > head.lo)
            .map(|hi| Segment { lo: head.lo, hi });
        let right = end
            .successor()
            .filter(|_| end < tail.hi)
            .map(|lo| Segment { lo, hi: tail.hi });
        self.segments
            .splice(first_idx..=last_idx, left.into_iter().chain(right));

        debug_assert!(is_canonical(&self.segments));
        Self::from_canonical(taken)
    }

    /// Segment index and offset within it of the element of rank `rank`.
    fn locate(&self, mut rank: u128) -> Option<(usize, u128)> {
        for (idx, seg) in self.segments.iter().enumerate() {
            let width = seg.width();
            if rank < width {
                return Some((idx, rank));
            }
            rank -= width;
        }
        None
    }
}

/// True if `segments` is in canonical form: every segment well-formed,
/// sorted, and separated from its successor by at least one missing value.
pub fn is_canonical<T: Integral>(segments: &[Segment<T>]) -> bool {
    segments.iter().all(|s| s.lo <= s.hi)
        && segments.windows(2).all(|w| !w[0].hi.reaches(w[1].lo))
}

fn canonicalize<T: Integral>(mut segments: Vec<Segment<T>>) -> Vec<Segment<T>> {
    segments.sort_unstable();
    let mut out: Vec<Segment<T>> = Vec::with_capacity(segments.len());
    for seg in segments {
        match out.last_mut() {
            Some(last) if last.touches(&seg) => last.hi = last.hi.max(seg.hi),
            _ => out.push(seg),
        }
    }
    out
}

/// Two canonical segment slices merged by `lo`, left side first on ties.
struct ByStart<'a, T> {
    left: &'a [Segment<T>],
    right: &'a [Segment<T>],
}

impl<'a, T> ByStart<'a, T> {
    fn new(left: &'a [Segment<T>], right: &'a [Segment<T>]) -> Self {
        Self { left, right }
    }
}

impl<T: Integral> Iterator for ByStart<'_, T> {
    type Item = Segment<T>;

    fn next(&mut self) -> Option<Segment<T>> {
        let (left, right) = (self.left, self.right);
        match (left.split_first(), right.split_first()) {
            (Some((l, _)), Some((r, rest))) if r.lo < l.lo => {
                self.right = rest;
                Some(*r)
            }
            (Some((l, rest)), _) => {
                self.left = rest;
                Some(*l)
            }
            (None, Some((r, rest))) => {
                self.right = rest;
                Some(*r)
            }
            (None, None) => None,
        }
    }
}

/// Ascending iterator over the elements of an [`IntegralSet`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    segments: slice::Iter<'a, Segment<T>>,
    current: Option<Segment<T>>,
}

impl<T: Integral> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(seg) = self.current {
                self.current = (seg.lo < seg.hi).then(|| Segment {
                    lo: seg.lo.advance(1),
                    hi: seg.hi,
                });
                return Some(seg.lo);
            }
            self.current = Some(*self.segments.next()?);
        }
    }
}

impl<T: Integral> FusedIterator for Iter<'_, T> {}

impl<'a, T: Integral> IntoIterator for &'a IntegralSet<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: Integral> FromIterator<T> for IntegralSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T: Integral> FromIterator<Segment<T>> for IntegralSet<T> {
    fn from_iter<I: IntoIterator<Item = Segment<T>>>(iter: I) -> Self {
        Self::from_segments(iter)
    }
}

impl<T: Integral> Extend<T> for IntegralSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<T: Integral> fmt::Display for IntegralSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, seg) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{seg}")?;
        }
        f.write_str("}")
    }
}
