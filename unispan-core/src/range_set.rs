//! Canonical code point range storage
//!
//! `CodePointRangeSet` holds the single-code-point portion of a span set as
//! sorted, disjoint, non-adjacent inclusive ranges. The canonical form is
//! re-established after every mutation, so containment stays a plain binary
//! search. The stored values are code units in `[0, 0x10FFFF]`: the
//! surrogate block is representable on purpose, since legacy UTF-16
//! membership tests need it.

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::error::{Result, SetError};
use crate::utf16::MAX_CODE_POINT;

/// Sorted, disjoint, non-adjacent inclusive `(start, end)` ranges.
///
/// Invariant: for consecutive ranges `(s1, e1)` and `(s2, e2)`,
/// `e1 + 1 < s2` holds, and `s <= e` for every range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodePointRangeSet {
    ranges: SmallVec<[(u32, u32); 4]>,
}

impl CodePointRangeSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    fn check_range(start: u32, end: u32) -> Result<()> {
        if start > end || end > MAX_CODE_POINT {
            return Err(SetError::InvalidRange { start, end });
        }
        Ok(())
    }

    /// Binary-search containment test.
    pub fn contains(&self, cp: u32) -> bool {
        self.ranges
            .binary_search_by(|&(s, e)| {
                if cp < s {
                    Ordering::Greater
                } else if cp > e {
                    Ordering::Less
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
    }

    /// True if every code point in `[start, end]` is contained.
    pub fn contains_range(&self, start: u32, end: u32) -> bool {
        self.ranges
            .iter()
            .any(|&(s, e)| s <= start && end <= e)
    }

    /// Adds a single code point.
    pub fn add(&mut self, cp: u32) -> Result<()> {
        self.add_range(cp, cp)
    }

    /// Adds an inclusive range, merging with overlapping or adjacent ranges.
    pub fn add_range(&mut self, start: u32, end: u32) -> Result<()> {
        Self::check_range(start, end)?;
        self.add_range_unchecked(start, end);
        Ok(())
    }

    fn add_range_unchecked(&mut self, start: u32, end: u32) {
        // All ranges whose end touches `start` or later are merge candidates;
        // ends are <= MAX_CODE_POINT so `e + 1` cannot overflow.
        let first = self.ranges.partition_point(|&(_, e)| e + 1 < start);
        let mut lo = start;
        let mut hi = end;
        let mut last = first;
        while last < self.ranges.len() && self.ranges[last].0 <= end.saturating_add(1) {
            lo = lo.min(self.ranges[last].0);
            hi = hi.max(self.ranges[last].1);
            last += 1;
        }
        self.ranges.drain(first..last);
        self.ranges.insert(first, (lo, hi));
    }

    /// Removes an inclusive range, splitting partially covered ranges.
    pub fn remove_range(&mut self, start: u32, end: u32) -> Result<()> {
        Self::check_range(start, end)?;
        self.remove_range_unchecked(start, end);
        Ok(())
    }

    fn remove_range_unchecked(&mut self, start: u32, end: u32) {
        let mut out: SmallVec<[(u32, u32); 4]> = SmallVec::new();
        for &(s, e) in &self.ranges {
            if e < start || s > end {
                out.push((s, e));
                continue;
            }
            if s < start {
                out.push((s, start - 1));
            }
            if e > end {
                out.push((end + 1, e));
            }
        }
        self.ranges = out;
    }

    /// Keeps only code points inside `[start, end]`.
    pub fn retain_range(&mut self, start: u32, end: u32) -> Result<()> {
        Self::check_range(start, end)?;
        let mut out: SmallVec<[(u32, u32); 4]> = SmallVec::new();
        for &(s, e) in &self.ranges {
            let s2 = s.max(start);
            let e2 = e.min(end);
            if s2 <= e2 {
                out.push((s2, e2));
            }
        }
        self.ranges = out;
        Ok(())
    }

    /// Complements over the full `[0, 0x10FFFF]` domain.
    pub fn complement(&mut self) {
        let mut out: SmallVec<[(u32, u32); 4]> = SmallVec::new();
        let mut next = 0u32;
        for &(s, e) in &self.ranges {
            if s > next {
                out.push((next, s - 1));
            }
            next = e + 1;
        }
        if next <= MAX_CODE_POINT {
            out.push((next, MAX_CODE_POINT));
        }
        self.ranges = out;
    }

    /// Toggles membership of every code point in `[start, end]`.
    pub fn complement_range(&mut self, start: u32, end: u32) -> Result<()> {
        Self::check_range(start, end)?;
        let mut missing = self.clone();
        missing.complement();
        missing.retain_range(start, end)?;
        self.remove_range_unchecked(start, end);
        self.union_with(&missing);
        Ok(())
    }

    /// Adds every range of `other`.
    pub fn union_with(&mut self, other: &Self) {
        for &(s, e) in &other.ranges {
            self.add_range_unchecked(s, e);
        }
    }

    /// Keeps only code points also contained in `other`.
    pub fn intersect_with(&mut self, other: &Self) {
        let mut out: SmallVec<[(u32, u32); 4]> = SmallVec::new();
        let (mut i, mut j) = (0, 0);
        while i < self.ranges.len() && j < other.ranges.len() {
            let (s1, e1) = self.ranges[i];
            let (s2, e2) = other.ranges[j];
            let s = s1.max(s2);
            let e = e1.min(e2);
            if s <= e {
                out.push((s, e));
            }
            if e1 < e2 {
                i += 1;
            } else {
                j += 1;
            }
        }
        self.ranges = out;
    }

    /// Removes every code point contained in `other`.
    pub fn subtract(&mut self, other: &Self) {
        for &(s, e) in &other.ranges {
            self.remove_range_unchecked(s, e);
        }
    }

    /// Iterates the canonical ranges in ascending order.
    pub fn ranges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.ranges.iter().copied()
    }

    /// Iterates every contained code point in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.ranges.iter().flat_map(|&(s, e)| s..=e)
    }

    /// Number of contained code points.
    pub fn size(&self) -> u64 {
        self.ranges.iter().map(|&(s, e)| (e - s + 1) as u64).sum()
    }

    /// Number of canonical ranges.
    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
    }
}
