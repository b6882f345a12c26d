//! The span matching core
//!
//! Spanning scans a UTF-16 code-unit buffer against a [`UnicodeSpanSet`]
//! and returns the boundary where the run satisfying a [`SpanCondition`]
//! ends. Matches are found at code-point granularity: a single-code-point
//! match or a string-member match may never begin or end between a lead
//! surrogate and its trail.
//!
//! Forward calls consider `text[start..]` as the text to scan and backward
//! calls consider `text[..limit]`, mirroring how the matching is anchored.
//! The exhaustive `Contained` search runs over an explicit worklist of
//! candidate continuation positions instead of recursing, so its depth is
//! bounded by the text length.

use std::collections::BTreeSet;

use smallvec::SmallVec;
use unispan_core::utf16::{code_point_at, code_point_before, is_lead_surrogate, is_trail_surrogate};
use unispan_core::{Result, SetError, UnicodeSpanSet};

use crate::condition::SpanCondition;
use crate::offsets::OffsetQueue;

/// Spans `text` forward from `start`.
///
/// Returns the first index at which the run stops satisfying `condition`;
/// `text.len()` if it never does, `start` if it fails immediately. The
/// returned index always falls on a code-point boundary relative to
/// `start`.
pub fn span(
    set: &UnicodeSpanSet,
    text: &[u16],
    start: usize,
    condition: SpanCondition,
) -> Result<usize> {
    check_index(start, text.len())?;
    let tail = &text[start..];
    let rel = if !set.has_strings() {
        span_code_points(set, tail, condition.polarity())
    } else {
        match condition {
            SpanCondition::NotContained => span_not(set, tail),
            SpanCondition::Contained => span_contained(set, tail),
            SpanCondition::Simple => span_simple(set, tail),
        }
    };
    Ok(start + rel)
}

/// Spans `text` backward from `limit` (exclusive).
///
/// Returns the start index of the trailing run ending at `limit`; `0` if
/// the whole prefix satisfies `condition`, `limit` if nothing does.
/// Backward matches are anchored at the end, so for sets with
/// asymmetrically overlapping string members the boundaries may
/// legitimately differ from the forward ones.
pub fn span_back(
    set: &UnicodeSpanSet,
    text: &[u16],
    limit: usize,
    condition: SpanCondition,
) -> Result<usize> {
    check_index(limit, text.len())?;
    if limit == 0 {
        return Ok(0);
    }
    let head = &text[..limit];
    Ok(if !set.has_strings() {
        span_back_code_points(set, head, condition.polarity())
    } else {
        match condition {
            SpanCondition::NotContained => span_back_not(set, head),
            SpanCondition::Contained => span_back_contained(set, head),
            SpanCondition::Simple => span_back_simple(set, head),
        }
    })
}

/// Spans forward and counts the set elements making up the run.
///
/// A string element counts as one regardless of its code-unit length.
/// Under `NotContained` the count is the number of code points skipped;
/// under `Simple` the elements taken greedily; under `Contained` the
/// boundary equals [`span`]'s and the count is the smallest number of
/// elements on any covering path.
pub fn span_and_count(
    set: &UnicodeSpanSet,
    text: &[u16],
    start: usize,
    condition: SpanCondition,
) -> Result<(usize, usize)> {
    check_index(start, text.len())?;
    let tail = &text[start..];
    let (rel, count) = if !set.has_strings() {
        span_code_points_count(set, tail, condition.polarity())
    } else {
        match condition {
            SpanCondition::NotContained => span_not_count(set, tail),
            SpanCondition::Contained => span_contained_count(set, tail),
            SpanCondition::Simple => span_simple_count(set, tail),
        }
    };
    Ok((start + rel, count))
}

/// True if the whole text is coverable by set elements.
pub fn contains_all(set: &UnicodeSpanSet, text: &[u16]) -> bool {
    matches!(
        span(set, text, 0, SpanCondition::Contained),
        Ok(n) if n == text.len()
    )
}

/// True if no element of the set matches anywhere in the text.
pub fn contains_none(set: &UnicodeSpanSet, text: &[u16]) -> bool {
    matches!(
        span(set, text, 0, SpanCondition::NotContained),
        Ok(n) if n == text.len()
    )
}

/// Extension methods so callers can write `set.span(text, ...)`.
pub trait Spanning {
    fn span(&self, text: &[u16], start: usize, condition: SpanCondition) -> Result<usize>;
    fn span_back(&self, text: &[u16], limit: usize, condition: SpanCondition) -> Result<usize>;
    fn span_and_count(
        &self,
        text: &[u16],
        start: usize,
        condition: SpanCondition,
    ) -> Result<(usize, usize)>;
}

impl Spanning for UnicodeSpanSet {
    fn span(&self, text: &[u16], start: usize, condition: SpanCondition) -> Result<usize> {
        span(self, text, start, condition)
    }

    fn span_back(&self, text: &[u16], limit: usize, condition: SpanCondition) -> Result<usize> {
        span_back(self, text, limit, condition)
    }

    fn span_and_count(
        &self,
        text: &[u16],
        start: usize,
        condition: SpanCondition,
    ) -> Result<(usize, usize)> {
        span_and_count(self, text, start, condition)
    }
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index > len {
        return Err(SetError::InvalidIndex { index, len });
    }
    Ok(())
}

/// Whether the string member matches at `[start, start + member.len())`:
/// exact code-unit equality, and neither edge may split a surrogate pair.
fn matches_at(text: &[u16], start: usize, member: &[u16]) -> bool {
    let end = start + member.len();
    debug_assert!(end <= text.len());
    if text[start..end] != *member {
        return false;
    }
    if start > 0 && is_lead_surrogate(text[start - 1]) && is_trail_surrogate(text[start]) {
        return false;
    }
    if end < text.len() && is_lead_surrogate(text[end - 1]) && is_trail_surrogate(text[end]) {
        return false;
    }
    true
}

// ----------------------------------------------------------------------
// Code-point-only fast paths (Contained and Simple coincide)
// ----------------------------------------------------------------------

fn span_code_points(set: &UnicodeSpanSet, text: &[u16], contained: bool) -> usize {
    let mut pos = 0;
    while pos < text.len() {
        let (cp, n) = code_point_at(text, pos);
        if set.contains(cp) != contained {
            break;
        }
        pos += n;
    }
    pos
}

fn span_back_code_points(set: &UnicodeSpanSet, text: &[u16], contained: bool) -> usize {
    let mut pos = text.len();
    while pos > 0 {
        let (cp, n) = code_point_before(text, pos);
        if set.contains(cp) != contained {
            break;
        }
        pos -= n;
    }
    pos
}

fn span_code_points_count(set: &UnicodeSpanSet, text: &[u16], contained: bool) -> (usize, usize) {
    let mut pos = 0;
    let mut count = 0;
    while pos < text.len() {
        let (cp, n) = code_point_at(text, pos);
        if set.contains(cp) != contained {
            break;
        }
        pos += n;
        count += 1;
    }
    (pos, count)
}

// ----------------------------------------------------------------------
// NotContained
// ----------------------------------------------------------------------

fn span_not(set: &UnicodeSpanSet, text: &[u16]) -> usize {
    let len = text.len();
    let mut pos = 0;
    while pos < len {
        let (cp, n) = code_point_at(text, pos);
        if set.contains(cp) {
            return pos;
        }
        let rest = len - pos;
        if set
            .strings()
            .iter()
            .any(|m| m.len() <= rest && matches_at(text, pos, m))
        {
            return pos;
        }
        pos += n;
    }
    len
}

fn span_back_not(set: &UnicodeSpanSet, text: &[u16]) -> usize {
    let mut pos = text.len();
    while pos > 0 {
        let (cp, n) = code_point_before(text, pos);
        if set.contains(cp) {
            return pos;
        }
        if set
            .strings()
            .iter()
            .any(|m| m.len() <= pos && matches_at(text, pos - m.len(), m))
        {
            return pos;
        }
        pos -= n;
    }
    0
}

fn span_not_count(set: &UnicodeSpanSet, text: &[u16]) -> (usize, usize) {
    let len = text.len();
    let mut pos = 0;
    let mut count = 0;
    while pos < len {
        let (cp, n) = code_point_at(text, pos);
        if set.contains(cp) {
            return (pos, count);
        }
        let rest = len - pos;
        if set
            .strings()
            .iter()
            .any(|m| m.len() <= rest && matches_at(text, pos, m))
        {
            return (pos, count);
        }
        pos += n;
        count += 1;
    }
    (len, count)
}

// ----------------------------------------------------------------------
// Contained: exhaustive worklist search
// ----------------------------------------------------------------------

/// All match end points starting at `pos`, shortest first is not required;
/// the worklist ordering takes care of exploration order.
fn matches_from(
    set: &UnicodeSpanSet,
    text: &[u16],
    pos: usize,
    out: &mut SmallVec<[usize; 8]>,
) {
    out.clear();
    let (cp, n) = code_point_at(text, pos);
    if set.contains(cp) {
        out.push(pos + n);
    }
    let rest = text.len() - pos;
    for m in set.strings().iter() {
        if m.len() <= rest && matches_at(text, pos, m) {
            out.push(pos + m.len());
        }
    }
}

fn span_contained(set: &UnicodeSpanSet, text: &[u16]) -> usize {
    let len = text.len();
    if len == 0 {
        return 0;
    }
    // Worklist of candidate continuation positions, processed in scan
    // order; each position is explored once, so the search is bounded by
    // O(len * member_count) even with heavily overlapping members.
    let mut pending = BTreeSet::from([0usize]);
    let mut discovered = BTreeSet::from([0usize]);
    let mut max_reached = 0;
    let mut nexts: SmallVec<[usize; 8]> = SmallVec::new();
    while let Some(pos) = pending.pop_first() {
        matches_from(set, text, pos, &mut nexts);
        for &next in &nexts {
            if next == len {
                return len;
            }
            if next > max_reached {
                max_reached = next;
            }
            if discovered.insert(next) {
                pending.insert(next);
            }
        }
    }
    max_reached
}

fn span_back_contained(set: &UnicodeSpanSet, text: &[u16]) -> usize {
    let limit = text.len();
    // Callers guarantee limit > 0.
    let mut pending = BTreeSet::from([limit]);
    let mut discovered = BTreeSet::from([limit]);
    let mut min_reached = limit;
    let mut nexts: SmallVec<[usize; 8]> = SmallVec::new();
    while let Some(pos) = pending.pop_last() {
        nexts.clear();
        let (cp, n) = code_point_before(text, pos);
        if set.contains(cp) {
            nexts.push(pos - n);
        }
        for m in set.strings().iter() {
            if m.len() <= pos && matches_at(text, pos - m.len(), m) {
                nexts.push(pos - m.len());
            }
        }
        for &next in &nexts {
            if next == 0 {
                return 0;
            }
            if next < min_reached {
                min_reached = next;
            }
            if discovered.insert(next) {
                pending.insert(next);
            }
        }
    }
    min_reached
}

fn span_contained_count(set: &UnicodeSpanSet, text: &[u16]) -> (usize, usize) {
    let len = text.len();
    let mut queue = OffsetQueue::new();
    let mut pos = 0;
    let mut count = 0;
    loop {
        if pos == len {
            return (pos, count);
        }
        let (cp, n) = code_point_at(text, pos);
        if set.contains(cp) {
            queue.push(pos + n, count + 1);
        }
        let rest = len - pos;
        for m in set.strings().iter() {
            if m.len() <= rest && matches_at(text, pos, m) {
                queue.push(pos + m.len(), count + 1);
            }
        }
        match queue.pop_first() {
            // No continuation anywhere: the scan stalls here.
            None => return (pos, count),
            Some((p, c)) => {
                pos = p;
                count = c;
            }
        }
    }
}

// ----------------------------------------------------------------------
// Simple: single longest match, no backtracking
// ----------------------------------------------------------------------

fn simple_step(set: &UnicodeSpanSet, text: &[u16], pos: usize) -> usize {
    let (cp, n) = code_point_at(text, pos);
    let mut next = pos;
    if set.contains(cp) {
        next = pos + n;
    }
    let rest = text.len() - pos;
    for m in set.strings().iter() {
        if m.len() <= rest && pos + m.len() > next && matches_at(text, pos, m) {
            next = pos + m.len();
        }
    }
    next
}

fn span_simple(set: &UnicodeSpanSet, text: &[u16]) -> usize {
    let len = text.len();
    let mut pos = 0;
    while pos < len {
        let next = simple_step(set, text, pos);
        if next == pos {
            break;
        }
        pos = next;
    }
    pos
}

fn span_back_simple(set: &UnicodeSpanSet, text: &[u16]) -> usize {
    let mut pos = text.len();
    while pos > 0 {
        let (cp, n) = code_point_before(text, pos);
        let mut next = pos;
        if set.contains(cp) {
            next = pos - n;
        }
        for m in set.strings().iter() {
            if m.len() <= pos && pos - m.len() < next && matches_at(text, pos - m.len(), m) {
                next = pos - m.len();
            }
        }
        if next == pos {
            break;
        }
        pos = next;
    }
    pos
}

fn span_simple_count(set: &UnicodeSpanSet, text: &[u16]) -> (usize, usize) {
    let len = text.len();
    let mut pos = 0;
    let mut count = 0;
    while pos < len {
        let next = simple_step(set, text, pos);
        if next == pos {
            break;
        }
        pos = next;
        count += 1;
    }
    (pos, count)
}
