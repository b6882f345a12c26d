//! UTF-16 code-unit helpers tolerant of unpaired surrogates
//!
//! Span matching runs over in-memory UTF-16 code-unit buffers, which may be
//! malformed. An unpaired surrogate is treated as its own one-unit code
//! point so that scanning always makes progress and never splits a proper
//! surrogate pair.

/// Largest value a code point can take.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Returns true for a lead (high) surrogate code unit.
#[inline]
pub fn is_lead_surrogate(unit: u16) -> bool {
    (0xD800..=0xDBFF).contains(&unit)
}

/// Returns true for a trail (low) surrogate code unit.
#[inline]
pub fn is_trail_surrogate(unit: u16) -> bool {
    (0xDC00..=0xDFFF).contains(&unit)
}

/// Returns true for any surrogate code unit.
#[inline]
pub fn is_surrogate(unit: u16) -> bool {
    (0xD800..=0xDFFF).contains(&unit)
}

/// Reads the code point starting at `i` and its length in code units.
///
/// A lead surrogate followed by a trail surrogate is combined; any other
/// surrogate unit is returned as a one-unit code point.
///
/// # Panics
/// Panics if `i >= text.len()`.
#[inline]
pub fn code_point_at(text: &[u16], i: usize) -> (u32, usize) {
    let unit = text[i];
    if is_lead_surrogate(unit) && i + 1 < text.len() && is_trail_surrogate(text[i + 1]) {
        let cp = 0x10000 + (((unit as u32 - 0xD800) << 10) | (text[i + 1] as u32 - 0xDC00));
        (cp, 2)
    } else {
        (unit as u32, 1)
    }
}

/// Reads the code point ending (exclusively) at `i` and its length in code
/// units.
///
/// # Panics
/// Panics if `i == 0` or `i > text.len()`.
#[inline]
pub fn code_point_before(text: &[u16], i: usize) -> (u32, usize) {
    let unit = text[i - 1];
    if is_trail_surrogate(unit) && i >= 2 && is_lead_surrogate(text[i - 2]) {
        let cp = 0x10000 + (((text[i - 2] as u32 - 0xD800) << 10) | (unit as u32 - 0xDC00));
        (cp, 2)
    } else {
        (unit as u32, 1)
    }
}

/// Encodes a string as UTF-16 code units.
pub fn encode_utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// Appends `cp` to a code-unit buffer.
///
/// Surrogate code points are written as single units, which allows building
/// malformed test fixtures and legacy membership data.
pub fn push_code_point(out: &mut Vec<u16>, cp: u32) {
    debug_assert!(cp <= MAX_CODE_POINT);
    if cp < 0x10000 {
        out.push(cp as u16);
    } else {
        let v = cp - 0x10000;
        out.push(0xD800 + (v >> 10) as u16);
        out.push(0xDC00 + (v & 0x3FF) as u16);
    }
}

/// Number of code points encoded by `units`, counting unpaired surrogates
/// as one code point each.
pub fn code_point_len(units: &[u16]) -> usize {
    let mut i = 0;
    let mut n = 0;
    while i < units.len() {
        let (_, len) = code_point_at(units, i);
        i += len;
        n += 1;
    }
    n
}
