//! The composed character-plus-string set
//!
//! `UnicodeSpanSet` presents single code points and literal multi-code-unit
//! strings as one logical set with full algebra and a frozen/mutable
//! lifecycle. The span engine consumes it read-only: the range side through
//! [`CodePointRangeSet`] containment, the string side through
//! [`StringMemberSet`] enumeration.

use crate::error::{Result, SetError};
use crate::range_set::CodePointRangeSet;
use crate::string_set::StringMemberSet;
use crate::utf16::{self, MAX_CODE_POINT};

/// A set of code points and literal strings with a freeze lifecycle.
///
/// Mutators fail with [`SetError::Frozen`] after [`freeze`](Self::freeze);
/// a frozen set owns only immutable data and is safe to read from many
/// threads. [`clone_thawed`](Self::clone_thawed) produces a fresh mutable
/// copy.
///
/// Complementing a set never touches its string members; only the code
/// point ranges flip. Downstream span semantics rely on this asymmetry.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnicodeSpanSet {
    ranges: CodePointRangeSet,
    strings: StringMemberSet,
    frozen: bool,
}

/// Equality compares contents only, not frozen-ness.
impl PartialEq for UnicodeSpanSet {
    fn eq(&self, other: &Self) -> bool {
        self.ranges == other.ranges && self.strings == other.strings
    }
}

impl Eq for UnicodeSpanSet {}

/// The code point encoded by `units` if they encode exactly one, whether as
/// a single unit (including an unpaired surrogate) or as a surrogate pair.
fn single_code_point(units: &[u16]) -> Option<u32> {
    match units.len() {
        1 => Some(units[0] as u32),
        2 => {
            let (cp, len) = utf16::code_point_at(units, 0);
            (len == 2).then_some(cp)
        }
        _ => None,
    }
}

impl UnicodeSpanSet {
    /// Creates an empty, mutable set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set containing the inclusive code point range.
    pub fn from_range(start: u32, end: u32) -> Result<Self> {
        let mut set = Self::new();
        set.add_range(start, end)?;
        Ok(set)
    }

    fn writable(&self) -> Result<()> {
        if self.frozen {
            return Err(SetError::Frozen);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    /// Adds a single code point.
    pub fn add(&mut self, cp: u32) -> Result<()> {
        self.writable()?;
        self.ranges.add(cp)
    }

    pub fn add_char(&mut self, c: char) -> Result<()> {
        self.add(c as u32)
    }

    /// Adds an inclusive code point range.
    pub fn add_range(&mut self, start: u32, end: u32) -> Result<()> {
        self.writable()?;
        self.ranges.add_range(start, end)
    }

    /// Adds a string element.
    ///
    /// A string encoding exactly one code point is folded into the range
    /// storage; only genuinely multi-code-point strings become string
    /// members. The empty string is rejected.
    pub fn add_string(&mut self, s: &str) -> Result<()> {
        self.add_string_units(&utf16::encode_utf16(s))
    }

    /// As [`add_string`](Self::add_string), for raw code units. This is the
    /// only way to add members containing unpaired surrogates.
    pub fn add_string_units(&mut self, units: &[u16]) -> Result<()> {
        self.writable()?;
        if units.is_empty() {
            return Err(SetError::EmptyString);
        }
        match single_code_point(units) {
            Some(cp) => self.ranges.add(cp),
            None => {
                self.strings.add(units);
                Ok(())
            }
        }
    }

    /// Removes a single code point.
    pub fn remove(&mut self, cp: u32) -> Result<()> {
        self.writable()?;
        self.ranges.remove_range(cp, cp)
    }

    /// Removes an inclusive code point range.
    pub fn remove_range(&mut self, start: u32, end: u32) -> Result<()> {
        self.writable()?;
        self.ranges.remove_range(start, end)
    }

    pub fn remove_string(&mut self, s: &str) -> Result<()> {
        self.remove_string_units(&utf16::encode_utf16(s))
    }

    pub fn remove_string_units(&mut self, units: &[u16]) -> Result<()> {
        self.writable()?;
        if units.is_empty() {
            return Err(SetError::EmptyString);
        }
        match single_code_point(units) {
            Some(cp) => self.ranges.remove_range(cp, cp),
            None => {
                self.strings.remove(units);
                Ok(())
            }
        }
    }

    /// Keeps only code points inside `[start, end]`. String members are
    /// unaffected, consistent with the complement asymmetry.
    pub fn retain_range(&mut self, start: u32, end: u32) -> Result<()> {
        self.writable()?;
        self.ranges.retain_range(start, end)
    }

    /// Complements the code point ranges over the full scalar domain.
    /// String members are deliberately left in place.
    pub fn complement(&mut self) -> Result<()> {
        self.writable()?;
        self.ranges.complement();
        Ok(())
    }

    /// Toggles membership of every code point in `[start, end]`.
    pub fn complement_range(&mut self, start: u32, end: u32) -> Result<()> {
        self.writable()?;
        self.ranges.complement_range(start, end)
    }

    /// Adds every element (code points and strings) of `other`.
    pub fn union_with(&mut self, other: &Self) -> Result<()> {
        self.writable()?;
        self.ranges.union_with(&other.ranges);
        self.strings.union_with(&other.strings);
        Ok(())
    }

    /// Keeps only elements also present in `other`.
    pub fn retain_all(&mut self, other: &Self) -> Result<()> {
        self.writable()?;
        self.ranges.intersect_with(&other.ranges);
        self.strings.retain_all(&other.strings);
        Ok(())
    }

    /// Removes every element present in `other`.
    pub fn remove_all(&mut self, other: &Self) -> Result<()> {
        self.writable()?;
        self.ranges.subtract(&other.ranges);
        self.strings.subtract(&other.strings);
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.writable()?;
        self.ranges.clear();
        self.strings.clear();
        Ok(())
    }

    /// Adds every code point for which the property predicate holds.
    ///
    /// This is the bridge to an external character-property provider: the
    /// predicate is consumed once, here, and the materialized ranges are
    /// all the span engine ever sees.
    pub fn add_matching<F: Fn(u32) -> bool>(&mut self, is_member: F) -> Result<()> {
        self.writable()?;
        let mut run_start: Option<u32> = None;
        for cp in 0..=MAX_CODE_POINT {
            if is_member(cp) {
                run_start.get_or_insert(cp);
            } else if let Some(start) = run_start.take() {
                self.ranges.add_range(start, cp - 1)?;
            }
        }
        if let Some(start) = run_start {
            self.ranges.add_range(start, MAX_CODE_POINT)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn contains(&self, cp: u32) -> bool {
        self.ranges.contains(cp)
    }

    pub fn contains_char(&self, c: char) -> bool {
        self.contains(c as u32)
    }

    pub fn contains_range(&self, start: u32, end: u32) -> bool {
        self.ranges.contains_range(start, end)
    }

    /// Whether `units` is an element: a single code point is looked up in
    /// the ranges, anything longer among the string members.
    pub fn contains_string_units(&self, units: &[u16]) -> bool {
        match single_code_point(units) {
            Some(cp) => self.ranges.contains(cp),
            None => !units.is_empty() && self.strings.contains(units),
        }
    }

    pub fn contains_string(&self, s: &str) -> bool {
        self.contains_string_units(&utf16::encode_utf16(s))
    }

    pub fn has_strings(&self) -> bool {
        !self.strings.is_empty()
    }

    /// Read-only view of the code point ranges.
    pub fn ranges(&self) -> &CodePointRangeSet {
        &self.ranges
    }

    /// Read-only view of the string members.
    pub fn strings(&self) -> &StringMemberSet {
        &self.strings
    }

    /// Element count: code points plus distinct strings, each string
    /// counted once regardless of length.
    pub fn size(&self) -> u64 {
        self.ranges.size() + self.strings.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty() && self.strings.is_empty()
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Makes the set immutable. Idempotent and one-way.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Returns a mutable deep copy, whether or not `self` is frozen.
    pub fn clone_thawed(&self) -> Self {
        Self {
            ranges: self.ranges.clone(),
            strings: self.strings.clone(),
            frozen: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_code_point_folding() {
        let mut set = UnicodeSpanSet::new();
        // One unit.
        set.add_string("a").unwrap();
        // One supplementary code point, two units.
        set.add_string("😀").unwrap();
        assert!(!set.has_strings());
        assert!(set.contains(0x61));
        assert!(set.contains(0x1F600));

        set.add_string("ab").unwrap();
        assert!(set.has_strings());
        assert!(set.contains_string("ab"));
        assert!(!set.contains_string("a😀"));
    }

    #[test]
    fn test_empty_string_rejected() {
        let mut set = UnicodeSpanSet::new();
        assert_eq!(set.add_string(""), Err(SetError::EmptyString));
        assert!(set.is_empty());
    }

    #[test]
    fn test_frozen_set_rejects_mutation() {
        let mut set = UnicodeSpanSet::new();
        set.add_char('a').unwrap();
        set.add_string("ab").unwrap();
        set.freeze();
        assert!(set.is_frozen());

        assert_eq!(set.add(0x62), Err(SetError::Frozen));
        assert_eq!(set.add_string("cd"), Err(SetError::Frozen));
        assert_eq!(set.remove(0x61), Err(SetError::Frozen));
        assert_eq!(set.complement(), Err(SetError::Frozen));
        assert_eq!(set.clear(), Err(SetError::Frozen));

        // Nothing changed.
        assert!(set.contains(0x61));
        assert!(set.contains_string("ab"));
        assert_eq!(set.size(), 2);
    }

    #[test]
    fn test_freeze_is_idempotent() {
        let mut set = UnicodeSpanSet::new();
        set.add_range(0x30, 0x39).unwrap();
        set.freeze();
        let snapshot = set.clone();
        set.freeze();
        assert_eq!(set, snapshot);
        assert!(set.is_frozen());
    }

    #[test]
    fn test_clone_thawed_is_mutable_copy() {
        let mut set = UnicodeSpanSet::new();
        set.add_char('x').unwrap();
        set.add_string("xy").unwrap();
        set.freeze();

        let mut copy = set.clone_thawed();
        assert!(!copy.is_frozen());
        assert_eq!(copy, set);
        copy.add_char('z').unwrap();
        assert!(copy.contains_char('z'));
        assert!(!set.contains_char('z'));
    }

    #[test]
    fn test_complement_preserves_strings() {
        let mut set = UnicodeSpanSet::new();
        set.add_char('a').unwrap();
        set.add_string("ab").unwrap();
        set.add_string("bc").unwrap();
        set.complement().unwrap();

        assert!(!set.contains_char('a'));
        assert!(set.contains_char('b'));
        // Strings survive complement as additional matches.
        assert!(set.contains_string("ab"));
        assert!(set.contains_string("bc"));
        assert_eq!(set.strings().len(), 2);
    }

    #[test]
    fn test_set_algebra_covers_strings() {
        let mut a = UnicodeSpanSet::new();
        a.add_char('a').unwrap();
        a.add_string("ab").unwrap();
        a.add_string("cd").unwrap();
        let mut b = UnicodeSpanSet::new();
        b.add_char('b').unwrap();
        b.add_string("cd").unwrap();

        let mut union = a.clone();
        union.union_with(&b).unwrap();
        assert_eq!(union.size(), 2 + 2);

        let mut inter = a.clone();
        inter.retain_all(&b).unwrap();
        assert!(inter.ranges().is_empty());
        assert!(inter.contains_string("cd"));
        assert!(!inter.contains_string("ab"));

        let mut diff = a.clone();
        diff.remove_all(&b).unwrap();
        assert!(diff.contains_char('a'));
        assert!(diff.contains_string("ab"));
        assert!(!diff.contains_string("cd"));
    }

    #[test]
    fn test_add_matching_materializes_ranges() {
        let mut set = UnicodeSpanSet::new();
        set.add_matching(|cp| (0x30..=0x39).contains(&cp) || cp == 0x5F)
            .unwrap();
        assert_eq!(
            set.ranges().ranges().collect::<Vec<_>>(),
            vec![(0x30, 0x39), (0x5F, 0x5F)]
        );
        assert_eq!(set.size(), 11);
    }

    #[test]
    fn test_unpaired_surrogate_members() {
        let mut set = UnicodeSpanSet::new();
        // A lone surrogate as a one-unit code point member.
        set.add_string_units(&[0xD840]).unwrap();
        assert!(set.contains(0xD840));
        assert!(!set.has_strings());

        // A string member containing a lone surrogate.
        set.add_string_units(&[0x62, 0xD840]).unwrap();
        assert!(set.contains_string_units(&[0x62, 0xD840]));
        assert!(set.has_strings());
    }

    #[test]
    fn test_size_counts_strings_once() {
        let mut set = UnicodeSpanSet::new();
        set.add_range(0x61, 0x63).unwrap();
        set.add_string("abcd").unwrap();
        set.add_string("abcd").unwrap();
        assert_eq!(set.size(), 3 + 1);
    }
}
