//! Multi-code-unit string members
//!
//! String elements participate in span matching as atomic units. They are
//! compared by exact code-unit sequence equality; no normalization or case
//! folding happens here. Iteration order is the code-unit sort order, which
//! keeps enumeration deterministic.

use std::collections::BTreeSet;

/// Distinct multi-code-unit string members of a span set.
///
/// The empty string is never a member; single-code-point strings are folded
/// into the owning set's range storage before they reach this type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringMemberSet {
    members: BTreeSet<Vec<u16>>,
}

impl StringMemberSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a member; returns false if it was already present.
    pub fn add(&mut self, units: &[u16]) -> bool {
        debug_assert!(!units.is_empty());
        self.members.insert(units.to_vec())
    }

    /// Removes a member; returns false if it was not present.
    pub fn remove(&mut self, units: &[u16]) -> bool {
        self.members.remove(units)
    }

    pub fn contains(&self, units: &[u16]) -> bool {
        self.members.contains(units)
    }

    /// Iterates members in code-unit sort order; finite and restartable.
    pub fn iter(&self) -> impl Iterator<Item = &[u16]> {
        self.members.iter().map(Vec::as_slice)
    }

    /// Length in code units of the longest member, 0 when empty.
    pub fn max_units(&self) -> usize {
        self.members.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn union_with(&mut self, other: &Self) {
        for m in &other.members {
            self.members.insert(m.clone());
        }
    }

    pub fn retain_all(&mut self, other: &Self) {
        self.members.retain(|m| other.members.contains(m));
    }

    pub fn subtract(&mut self, other: &Self) {
        for m in &other.members {
            self.members.remove(m);
        }
    }
}
