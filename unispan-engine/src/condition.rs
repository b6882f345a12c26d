//! Span condition selection

/// How a span call decides where a run of text ends.
///
/// The condition is a call-site parameter, not a set property, and is
/// matched once per call so the scan loops stay branch-predictable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanCondition {
    /// Extend the run while nothing matches: the current code point is not
    /// a member and no string member matches at the current position.
    NotContained,
    /// Extend the run while some sequence of elements covers it, exploring
    /// overlapping string matches exhaustively for the maximal boundary.
    Contained,
    /// Like [`Contained`](Self::Contained) but taking only the single
    /// longest match at each position, never backtracking. Produces a
    /// boundary at or before the `Contained` one for the same set and text.
    Simple,
}

impl SpanCondition {
    /// Containment polarity for sets with no string members, where
    /// `Contained` and `Simple` coincide.
    pub(crate) fn polarity(self) -> bool {
        self != SpanCondition::NotContained
    }
}
