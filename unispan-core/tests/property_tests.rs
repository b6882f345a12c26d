//! Property tests for the canonical range representation

use proptest::prelude::*;
use unispan_core::{CodePointRangeSet, UnicodeSpanSet};

/// Strategy: a handful of arbitrary (possibly overlapping) valid ranges in
/// a small window so that collisions and merges actually happen.
fn raw_ranges() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec(
        (0u32..0x200).prop_flat_map(|s| (Just(s), s..0x200)),
        0..8,
    )
}

fn build(ranges: &[(u32, u32)]) -> CodePointRangeSet {
    let mut set = CodePointRangeSet::new();
    for &(s, e) in ranges {
        set.add_range(s, e).unwrap();
    }
    set
}

proptest! {
    #[test]
    fn prop_canonical_form_after_adds(ranges in raw_ranges()) {
        let set = build(&ranges);
        let canonical: Vec<(u32, u32)> = set.ranges().collect();
        for w in canonical.windows(2) {
            // Sorted, disjoint, non-adjacent.
            prop_assert!(w[0].1 + 1 < w[1].0);
        }
        for &(s, e) in &canonical {
            prop_assert!(s <= e);
        }
    }

    #[test]
    fn prop_contains_matches_input_ranges(ranges in raw_ranges(), probe in 0u32..0x220) {
        let set = build(&ranges);
        let expected = ranges.iter().any(|&(s, e)| (s..=e).contains(&probe));
        prop_assert_eq!(set.contains(probe), expected);
    }

    #[test]
    fn prop_complement_involution(ranges in raw_ranges()) {
        let set = build(&ranges);
        let mut twice = set.clone();
        twice.complement();
        twice.complement();
        prop_assert_eq!(twice, set);
    }

    #[test]
    fn prop_add_then_remove_range_restores(ranges in raw_ranges(), s in 0x300u32..0x380, width in 0u32..0x40) {
        // The probe window is disjoint from raw_ranges(), so removal must
        // restore the original set exactly.
        let set = build(&ranges);
        let mut mutated = set.clone();
        mutated.add_range(s, s + width).unwrap();
        mutated.remove_range(s, s + width).unwrap();
        prop_assert_eq!(mutated, set);
    }

    #[test]
    fn prop_subtract_then_union_is_superset(a in raw_ranges(), b in raw_ranges()) {
        let a = build(&a);
        let b = build(&b);
        let mut diff = a.clone();
        diff.subtract(&b);
        diff.union_with(&b);
        // a \ b ∪ b ⊇ a
        for cp in a.iter() {
            prop_assert!(diff.contains(cp));
        }
    }

    #[test]
    fn prop_span_set_complement_involution_without_strings(ranges in raw_ranges()) {
        let mut set = UnicodeSpanSet::new();
        for &(s, e) in &ranges {
            set.add_range(s, e).unwrap();
        }
        let original = set.clone();
        set.complement().unwrap();
        set.complement().unwrap();
        prop_assert_eq!(set, original);
    }
}
