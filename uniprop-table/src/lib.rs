/*!
The `uniprop-table` crate contains the range table representation and search
routines shared by every table that `uniprop-generate` emits. Generated
modules expose static slices of closed codepoint ranges along with a `BY_NAME`
dispatch slice; this crate provides the binary searches that make those
slices usable as property sets.

A *current* design constraint of this crate is that it contains no tables of
its own. Tables are data produced by the generator; this crate only defines
what a valid table looks like and how to query it.
*/

#![deny(missing_docs)]

use std::cmp::Ordering;

/// A table of closed ranges of Unicode codepoints.
///
/// Each `(lo, hi)` pair is inclusive on both ends and `lo <= hi`. A valid
/// table is sorted ascending by `lo` and its ranges are pairwise
/// non-overlapping. Emitted tables always satisfy this; hand-built tables
/// must.
pub type RangeTable = &'static [(u32, u32)];

/// A sequence associating property names with their range tables, sorted
/// ascending by name.
///
/// This is the type of the `BY_NAME` slice in generated modules.
pub type PropertyTable = &'static [(&'static str, RangeTable)];

/// Returns true if and only if the given codepoint is contained in one of
/// the table's closed ranges.
///
/// This is a binary search, so the table must be sorted ascending by range
/// start and its ranges must not overlap. Searching a table that violates
/// that invariant returns an unspecified result.
///
/// The search is generic over the scalar type so that it can be used with
/// the `u32` tables emitted by default and with `(char, char)` tables
/// emitted in char-literal mode.
pub fn contains_codepoint<T: Copy + Ord>(table: &[(T, T)], cp: T) -> bool {
    table
        .binary_search_by(|&(lo, hi)| {
            if lo > cp {
                Ordering::Greater
            } else if hi < cp {
                Ordering::Less
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Looks up the range table compiled for the given property name.
///
/// The dispatch slice must be sorted ascending by name, which holds for
/// every `BY_NAME` slice the generator emits. Names are matched exactly;
/// an unrecognized name yields `None`, never a panic.
pub fn property_ranges<T>(
    table: &'static [(&'static str, &'static [(T, T)])],
    name: &str,
) -> Option<&'static [(T, T)]> {
    table
        .binary_search_by_key(&name, |&(prop, _)| prop)
        .ok()
        .map(|i| table[i].1)
}

#[cfg(test)]
mod tests {
    use super::{contains_codepoint, property_ranges, PropertyTable, RangeTable};

    // A few rows of real General_Category=Nd and Script=Greek data, enough
    // to exercise every branch of the searches.
    const ND: RangeTable = &[(0x30, 0x39), (0x660, 0x669), (0xABF0, 0xABF9)];
    const GREEK: RangeTable = &[(0x370, 0x373), (0x376, 0x377), (0x37A, 0x37D)];
    const BY_NAME: PropertyTable = &[("Greek", GREEK), ("Nd", ND)];

    #[test]
    fn contains() {
        assert!(contains_codepoint(ND, 0x30));
        assert!(contains_codepoint(ND, 0x35));
        assert!(contains_codepoint(ND, 0x39));
        assert!(contains_codepoint(ND, 0xABF8));
    }

    #[test]
    fn doesnt_contain() {
        assert!(!contains_codepoint(ND, 0x2F));
        assert!(!contains_codepoint(ND, 0x3A));
        assert!(!contains_codepoint(ND, 0x100));
        assert!(!contains_codepoint(ND, 0xABFA));
        assert!(!contains_codepoint(ND, 0x10FFFF));
    }

    #[test]
    fn gap_between_ranges_not_contained() {
        // Non-adjacent script ranges stay separate, so the codepoints
        // between them must not match.
        assert!(contains_codepoint(GREEK, 0x373));
        assert!(!contains_codepoint(GREEK, 0x374));
        assert!(!contains_codepoint(GREEK, 0x375));
        assert!(contains_codepoint(GREEK, 0x376));
    }

    #[test]
    fn empty_table() {
        let empty: &[(u32, u32)] = &[];
        assert!(!contains_codepoint(empty, 0x41));
    }

    #[test]
    fn singleton_range() {
        let table: &[(u32, u32)] = &[(0x41, 0x41)];
        assert!(contains_codepoint(table, 0x41));
        assert!(!contains_codepoint(table, 0x40));
        assert!(!contains_codepoint(table, 0x42));
    }

    #[test]
    fn char_table() {
        let table: &[(char, char)] = &[('0', '9'), ('a', 'f')];
        assert!(contains_codepoint(table, '5'));
        assert!(contains_codepoint(table, 'c'));
        assert!(!contains_codepoint(table, 'A'));
    }

    #[test]
    fn dispatch_finds_table() {
        assert_eq!(property_ranges(BY_NAME, "Nd"), Some(ND));
        assert_eq!(property_ranges(BY_NAME, "Greek"), Some(GREEK));
    }

    #[test]
    fn dispatch_doesnt_exist() {
        assert_eq!(property_ranges(BY_NAME, "NotAReal"), None);
        assert_eq!(property_ranges(BY_NAME, ""), None);
        // Names match exactly, not case-insensitively.
        assert_eq!(property_ranges(BY_NAME, "nd"), None);
    }
}
