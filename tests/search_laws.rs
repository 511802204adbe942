#![cfg(feature = "search")]
//! Property-based tests for ordered search.
//!
//! These tests verify the search contract over arbitrary strictly ascending
//! sequences using proptest.

use std::collections::BTreeSet;

use proptest::prelude::*;
use utilkit::search::{
    SearchOutcome, SearchWindow, binary_search, binary_search_within, is_strictly_sorted,
    prepare_targets, search_many,
};

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

/// Strategy for a strictly ascending sequence drawn from a narrow range, so
/// that targets from [`arbitrary_targets`] often hit.
fn arbitrary_sequence(max_size: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::btree_set(-100..100_i32, 0..max_size)
        .prop_map(|elements| elements.into_iter().collect())
}

/// Strategy for an ascending, duplicate-free target list.
fn arbitrary_targets(max_size: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::btree_set(-120..120_i32, 0..max_size)
        .prop_map(|targets| targets.into_iter().collect())
}

fn comparison_bound(width: usize) -> usize {
    if width == 0 {
        0
    } else {
        width.ilog2() as usize + 1
    }
}

// =============================================================================
// Single search laws
// =============================================================================

proptest! {
    /// Law: every element is found at its own index.
    #[test]
    fn prop_every_element_is_found(sequence in arbitrary_sequence(64)) {
        for (index, element) in sequence.iter().enumerate() {
            prop_assert_eq!(binary_search(&sequence, element).outcome(), SearchOutcome::Found(index));
        }
    }

    /// Law: values absent from the sequence are never found.
    #[test]
    fn prop_absent_values_are_not_found(sequence in arbitrary_sequence(64), value in -200..200_i32) {
        prop_assume!(sequence.binary_search(&value).is_err());
        prop_assert_eq!(binary_search(&sequence, &value).outcome(), SearchOutcome::NotFound);
    }

    /// Law: a search agrees with the standard library on presence.
    #[test]
    fn prop_agrees_with_std_binary_search(sequence in arbitrary_sequence(64), value in -200..200_i32) {
        prop_assert_eq!(
            binary_search(&sequence, &value).index(),
            sequence.binary_search(&value).ok()
        );
    }

    /// Law: comparisons never exceed floor(log2 W) + 1.
    #[test]
    fn prop_comparisons_are_logarithmic(sequence in arbitrary_sequence(128), value in -200..200_i32) {
        let report = binary_search(&sequence, &value);
        prop_assert!(report.comparisons() <= comparison_bound(sequence.len()));
    }

    /// Law: a single-element window takes exactly one comparison and hits
    /// iff that element is the target.
    #[test]
    fn prop_single_element_window(
        sequence in arbitrary_sequence(64).prop_filter("non-empty", |sequence| !sequence.is_empty()),
        seed in any::<prop::sample::Index>(),
        value in -200..200_i32,
    ) {
        let position = seed.index(sequence.len());
        let report = binary_search_within(&sequence, &value, SearchWindow::inclusive(position, position));
        prop_assert_eq!(report.comparisons(), 1);
        if sequence[position] == value {
            prop_assert_eq!(report.outcome(), SearchOutcome::Found(position));
        } else {
            prop_assert_eq!(report.outcome(), SearchOutcome::NotFound);
        }
    }

    /// Law: a hit always lies inside the searched window.
    #[test]
    fn prop_hits_stay_inside_window(
        sequence in arbitrary_sequence(64),
        start in 0..80_usize,
        end in 0..80_usize,
        value in -200..200_i32,
    ) {
        let window = SearchWindow::inclusive(start, end);
        if let SearchOutcome::Found(index) = binary_search_within(&sequence, &value, window).outcome() {
            prop_assert!(window.contains(index));
            prop_assert_eq!(sequence[index], value);
        }
    }
}

// =============================================================================
// Multi-target laws
// =============================================================================

proptest! {
    /// Law: narrowing the window after each hit yields the same indices as
    /// independent full-range searches.
    #[test]
    fn prop_narrowing_matches_independent_searches(
        sequence in arbitrary_sequence(64),
        targets in arbitrary_targets(32),
    ) {
        let narrowed: Vec<SearchOutcome> = search_many(&sequence, targets.clone())
            .iter()
            .map(|report| report.outcome())
            .collect();
        let independent: Vec<SearchOutcome> = targets
            .iter()
            .map(|target| binary_search(&sequence, target).outcome())
            .collect();
        prop_assert_eq!(narrowed, independent);
    }

    /// Law: when every target is present, each search starts right after the
    /// previous hit.
    #[test]
    fn prop_window_starts_after_previous_hit(
        sequence in arbitrary_sequence(64),
        targets in arbitrary_targets(32),
    ) {
        let present: BTreeSet<i32> = sequence.iter().copied().collect();
        let targets: Vec<i32> = targets.into_iter().filter(|target| present.contains(target)).collect();

        let reports = search_many(&sequence, targets);
        let mut expected_start = 0;
        for report in &reports {
            prop_assert_eq!(report.window().start(), expected_start);
            let index = report.outcome().index();
            prop_assert!(index.is_some());
            expected_start = index.unwrap_or_default() + 1;
        }
    }

    /// Law: narrowed searches never compare more than full-range ones would
    /// allow.
    #[test]
    fn prop_narrowed_comparisons_are_bounded(
        sequence in arbitrary_sequence(64),
        targets in arbitrary_targets(32),
    ) {
        for report in search_many(&sequence, targets) {
            prop_assert!(report.report().comparisons() <= comparison_bound(report.window().len()));
        }
    }

    /// Law: prepared targets are strictly ascending and keep every value.
    #[test]
    fn prop_prepare_targets_sorts_and_dedups(values in prop::collection::vec(-50..50_i32, 0..64)) {
        let prepared = prepare_targets(values.clone());
        prop_assert!(is_strictly_sorted(&prepared));
        let expected: BTreeSet<i32> = values.into_iter().collect();
        prop_assert_eq!(prepared, expected.into_iter().collect::<Vec<_>>());
    }
}
