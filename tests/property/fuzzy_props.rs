// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and similarity, checked against strsim as an oracle.

use proptest::prelude::*;
use settee::{edit_distance, fuzzy_match, similarity, FUZZY_THRESHOLD};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Differential test: edit distance matches strsim's Levenshtein.
    #[test]
    fn diff_edit_distance(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        prop_assert_eq!(edit_distance(&a, &b), strsim::levenshtein(&a, &b));
    }

    /// Differential test: similarity matches strsim's normalized Levenshtein
    /// on folded input, whenever there is any input at all.
    #[test]
    fn diff_similarity(a in "[a-zA-Z ]{1,12}", b in "[a-zA-Z ]{0,12}") {
        let expected = strsim::normalized_levenshtein(&a.to_lowercase(), &b.to_lowercase());
        prop_assert!((similarity(&a, &b) - expected).abs() < 1e-12);
    }

    /// Property: similarity stays in [0, 1] and is symmetric.
    #[test]
    fn prop_similarity_bounded_symmetric(a in "\\PC{0,16}", b in "\\PC{0,16}") {
        let ab = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert_eq!(ab, similarity(&b, &a));
    }

    /// Property: distance is a metric (identity, symmetry, triangle).
    #[test]
    fn prop_edit_distance_metric(
        a in "[a-c]{0,8}",
        b in "[a-c]{0,8}",
        c in "[a-c]{0,8}",
    ) {
        prop_assert_eq!(edit_distance(&a, &a), 0);
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
        prop_assert!(edit_distance(&a, &c) <= edit_distance(&a, &b) + edit_distance(&b, &c));
    }

    /// Property: fuzzy_match only reports similarities above the threshold.
    #[test]
    fn prop_fuzzy_match_threshold(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
        match fuzzy_match(&a, &b) {
            Some(sim) => prop_assert!(sim > FUZZY_THRESHOLD),
            None => prop_assert!(similarity(&a, &b) <= FUZZY_THRESHOLD),
        }
    }
}

#[test]
fn test_empty_strings_are_not_similar() {
    assert_eq!(similarity("", ""), 0.0);
    assert!(fuzzy_match("", "").is_none());
}
