// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! History and suggestion bounds under arbitrary input sequences.

use crate::common::sample_catalog;
use proptest::prelude::*;
use settee::{suggest, Catalog, SearchHistory, MAX_SUGGESTIONS};
use std::collections::HashSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: history never exceeds capacity and never holds duplicates.
    #[test]
    fn prop_history_bounded_unique(
        capacity in 1usize..12,
        queries in prop::collection::vec("[a-d]{1,2}", 0..40),
    ) {
        let mut history = SearchHistory::new(capacity);
        for q in &queries {
            history.push(q);
        }

        let entries = history.entries();
        prop_assert!(entries.len() <= capacity);
        let unique: HashSet<&String> = entries.iter().collect();
        prop_assert_eq!(unique.len(), entries.len());
    }

    /// Property: suggestions are capped, unique and all start with the prefix.
    #[test]
    fn prop_suggestions_bounded(
        prefix in "[a-zA-Z]{0,3}",
        history in prop::collection::vec("[a-z ]{1,10}", 0..10),
    ) {
        let catalog = Catalog::new(sample_catalog());
        let out = suggest(&prefix, &history, &catalog);

        prop_assert!(out.len() <= MAX_SUGGESTIONS);
        let unique: HashSet<&String> = out.iter().collect();
        prop_assert_eq!(unique.len(), out.len());
        let folded = prefix.to_lowercase();
        for s in &out {
            prop_assert!(s.to_lowercase().starts_with(&folded));
        }
    }
}
