// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation and ranking invariants.
//!
//! Scores must be finite, positive and deterministic. The same query run
//! twice must produce identical results, sorted by score with ties in
//! catalog order, never longer than the requested cap.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use settee::testing::sample_catalog;
use settee::{CatalogItem, Dimensions, SearchEngine, SearchRequest};

#[derive(Debug, Arbitrary)]
struct FuzzItem {
    name: String,
    description: String,
    tags: Vec<String>,
    price: f64,
    size: [f64; 3],
}

#[derive(Debug, Arbitrary)]
struct SearchInput {
    query: String,
    extra_items: Vec<FuzzItem>,
    max_results: u8,
    smart: bool,
}

fuzz_target!(|input: SearchInput| {
    let mut items = sample_catalog();
    for (i, extra) in input.extra_items.into_iter().take(32).enumerate() {
        // NaN prices and sizes are not valid catalog data
        if !extra.price.is_finite() || !extra.size.iter().all(|v| v.is_finite()) {
            continue;
        }
        items.push(CatalogItem {
            id: format!("fuzz-{}", i),
            approximate_size: Dimensions(extra.size),
            description: extra.description.chars().take(200).collect(),
            tags: extra.tags.into_iter().take(8).collect(),
            price: extra.price,
            ..settee::testing::make_item("", &extra.name.chars().take(80).collect::<String>(), &[])
        });
    }

    let engine = SearchEngine::default();
    engine.load_catalog(items);

    let query: String = input.query.chars().take(200).collect();
    let max_results = usize::from(input.max_results.max(1));
    let request = SearchRequest::new(query).with_max_results(max_results);

    let first = engine.search(&request, input.smart);
    let second = engine.search(&request, input.smart);

    // INVARIANT 1: searches are deterministic
    assert_eq!(first, second, "same query returned different results");

    // INVARIANT 2: capped
    assert!(first.len() <= max_results);

    // INVARIANT 3: every score finite and positive
    for ranked in &first.items {
        assert!(ranked.score.is_finite(), "score {} not finite", ranked.score);
        assert!(ranked.score > 0.0, "zero score in results");
    }

    // INVARIANT 4: non-increasing scores
    for pair in first.items.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "{} before {}",
            pair[0].score,
            pair[1].score
        );
    }
});
