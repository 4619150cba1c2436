// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Same inputs, same outputs: repeated searches must agree bit for bit.

use crate::common::sample_engine;
use settee::{SearchEngine, SearchRequest, Taxonomy};

const QUERIES: [&str; 8] = [
    "modern",
    "leather sofa",
    "dark wood",
    "table",
    "comfortable bed",
    "Leathr Sofa",
    "big storage",
    "glass",
];

#[test]
fn test_repeated_searches_agree() {
    let engine = sample_engine();
    for query in QUERIES {
        let request = SearchRequest::new(query);
        let first = engine.search(&request, true);
        for _ in 0..5 {
            let again = engine.search(&request, true);
            assert_eq!(first, again, "'{}' changed between runs", query);
        }
    }
}

#[test]
fn test_separate_engines_agree() {
    let a = sample_engine();
    let b = SearchEngine::new(Taxonomy::default());
    b.load_catalog(settee::testing::sample_catalog());

    for query in QUERIES {
        let request = SearchRequest::new(query);
        let left = a.search(&request, true);
        let right = b.search(&request, true);
        assert_eq!(left.items.len(), right.items.len(), "'{}'", query);
        for (l, r) in left.items.iter().zip(&right.items) {
            assert_eq!(l.item.id, r.item.id, "'{}'", query);
            assert_eq!(l.score.to_bits(), r.score.to_bits(), "'{}'", query);
        }
    }
}
