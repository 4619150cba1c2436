// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities and fixtures.

#![allow(dead_code)]

use settee::{CatalogItem, SearchEngine, SearchRequest, SearchResult};

// Re-export canonical fixtures from settee::testing
pub use settee::testing::{make_item, make_priced_item, sample_catalog, sofa_and_chair};

/// Engine with default taxonomy and `items` loaded.
pub fn engine_with(items: Vec<CatalogItem>) -> SearchEngine {
    let engine = SearchEngine::default();
    engine.load_catalog(items);
    engine
}

/// Engine over the eight-item demo catalog.
pub fn sample_engine() -> SearchEngine {
    engine_with(sample_catalog())
}

/// Smart-mode search with no filters.
pub fn smart(engine: &SearchEngine, text: &str) -> SearchResult {
    engine.search(&SearchRequest::new(text), true)
}

/// Display names of the results, in rank order.
pub fn names(result: &SearchResult) -> Vec<&str> {
    result.display_names()
}

/// Assert two scores agree to within float noise.
pub fn assert_score(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "score {} != expected {}",
        actual,
        expected
    );
}
