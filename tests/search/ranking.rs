// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordering of results: score first, catalog position on ties.

use crate::common::{assert_score, engine_with, make_item, names, sample_engine, smart};
use settee::{
    SearchRequest, BASIC_MATCH_SCORE, BRAND_WEIGHT, DESCRIPTION_WEIGHT, NAME_WEIGHT, STYLE_WEIGHT,
    TAG_WEIGHT,
};

#[test]
fn test_modern_ranking_on_sample_catalog() {
    let result = smart(&sample_engine(), "modern");

    assert_eq!(
        names(&result),
        vec!["Modern Chair", "Modern Floor Lamp", "Glass Coffee Table"]
    );
    // Brand "ModernFurniture Co." also contains the query
    assert_score(
        result.items[0].score,
        NAME_WEIGHT + DESCRIPTION_WEIGHT + TAG_WEIGHT + STYLE_WEIGHT + BRAND_WEIGHT,
    );
    assert_score(result.items[1].score, NAME_WEIGHT + TAG_WEIGHT + STYLE_WEIGHT);
    assert_score(result.items[2].score, DESCRIPTION_WEIGHT);
}

#[test]
fn test_scores_never_increase() {
    let engine = sample_engine();
    for query in ["modern", "table", "storage", "comfortable", "wood", "glass coffee"] {
        let result = smart(&engine, query);
        for pair in result.items.windows(2) {
            assert!(
                pair[0].score >= pair[1].score,
                "'{}': {} ({}) before {} ({})",
                query,
                pair[0].item.display_name,
                pair[0].score,
                pair[1].item.display_name,
                pair[1].score
            );
        }
    }
}

#[test]
fn test_equal_scores_keep_catalog_order() {
    let engine = engine_with(vec![
        make_item("c", "Cedar Stool", &["stool"]),
        make_item("a", "Ash Stool", &["stool"]),
        make_item("b", "Birch Stool", &["stool"]),
    ]);
    let result = smart(&engine, "stool");

    assert_eq!(names(&result), vec!["Cedar Stool", "Ash Stool", "Birch Stool"]);
    assert!(result.items.iter().all(|r| r.score == result.items[0].score));
}

#[test]
fn test_basic_mode_scores_are_flat() {
    let result = sample_engine().search(&SearchRequest::new("modern"), false);

    // Catalog order: chair, lamp, coffee table
    assert_eq!(
        names(&result),
        vec!["Modern Chair", "Modern Floor Lamp", "Glass Coffee Table"]
    );
    assert!(result.items.iter().all(|r| r.score == BASIC_MATCH_SCORE));
}

#[test]
fn test_basic_mode_ignores_brand() {
    let result = sample_engine().search(&SearchRequest::new("sleep well"), false);
    assert!(result.is_empty());
}

#[test]
fn test_max_results_caps_after_sorting() {
    let request = SearchRequest::new("modern").with_max_results(1);
    let result = sample_engine().search(&request, true);

    assert_eq!(names(&result), vec!["Modern Chair"]);
    assert_eq!(result.status_message, "Found 1 result for 'modern'");
}
