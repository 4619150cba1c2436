// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Worked examples over the two-item sofa/chair catalog.

use crate::common::{assert_score, engine_with, names, smart, sofa_and_chair};
use settee::{
    SearchRequest, FUZZY_WEIGHT, GENERAL_TERM_WEIGHT, MATERIAL_WEIGHT, NAME_WEIGHT,
    READY_STATUS, STYLE_WEIGHT, TAG_WEIGHT,
};

#[test]
fn test_leather_matches_only_the_sofa() {
    let engine = engine_with(sofa_and_chair());
    let result = smart(&engine, "leather");

    assert_eq!(names(&result), vec!["Leather Sofa"]);
    // name + "leather" tag + leather material keyword
    assert_score(result.items[0].score, NAME_WEIGHT + TAG_WEIGHT + MATERIAL_WEIGHT);
    assert_eq!(result.status_message, "Found 1 result for 'leather'");
}

#[test]
fn test_price_filter_excludes_the_only_match() {
    let engine = engine_with(sofa_and_chair());
    let request = SearchRequest::new("sofa").with_price_range(0.0, 500.0);
    let result = engine.search(&request, true);

    assert!(result.is_empty());
    assert_eq!(result.status_message, "No results found for 'sofa'");
}

#[test]
fn test_misspelled_query_still_finds_sofa() {
    let engine = engine_with(sofa_and_chair());
    let result = smart(&engine, "Leathr Sofa");

    assert_eq!(names(&result), vec!["Leather Sofa"]);
    // "sofa" as a general term, plus the fuzzy bonus: one edit over 12 chars
    let expected = GENERAL_TERM_WEIGHT + FUZZY_WEIGHT * (1.0 - 1.0 / 12.0);
    assert_score(result.items[0].score, expected);
}

#[test]
fn test_misspelling_without_fuzzy_loses_the_bonus() {
    let engine = engine_with(sofa_and_chair()).with_fuzzy_matching(false);
    let result = smart(&engine, "Leathr Sofa");

    assert_eq!(names(&result), vec!["Leather Sofa"]);
    assert_score(result.items[0].score, GENERAL_TERM_WEIGHT);
}

#[test]
fn test_style_keyword_on_chair() {
    let engine = engine_with(sofa_and_chair());
    let result = smart(&engine, "modern");

    assert_eq!(names(&result), vec!["Modern Chair"]);
    assert_score(result.items[0].score, NAME_WEIGHT + TAG_WEIGHT + STYLE_WEIGHT);
}

#[test]
fn test_blank_query_is_ready() {
    let engine = engine_with(sofa_and_chair());
    for text in ["", "   ", "\t\n"] {
        let result = smart(&engine, text);
        assert!(result.is_empty(), "{:?} should match nothing", text);
        assert_eq!(result.status_message, READY_STATUS);
    }
}

#[test]
fn test_case_does_not_matter() {
    let engine = engine_with(sofa_and_chair());
    let lower = smart(&engine, "leather");
    let upper = smart(&engine, "LEATHER");
    assert_eq!(lower.items, upper.items);
}
