// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One test per signal, each on an item built so only that signal fires.

use crate::common::{assert_score, engine_with, make_item, names, sample_engine, smart};
use settee::{
    CatalogItem, Dimensions, BRAND_WEIGHT, COLOR_WEIGHT, GENERAL_TERM_WEIGHT, MATERIAL_WEIGHT,
    SIZE_WEIGHT,
};

fn sized(id: &str, name: &str, size: Dimensions) -> CatalogItem {
    CatalogItem {
        approximate_size: size,
        ..make_item(id, name, &[])
    }
}

#[test]
fn test_color_synonym_in_tag() {
    let engine = engine_with(vec![
        make_item("a", "Side Table", &["charcoal"]),
        make_item("b", "Stool", &["pine"]),
    ]);
    let result = smart(&engine, "black");

    assert_eq!(names(&result), vec!["Side Table"]);
    assert_score(result.items[0].score, COLOR_WEIGHT);
}

#[test]
fn test_color_and_material_both_fire() {
    let engine = engine_with(vec![make_item("a", "Bookcase", &["ebony", "wooden"])]);
    let result = smart(&engine, "dark wood");

    assert_score(result.items[0].score, COLOR_WEIGHT + MATERIAL_WEIGHT);
}

#[test]
fn test_size_exact_match_pays_full_weight() {
    let engine = engine_with(vec![
        sized("a", "Crate", Dimensions::cube(2.0)),
        sized("b", "Box", Dimensions::UNIT),
    ]);
    let result = smart(&engine, "big");

    assert_eq!(names(&result), vec!["Crate"]);
    assert_score(result.items[0].score, SIZE_WEIGHT);
}

#[test]
fn test_size_falls_off_linearly() {
    let engine = engine_with(vec![sized("a", "Crate", Dimensions::cube(2.2))]);
    let result = smart(&engine, "large");

    // "large" is cube(2.0) with tolerance 0.7
    let distance = (3.0 * 0.2_f64 * 0.2).sqrt();
    assert_score(result.items[0].score, SIZE_WEIGHT * (1.0 - distance / 0.7));
}

#[test]
fn test_size_outside_tolerance_scores_nothing() {
    let engine = engine_with(vec![sized("a", "Crate", Dimensions::cube(5.0))]);
    assert!(smart(&engine, "small").is_empty());
}

#[test]
fn test_general_terms_each_count() {
    let result = smart(&sample_engine(), "wardrobe compartments");

    assert_eq!(names(&result), vec!["Large Wardrobe"]);
    assert_score(result.items[0].score, 2.0 * GENERAL_TERM_WEIGHT);
}

#[test]
fn test_brand_alone() {
    let result = smart(&sample_engine(), "sleep well");

    assert_eq!(names(&result), vec!["Queen Size Bed"]);
    assert_score(result.items[0].score, BRAND_WEIGHT);
}

#[test]
fn test_item_with_no_text_never_matches() {
    let engine = engine_with(vec![make_item("a", "", &[])]);
    assert!(smart(&engine, "chair").is_empty());
}
