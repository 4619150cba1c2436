// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Price, category and availability filters applied by the engine.

use crate::common::{engine_with, names, sample_catalog, sample_engine};
use settee::{FurnitureCategory, SearchRequest};

#[test]
fn test_category_filter() {
    let request = SearchRequest::new("storage").with_category(FurnitureCategory::Storage);
    let result = sample_engine().search(&request, true);

    assert_eq!(names(&result), vec!["Large Wardrobe", "Wooden Bookshelf"]);
}

#[test]
fn test_category_filter_can_empty_results() {
    let request = SearchRequest::new("leather").with_category(FurnitureCategory::Kitchen);
    let result = sample_engine().search(&request, true);

    assert!(result.is_empty());
    assert_eq!(result.status_message, "No results found for 'leather'");
}

#[test]
fn test_price_bounds_are_inclusive() {
    let request = SearchRequest::new("modern").with_price_range(199.99, 299.99);
    let result = sample_engine().search(&request, true);

    assert_eq!(names(&result), vec!["Modern Chair", "Modern Floor Lamp"]);
}

#[test]
fn test_inverted_price_range_matches_nothing() {
    let request = SearchRequest::new("modern").with_price_range(1000.0, 10.0);
    assert!(sample_engine().search(&request, true).is_empty());
}

#[test]
fn test_available_only() {
    let mut items = sample_catalog();
    for item in &mut items {
        if item.id == "modern-chair" {
            item.is_available = false;
        }
    }
    let engine = engine_with(items);

    let everything = engine.search(&SearchRequest::new("modern"), true);
    assert_eq!(everything.len(), 3);

    let in_stock = engine.search(&SearchRequest::new("modern").available_only(), true);
    assert_eq!(names(&in_stock), vec!["Modern Floor Lamp", "Glass Coffee Table"]);
}

#[test]
fn test_filters_also_apply_in_basic_mode() {
    let request = SearchRequest::new("table").with_category(FurnitureCategory::Tables);
    let result = sample_engine().search(&request, false);

    assert_eq!(names(&result), vec!["Dining Table", "Glass Coffee Table"]);
}
