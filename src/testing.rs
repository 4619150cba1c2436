// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixtures shared across unit tests, integration tests, benches and the CLI.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::{CatalogItem, Dimensions, FurnitureCategory};

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    display_name: &str,
    description: &str,
    category: FurnitureCategory,
    price: f64,
    brand: &str,
    tags: &[&str],
) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        display_name: display_name.to_string(),
        description: description.to_string(),
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        price,
        brand: brand.to_string(),
        approximate_size: Dimensions::UNIT,
        is_available: true,
    }
}

/// The eight-item demo catalog. All items are unit-sized and available.
pub fn sample_catalog() -> Vec<CatalogItem> {
    use FurnitureCategory::*;
    vec![
        item(
            "modern-chair",
            "Modern Chair",
            "A comfortable modern chair for your living room",
            Seating,
            299.99,
            "ModernFurniture Co.",
            &["chair", "modern", "comfort"],
        ),
        item(
            "dining-table",
            "Dining Table",
            "Elegant dining table for family meals",
            Tables,
            799.99,
            "Classic Furniture",
            &["table", "dining", "family"],
        ),
        item(
            "leather-sofa",
            "Leather Sofa",
            "Luxurious leather sofa with premium comfort",
            Seating,
            1499.99,
            "Luxury Living",
            &["sofa", "leather", "luxury"],
        ),
        item(
            "wooden-bookshelf",
            "Wooden Bookshelf",
            "Spacious wooden bookshelf for your books and decorations",
            Storage,
            399.99,
            "Wood Craft",
            &["bookshelf", "storage", "wood"],
        ),
        item(
            "floor-lamp",
            "Modern Floor Lamp",
            "Stylish floor lamp with adjustable brightness",
            Lighting,
            199.99,
            "Light Design",
            &["lamp", "lighting", "modern"],
        ),
        item(
            "coffee-table",
            "Glass Coffee Table",
            "Modern glass coffee table with metal legs",
            Tables,
            459.99,
            "Glass & Metal Co.",
            &["table", "coffee", "glass"],
        ),
        item(
            "queen-bed",
            "Queen Size Bed",
            "Comfortable queen size bed with upholstered headboard",
            Bedroom,
            899.99,
            "Sleep Well",
            &["bed", "bedroom", "queen"],
        ),
        item(
            "large-wardrobe",
            "Large Wardrobe",
            "Spacious wardrobe with multiple compartments",
            Storage,
            1299.99,
            "Storage Solutions",
            &["wardrobe", "storage", "clothes"],
        ),
    ]
}

/// A bare item: no description or brand, Miscellaneous, price 100, unit size.
pub fn make_item(id: &str, display_name: &str, tags: &[&str]) -> CatalogItem {
    item(
        id,
        display_name,
        "",
        FurnitureCategory::Miscellaneous,
        100.0,
        "",
        tags,
    )
}

/// A bare item with a price.
pub fn make_priced_item(id: &str, display_name: &str, tags: &[&str], price: f64) -> CatalogItem {
    CatalogItem {
        price,
        ..make_item(id, display_name, tags)
    }
}

/// Two-item catalog: a leather sofa and a modern chair, names, tags and
/// prices only.
pub fn sofa_and_chair() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            category: FurnitureCategory::Seating,
            ..make_priced_item("sofa", "Leather Sofa", &["sofa", "leather", "luxury"], 1499.99)
        },
        CatalogItem {
            category: FurnitureCategory::Seating,
            ..make_priced_item("chair", "Modern Chair", &["chair", "modern", "comfort"], 299.99)
        },
    ]
}
