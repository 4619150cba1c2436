// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Built-in keyword tables.
//!
//! Used whenever a category table is empty at construction time. Changing an
//! entry here changes scores for every deployment without a config override,
//! so the tests below pin the parts the ranking tests depend on.
//!
//! Note that "extra large" contains a space and can never match a single
//! whitespace-separated query token. Its synonyms ("xl", "huge", "massive")
//! are what actually fire.

use super::{KeywordCategory, KeywordEntry};
use crate::types::Dimensions;

/// Built-in entries for one category.
pub fn for_category(category: KeywordCategory) -> Vec<KeywordEntry> {
    match category {
        KeywordCategory::Color => colors(),
        KeywordCategory::Material => materials(),
        KeywordCategory::Style => styles(),
        KeywordCategory::Size => sizes(),
    }
}

pub fn colors() -> Vec<KeywordEntry> {
    vec![
        KeywordEntry::color("black", ["dark", "ebony", "charcoal"]).with_swatch([0.0, 0.0, 0.0]),
        KeywordEntry::color("white", ["ivory", "cream", "pearl"]).with_swatch([1.0, 1.0, 1.0]),
        KeywordEntry::color("brown", ["tan", "beige", "walnut", "oak"]).with_swatch([0.6, 0.4, 0.2]),
        KeywordEntry::color("red", ["crimson", "burgundy", "cherry"]).with_swatch([1.0, 0.0, 0.0]),
        KeywordEntry::color("blue", ["navy", "azure", "sapphire"]).with_swatch([0.0, 0.0, 1.0]),
        KeywordEntry::color("green", ["emerald", "forest", "olive"]).with_swatch([0.0, 1.0, 0.0]),
        KeywordEntry::color("grey", ["gray", "silver", "slate"]).with_swatch([0.5, 0.5, 0.5]),
        KeywordEntry::color("yellow", ["gold", "amber", "brass"]).with_swatch([1.0, 0.92, 0.016]),
    ]
}

pub fn materials() -> Vec<KeywordEntry> {
    vec![
        KeywordEntry::material("leather", ["hide", "suede"], ["leather", "luxury"]),
        KeywordEntry::material(
            "wood",
            ["wooden", "timber", "oak", "pine", "mahogany"],
            ["wood", "wooden", "natural"],
        ),
        KeywordEntry::material(
            "metal",
            ["steel", "iron", "aluminum", "chrome"],
            ["metal", "metallic", "steel"],
        ),
        KeywordEntry::material(
            "fabric",
            ["cloth", "textile", "upholstered"],
            ["fabric", "soft", "textile"],
        ),
        KeywordEntry::material(
            "glass",
            ["crystal", "transparent"],
            ["glass", "transparent", "crystal"],
        ),
        KeywordEntry::material("plastic", ["synthetic", "polymer"], ["plastic", "synthetic"]),
    ]
}

pub fn styles() -> Vec<KeywordEntry> {
    vec![
        KeywordEntry::style(
            "modern",
            ["contemporary", "sleek", "minimalist"],
            ["modern", "contemporary"],
        ),
        KeywordEntry::style("vintage", ["retro", "classic", "antique"], ["vintage", "classic"]),
        KeywordEntry::style("industrial", ["rustic", "urban"], ["industrial", "rustic"]),
        KeywordEntry::style(
            "luxury",
            ["premium", "high-end", "elegant"],
            ["luxury", "premium"],
        ),
        KeywordEntry::style("comfortable", ["cozy", "soft", "plush"], ["comfort", "soft"]),
    ]
}

pub fn sizes() -> Vec<KeywordEntry> {
    vec![
        KeywordEntry::size("small", ["compact", "mini", "tiny"], Dimensions::cube(1.0), 0.5),
        KeywordEntry::size("medium", ["mid-size", "standard"], Dimensions::cube(1.5), 0.5),
        KeywordEntry::size("large", ["big", "oversized", "jumbo"], Dimensions::cube(2.0), 0.7),
        KeywordEntry::size("extra large", ["xl", "huge", "massive"], Dimensions::cube(3.0), 1.0),
    ]
}
