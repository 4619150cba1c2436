// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The weighted-signal relevance model.
//!
//! Every signal is independent and additive. An item's score is the sum of the
//! weights of the signals that fired, and an item that fires nothing scores
//! exactly 0.0 and is never a candidate.
//!
//! # Signals
//!
//! | Signal      | Fires when                                         | Weight            |
//! |-------------|----------------------------------------------------|-------------------|
//! | Name        | query ⊂ display name                                | 100               |
//! | Description | query ⊂ description                                 | 50                |
//! | Tag         | query ⊂ tag                                         | 30 per tag        |
//! | Color       | keyword term/synonym/related ⊂ any tag              | 40 per keyword    |
//! | Material    | same                                                | 35 per keyword    |
//! | Style       | same                                                | 25 per keyword    |
//! | Size        | ‖item size − keyword size‖ ≤ tolerance              | 20·(1 − d/tol)    |
//! | General     | token ⊂ name, description or any tag                | 15 per token      |
//! | Brand       | query ⊂ brand (non-empty brand)                     | 10                |
//! | Fuzzy       | similarity(name, query) > 0.6, when enabled         | 5·similarity      |
//!
//! "⊂" is a case-insensitive substring test. "query" is the whole trimmed,
//! lower-cased query text, not individual tokens.
//!
//! The fuzzy bonus is capped at 5, below the smallest fixed-weight signal
//! (brand, 10). A typo-only match therefore never outranks an item that
//! matched anything literally, except through the sliding size signal.

use crate::contracts::check_score_non_negative;
use crate::fuzzy::fuzzy_match;
use crate::query::ParsedQuery;
use crate::taxonomy::{KeywordCategory, KeywordEntry, KeywordPayload};
use crate::types::{CatalogItem, Dimensions};
use serde::Serialize;

// =============================================================================
// SIGNAL WEIGHTS
// =============================================================================

pub const NAME_WEIGHT: f64 = 100.0;
pub const DESCRIPTION_WEIGHT: f64 = 50.0;
pub const TAG_WEIGHT: f64 = 30.0;
pub const COLOR_WEIGHT: f64 = 40.0;
pub const MATERIAL_WEIGHT: f64 = 35.0;
pub const STYLE_WEIGHT: f64 = 25.0;
/// Maximum size bonus, paid for an exact size match.
pub const SIZE_WEIGHT: f64 = 20.0;
pub const GENERAL_TERM_WEIGHT: f64 = 15.0;
pub const BRAND_WEIGHT: f64 = 10.0;
/// Multiplier on the similarity, so the bonus lies in (3.0, 5.0].
pub const FUZZY_WEIGHT: f64 = 5.0;

/// Score given to every match in basic (non-smart) mode.
pub const BASIC_MATCH_SCORE: f64 = 1.0;

/// Weight of a tag-matched keyword category. Size is not tag-matched.
pub fn keyword_weight(category: KeywordCategory) -> f64 {
    match category {
        KeywordCategory::Color => COLOR_WEIGHT,
        KeywordCategory::Material => MATERIAL_WEIGHT,
        KeywordCategory::Style => STYLE_WEIGHT,
        KeywordCategory::Size => SIZE_WEIGHT,
    }
}

// =============================================================================
// FOLDED ITEM TEXT
// =============================================================================

/// Lower-cased copies of an item's searchable text.
///
/// Built once per item when a catalog is loaded, so a search over N items
/// does N·signals substring tests and zero allocations for case folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldedItem {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub brand: String,
}

impl FoldedItem {
    pub fn new(item: &CatalogItem) -> Self {
        FoldedItem {
            name: item.display_name.to_lowercase(),
            description: item.description.to_lowercase(),
            tags: item.tags.iter().map(|t| t.to_lowercase()).collect(),
            brand: item.brand.to_lowercase(),
        }
    }

    #[inline]
    fn any_tag_contains(&self, needle: &str) -> bool {
        self.tags.iter().any(|tag| tag.contains(needle))
    }

    #[inline]
    fn text_contains(&self, needle: &str) -> bool {
        self.name.contains(needle) || self.description.contains(needle) || self.any_tag_contains(needle)
    }
}

// =============================================================================
// SCORING
// =============================================================================

/// Per-signal contributions for one item against one query.
///
/// `total()` is the relevance score. The breakdown exists so callers (and the
/// CLI's `--explain`) can see why an item ranked where it did.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreBreakdown {
    pub name: f64,
    pub description: f64,
    pub tags: f64,
    pub color: f64,
    pub material: f64,
    pub style: f64,
    pub size: f64,
    pub general: f64,
    pub brand: f64,
    pub fuzzy: f64,
}

impl ScoreBreakdown {
    /// Sum of all signals, always in the same order so repeated searches
    /// produce bit-identical scores.
    pub fn total(&self) -> f64 {
        self.name
            + self.description
            + self.tags
            + self.color
            + self.material
            + self.style
            + self.size
            + self.general
            + self.brand
            + self.fuzzy
    }

    /// Signals that fired, by name, in table order.
    pub fn fired(&self) -> Vec<(&'static str, f64)> {
        [
            ("name", self.name),
            ("description", self.description),
            ("tags", self.tags),
            ("color", self.color),
            ("material", self.material),
            ("style", self.style),
            ("size", self.size),
            ("general", self.general),
            ("brand", self.brand),
            ("fuzzy", self.fuzzy),
        ]
        .into_iter()
        .filter(|(_, v)| *v > 0.0)
        .collect()
    }
}

/// Does any of the keyword's terms appear inside any item tag?
#[inline]
fn keyword_hits_tags(entry: &KeywordEntry, folded: &FoldedItem) -> bool {
    entry.match_terms().any(|term| folded.any_tag_contains(term))
}

/// Size signal for one keyword: linear falloff from `SIZE_WEIGHT` at an exact
/// match to 0 at the tolerance boundary.
///
/// A zero tolerance pays the full weight on an exact match and nothing
/// otherwise, instead of dividing by zero.
pub fn size_signal(entry: &KeywordEntry, size: &Dimensions) -> f64 {
    let KeywordPayload::Size {
        approximate_size,
        tolerance,
    } = &entry.payload
    else {
        return 0.0;
    };

    let distance = size.distance(approximate_size);
    if distance > *tolerance {
        0.0
    } else if *tolerance == 0.0 {
        SIZE_WEIGHT
    } else {
        SIZE_WEIGHT * (1.0 - distance / tolerance)
    }
}

/// Full signal breakdown using precomputed folded text.
pub fn breakdown(
    item: &CatalogItem,
    folded: &FoldedItem,
    query: &ParsedQuery<'_>,
    fuzzy_enabled: bool,
) -> ScoreBreakdown {
    let mut signals = ScoreBreakdown::default();

    // The empty string is a substring of everything; an empty query matches nothing.
    if query.is_empty() {
        return signals;
    }
    let text = query.raw_text.as_str();

    if folded.name.contains(text) {
        signals.name = NAME_WEIGHT;
    }
    if folded.description.contains(text) {
        signals.description = DESCRIPTION_WEIGHT;
    }
    signals.tags = TAG_WEIGHT * folded.tags.iter().filter(|tag| tag.contains(text)).count() as f64;

    let tag_signal = |category: KeywordCategory| -> f64 {
        query
            .matches(category)
            .iter()
            .filter(|entry| keyword_hits_tags(entry, folded))
            .count() as f64
            * keyword_weight(category)
    };
    signals.color = tag_signal(KeywordCategory::Color);
    signals.material = tag_signal(KeywordCategory::Material);
    signals.style = tag_signal(KeywordCategory::Style);

    signals.size = query
        .matched_sizes
        .iter()
        .map(|entry| size_signal(entry, &item.approximate_size))
        .sum();

    signals.general = GENERAL_TERM_WEIGHT
        * query
            .general_terms
            .iter()
            .filter(|term| folded.text_contains(term))
            .count() as f64;

    if !folded.brand.is_empty() && folded.brand.contains(text) {
        signals.brand = BRAND_WEIGHT;
    }

    if fuzzy_enabled {
        if let Some(sim) = fuzzy_match(&folded.name, text) {
            signals.fuzzy = FUZZY_WEIGHT * sim;
        }
    }

    signals
}

/// Relevance of `item` for `query` in smart mode.
pub fn score(item: &CatalogItem, query: &ParsedQuery<'_>, fuzzy_enabled: bool) -> f64 {
    score_folded(item, &FoldedItem::new(item), query, fuzzy_enabled)
}

/// Relevance of `item` for `query`, reusing precomputed folded text.
#[inline]
pub fn score_folded(
    item: &CatalogItem,
    folded: &FoldedItem,
    query: &ParsedQuery<'_>,
    fuzzy_enabled: bool,
) -> f64 {
    let score = breakdown(item, folded, query, fuzzy_enabled).total();
    check_score_non_negative(score);
    score
}

/// Basic mode: plain substring inclusion against name, description and tags.
///
/// No weighting. Every match scores [`BASIC_MATCH_SCORE`], so ranking falls
/// back to catalog order.
pub fn basic_score(folded: &FoldedItem, raw_text: &str) -> f64 {
    let text = raw_text.trim().to_lowercase();
    if !text.is_empty() && folded.text_contains(&text) {
        BASIC_MATCH_SCORE
    } else {
        0.0
    }
}
