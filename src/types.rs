// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog search.
//!
//! Items come from an external catalog provider and are never mutated here.
//! Requests are built per search call. Results own clones of the matched items
//! so they stay valid after the catalog is swapped out underneath them.
//!
//! # Invariants
//!
//! - **CatalogItem**: `price >= 0` and every size component is `>= 0`. The
//!   engine only reads these, it never validates them.
//! - **SearchResult**: `items.len() <= max_results`, scores non-increasing,
//!   every score `> 0`. Checked in debug builds by `contracts`.

use crate::error::UnknownCategory;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default cap on the number of results a request returns.
pub const DEFAULT_MAX_RESULTS: usize = 20;

// =============================================================================
// CATALOG ITEMS
// =============================================================================

/// Closed set of furniture categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FurnitureCategory {
    Seating,
    Tables,
    Storage,
    Lighting,
    Decor,
    Appliances,
    Bedroom,
    Kitchen,
    Bathroom,
    Miscellaneous,
}

impl FurnitureCategory {
    pub const ALL: [FurnitureCategory; 10] = [
        FurnitureCategory::Seating,
        FurnitureCategory::Tables,
        FurnitureCategory::Storage,
        FurnitureCategory::Lighting,
        FurnitureCategory::Decor,
        FurnitureCategory::Appliances,
        FurnitureCategory::Bedroom,
        FurnitureCategory::Kitchen,
        FurnitureCategory::Bathroom,
        FurnitureCategory::Miscellaneous,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FurnitureCategory::Seating => "seating",
            FurnitureCategory::Tables => "tables",
            FurnitureCategory::Storage => "storage",
            FurnitureCategory::Lighting => "lighting",
            FurnitureCategory::Decor => "decor",
            FurnitureCategory::Appliances => "appliances",
            FurnitureCategory::Bedroom => "bedroom",
            FurnitureCategory::Kitchen => "kitchen",
            FurnitureCategory::Bathroom => "bathroom",
            FurnitureCategory::Miscellaneous => "miscellaneous",
        }
    }
}

impl fmt::Display for FurnitureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FurnitureCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        FurnitureCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Approximate bounding size of an item, as `[x, y, z]`.
///
/// Serializes as a plain three-element array so catalog JSON and keyword
/// config can both write `[1.5, 1.5, 1.5]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dimensions(pub [f64; 3]);

impl Dimensions {
    pub const UNIT: Dimensions = Dimensions([1.0, 1.0, 1.0]);

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Dimensions([x, y, z])
    }

    /// Same value on every axis.
    pub fn cube(side: f64) -> Self {
        Dimensions([side, side, side])
    }

    /// Euclidean distance between two sizes.
    pub fn distance(&self, other: &Dimensions) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Dimensions::UNIT
    }
}

fn default_available() -> bool {
    true
}

/// `null` reads the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One entry of the furniture catalog.
///
/// Missing or `null` `description`, `tags` or `brand` in JSON deserialize to
/// empty, and
/// contribute nothing to scoring rather than failing the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub display_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub category: FurnitureCategory,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(default)]
    pub approximate_size: Dimensions,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

// =============================================================================
// REQUESTS
// =============================================================================

/// Inclusive price bounds. A range with `min > max` admits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        PriceRange { min, max }
    }

    #[inline]
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

/// A single search call: the text plus structured filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub text: String,
    pub price_range: Option<PriceRange>,
    pub category: Option<FurnitureCategory>,
    pub available_only: bool,
    pub max_results: usize,
}

impl SearchRequest {
    pub fn new(text: impl Into<String>) -> Self {
        SearchRequest {
            text: text.into(),
            price_range: None,
            category: None,
            available_only: false,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = Some(PriceRange::new(min, max));
        self
    }

    pub fn with_category(mut self, category: FurnitureCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn available_only(mut self) -> Self {
        self.available_only = true;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Same filters, different text.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        SearchRequest {
            text: text.into(),
            ..self.clone()
        }
    }
}

impl Default for SearchRequest {
    fn default() -> Self {
        SearchRequest::new("")
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// An item that scored above zero, before filtering.
///
/// `position` is the item's index in the catalog snapshot and is the
/// tiebreaker that keeps ranking deterministic.
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    pub position: usize,
    pub item: &'a CatalogItem,
    pub score: f64,
}

/// A ranked result with the score it was ranked by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedItem {
    pub item: CatalogItem,
    pub score: f64,
}

/// What `search` hands back: the ranked items and a human-readable status.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResult {
    pub items: Vec<RankedItem>,
    pub status_message: String,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn display_names(&self) -> Vec<&str> {
        self.items
            .iter()
            .map(|r| r.item.display_name.as_str())
            .collect()
    }
}
