// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog snapshots.
//!
//! A [`Catalog`] is immutable once built. The engine holds it behind an `Arc`
//! and every search clones the `Arc` up front, so a reload mid-search swaps
//! the pointer and never touches the items being scored.
//!
//! Folded (lower-cased) text is computed once per item at build time and
//! kept parallel to the items.

use crate::error::{Error, Result};
use crate::scoring::FoldedItem;
use crate::types::CatalogItem;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Price bounds reported for an empty catalog.
pub const EMPTY_PRICE_BOUNDS: (f64, f64) = (0.0, 2000.0);

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    folded: Vec<FoldedItem>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        let folded = items.iter().map(FoldedItem::new).collect();
        debug!(items = items.len(), "catalog built");
        Catalog { items, folded }
    }

    /// Load a JSON array of items from disk.
    ///
    /// Missing optional fields (description, tags, brand, size, availability)
    /// take their defaults. A missing required field is a format error.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let items: Vec<CatalogItem> =
            serde_json::from_str(&content).map_err(|source| Error::CatalogFormat {
                path: path.to_path_buf(),
                source,
            })?;
        info!(path = %path.display(), items = items.len(), "catalog loaded");
        Ok(Catalog::new(items))
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items paired with their folded text, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&CatalogItem, &FoldedItem)> {
        self.items.iter().zip(&self.folded)
    }

    pub(crate) fn folded(&self) -> &[FoldedItem] {
        &self.folded
    }

    /// `(min, max)` price across the catalog, for seeding a price slider.
    ///
    /// An empty catalog reports [`EMPTY_PRICE_BOUNDS`].
    pub fn price_bounds(&self) -> (f64, f64) {
        let mut prices = self.items.iter().map(|i| i.price);
        let Some(first) = prices.next() else {
            return EMPTY_PRICE_BOUNDS;
        };
        prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)))
    }
}

impl From<Vec<CatalogItem>> for Catalog {
    fn from(items: Vec<CatalogItem>) -> Self {
        Catalog::new(items)
    }
}
