// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix suggestions for a search box.
//!
//! Three sources, in priority order:
//! 1. search history entries (most recent first)
//! 2. catalog display names (catalog order)
//! 3. a fixed list of popular terms
//!
//! Prefix tests are case-insensitive. Deduplication is exact, so "Modern Chair"
//! and "modern chair" are both kept if both occur. The first five survive.

use crate::catalog::Catalog;

pub const MAX_SUGGESTIONS: usize = 5;

/// Terms offered regardless of catalog contents.
pub const POPULAR_TERMS: [&str; 9] = [
    "chair", "table", "sofa", "bed", "lamp", "shelf", "modern", "leather", "wood",
];

/// Suggestions for `prefix`, at most [`MAX_SUGGESTIONS`].
pub fn suggest<H>(prefix: &str, history: H, catalog: &Catalog) -> Vec<String>
where
    H: IntoIterator,
    H::Item: AsRef<str>,
{
    let prefix = prefix.to_lowercase();
    let mut out: Vec<String> = Vec::with_capacity(MAX_SUGGESTIONS);
    let mut offer = |candidate: &str| {
        if out.len() < MAX_SUGGESTIONS && !out.iter().any(|s| s == candidate) {
            out.push(candidate.to_string());
        }
    };

    for entry in history {
        let entry = entry.as_ref();
        if entry.to_lowercase().starts_with(&prefix) {
            offer(entry);
        }
    }
    for (item, folded) in catalog.iter() {
        if folded.name.starts_with(&prefix) {
            offer(&item.display_name);
        }
    }
    for term in POPULAR_TERMS {
        if term.starts_with(&prefix) {
            offer(term);
        }
    }

    out
}
