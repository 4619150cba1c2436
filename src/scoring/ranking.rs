// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored candidates become the result list.
//!
//! The pipeline runs in a fixed order: sort, then filter, then truncate.
//! Filters run after the sort so truncation always keeps the highest-scoring
//! candidates that pass every filter.
//!
//! # Invariants
//!
//! - Output scores are non-increasing.
//! - Equal scores keep catalog order (the sort is stable and the final
//!   tiebreaker is catalog position).
//! - `output.len() <= request.max_results`.
//! - Zero-score candidates never reach this stage. The caller drops them.

use crate::types::{CatalogItem, ScoredCandidate, SearchRequest};
use std::cmp::Ordering;

/// Compare two candidates for ranking.
///
/// Sort order:
/// 1. **Score**: descending, higher wins
/// 2. **Catalog position**: ascending, for determinism
///
/// Scores are never NaN (every signal is a finite sum of finite weights), but
/// an incomparable pair falls through to position rather than panicking.
pub fn compare_candidates(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.position.cmp(&b.position),
    }
}

/// Does `item` pass every filter set on `request`?
///
/// Price bounds are inclusive. A range with `min > max` admits nothing.
pub fn passes_filters(item: &CatalogItem, request: &SearchRequest) -> bool {
    if let Some(range) = &request.price_range {
        if !range.contains(item.price) {
            return false;
        }
    }
    if let Some(category) = request.category {
        if item.category != category {
            return false;
        }
    }
    !request.available_only || item.is_available
}

/// Sort, filter and truncate scored candidates.
pub fn rank<'a>(
    mut candidates: Vec<ScoredCandidate<'a>>,
    request: &SearchRequest,
) -> Vec<ScoredCandidate<'a>> {
    candidates.sort_by(compare_candidates);

    candidates
        .into_iter()
        .filter(|c| passes_filters(c.item, request))
        .take(request.max_results)
        .collect()
}
