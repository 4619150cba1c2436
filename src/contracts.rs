// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the ranking pipeline.
//!
//! Debug-mode assertions over the properties every search must satisfy.
//! They compile to nothing in release builds.
//!
//! | Contract                   | Property                                         |
//! |----------------------------|--------------------------------------------------|
//! | `check_ranked_output`      | scores non-increasing, ties in catalog order     |
//! |                            | no zero scores, at most `max_results` items      |
//! | `check_similarity_bounds`  | similarity lies in `[0, 1]`                      |
//! | `check_score_non_negative` | no signal ever subtracts                         |

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

use crate::fuzzy::FUZZY_THRESHOLD;
use crate::scoring::{
    BRAND_WEIGHT, COLOR_WEIGHT, DESCRIPTION_WEIGHT, FUZZY_WEIGHT, GENERAL_TERM_WEIGHT,
    MATERIAL_WEIGHT, NAME_WEIGHT, SIZE_WEIGHT, STYLE_WEIGHT, TAG_WEIGHT,
};
use crate::types::ScoredCandidate;

const _: () = {
    // A typo-only match (fuzzy bonus at most FUZZY_WEIGHT) never outranks a
    // literal brand hit, the weakest fixed signal.
    assert!(FUZZY_WEIGHT < BRAND_WEIGHT);
    assert!(BRAND_WEIGHT < GENERAL_TERM_WEIGHT);

    // Whole-query name match outranks any single other fixed signal.
    assert!(NAME_WEIGHT > DESCRIPTION_WEIGHT);
    assert!(NAME_WEIGHT > COLOR_WEIGHT);
    assert!(NAME_WEIGHT > MATERIAL_WEIGHT);
    assert!(NAME_WEIGHT > TAG_WEIGHT);
    assert!(NAME_WEIGHT > STYLE_WEIGHT);
    assert!(NAME_WEIGHT > SIZE_WEIGHT);

    // Fuzzy bonus is never paid below the threshold, so it is strictly positive.
    assert!(FUZZY_THRESHOLD > 0.0 && FUZZY_THRESHOLD < 1.0);
};

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// Check that a ranked list is sorted, stable, capped and zero-free.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order, a score is not positive, or
/// the list is longer than `max_results`.
#[inline]
pub fn check_ranked_output(ranked: &[ScoredCandidate<'_>], max_results: usize) {
    debug_assert!(
        ranked.len() <= max_results,
        "ranked output has {} items, cap is {}",
        ranked.len(),
        max_results
    );
    debug_assert!(
        ranked.iter().all(|c| c.score > 0.0),
        "zero-score candidate in ranked output"
    );
    debug_assert!(
        ranked.windows(2).all(|w| {
            w[0].score > w[1].score || (w[0].score == w[1].score && w[0].position < w[1].position)
        }),
        "ranked output not sorted by (score desc, position asc)"
    );
}

/// Check that a similarity lies in `[0, 1]`.
#[inline]
pub fn check_similarity_bounds(similarity: f64) {
    debug_assert!(
        (0.0..=1.0).contains(&similarity),
        "similarity {} outside [0, 1]",
        similarity
    );
}

/// Check that a score is finite and non-negative.
#[inline]
pub fn check_score_non_negative(score: f64) {
    debug_assert!(
        score.is_finite() && score >= 0.0,
        "score {} is negative or not finite",
        score
    );
}
