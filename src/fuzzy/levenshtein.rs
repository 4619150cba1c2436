// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and the normalized similarity built on it.
//!
//! Distances are counted in Unicode scalar values, not bytes, so "café" and
//! "cafe" are one edit apart rather than two.
//!
//! Similarity is `1 - distance / max_len`. It hits 1.0 for equal strings and
//! 0.0 for completely different strings of equal length. Two empty strings are
//! defined as 0.0 rather than 1.0. An empty name and an empty query are not a
//! match, and this avoids a division by zero.

use crate::contracts::check_similarity_bounds;

/// Similarities at or below this value count as "no fuzzy match".
pub const FUZZY_THRESHOLD: f64 = 0.6;

/// Unit-cost Levenshtein distance (insert, delete, substitute).
///
/// Two-row DP over chars, O(n·m) time and O(m) space. Case-sensitive. Callers
/// that want case folding go through [`similarity`].
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for (i, ac) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

/// Case-insensitive similarity in `[0, 1]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 0.0;
    }

    let distance = edit_distance(&a, &b);
    let sim = 1.0 - distance as f64 / max_len as f64;
    check_similarity_bounds(sim);
    sim
}

/// The similarity if it clears [`FUZZY_THRESHOLD`], otherwise `None`.
///
/// Below-threshold values are discarded outright. A 0.55 similarity is not
/// "a bit of a match", it is no match.
#[inline]
pub fn fuzzy_match(a: &str, b: &str) -> Option<f64> {
    let sim = similarity(a, b);
    (sim > FUZZY_THRESHOLD).then_some(sim)
}
