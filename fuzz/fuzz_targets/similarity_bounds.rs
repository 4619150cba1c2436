// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and similarity.
//!
//! Arbitrary Unicode on both sides. Similarity must stay in [0, 1], be
//! symmetric, and agree with the distance it is derived from.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use settee::{edit_distance, fuzzy_match, similarity, FUZZY_THRESHOLD};

#[derive(Debug, Arbitrary)]
struct PairInput {
    a: String,
    b: String,
}

/// Keep inputs short enough that O(n·m) never times out.
fn cap(s: &str) -> String {
    s.chars().take(64).collect()
}

fuzz_target!(|input: PairInput| {
    let a = cap(&input.a);
    let b = cap(&input.b);

    // INVARIANT 1: distance is symmetric and zero on identity
    let d = edit_distance(&a, &b);
    assert_eq!(d, edit_distance(&b, &a), "distance not symmetric");
    assert_eq!(edit_distance(&a, &a), 0);

    // INVARIANT 2: distance bounded by the longer string
    let longest = a.chars().count().max(b.chars().count());
    assert!(d <= longest, "distance {} exceeds longest length {}", d, longest);

    // INVARIANT 3: similarity in [0, 1] and symmetric
    let sim = similarity(&a, &b);
    assert!((0.0..=1.0).contains(&sim), "similarity {} out of bounds", sim);
    assert_eq!(sim, similarity(&b, &a), "similarity not symmetric");

    // INVARIANT 4: fuzzy_match agrees with the threshold
    match fuzzy_match(&a, &b) {
        Some(s) => assert!(s > FUZZY_THRESHOLD),
        None => assert!(sim <= FUZZY_THRESHOLD),
    }
});
