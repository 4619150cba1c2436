// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! One primitive, one threshold. The scorer asks for the similarity between an
//! item name and the whole query, and only rewards it above
//! [`FUZZY_THRESHOLD`]. No DFA, no automaton: a catalog has a few thousand
//! names, not a vocabulary of millions.

mod levenshtein;

pub use levenshtein::*;
