// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing: raw text in, classified tokens out.
//!
//! The text is lower-cased, trimmed and split on whitespace. Each token is
//! probed against all four taxonomy tables independently. "oak" is both a
//! brown synonym and a wood synonym, and it lands in both lists. Tokens that
//! match nothing become general terms.
//!
//! Parsing never scores and never fails. Empty input gives an empty query.

use crate::taxonomy::{KeywordCategory, KeywordEntry, Taxonomy};

/// A query after classification against a taxonomy.
///
/// Borrows its keyword entries from the taxonomy it was parsed with, so it
/// cannot outlive the taxonomy snapshot the search started with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedQuery<'t> {
    /// Lower-cased, trimmed query text used for the whole-query signals.
    pub raw_text: String,
    pub matched_colors: Vec<&'t KeywordEntry>,
    pub matched_materials: Vec<&'t KeywordEntry>,
    pub matched_styles: Vec<&'t KeywordEntry>,
    pub matched_sizes: Vec<&'t KeywordEntry>,
    /// Tokens that matched no taxonomy entry, verbatim.
    pub general_terms: Vec<String>,
}

impl<'t> ParsedQuery<'t> {
    pub fn matches(&self, category: KeywordCategory) -> &[&'t KeywordEntry] {
        match category {
            KeywordCategory::Color => &self.matched_colors,
            KeywordCategory::Material => &self.matched_materials,
            KeywordCategory::Style => &self.matched_styles,
            KeywordCategory::Size => &self.matched_sizes,
        }
    }

    fn matches_mut(&mut self, category: KeywordCategory) -> &mut Vec<&'t KeywordEntry> {
        match category {
            KeywordCategory::Color => &mut self.matched_colors,
            KeywordCategory::Material => &mut self.matched_materials,
            KeywordCategory::Style => &mut self.matched_styles,
            KeywordCategory::Size => &mut self.matched_sizes,
        }
    }

    /// True when there is nothing to match against.
    pub fn is_empty(&self) -> bool {
        self.raw_text.is_empty()
    }

    /// Number of taxonomy hits across all categories.
    pub fn keyword_count(&self) -> usize {
        KeywordCategory::ALL
            .iter()
            .map(|&c| self.matches(c).len())
            .sum()
    }
}

/// Classify `raw_text` against `taxonomy`.
pub fn parse<'t>(taxonomy: &'t Taxonomy, raw_text: &str) -> ParsedQuery<'t> {
    let raw_text = raw_text.trim().to_lowercase();
    let mut query = ParsedQuery::default();

    for token in raw_text.split_whitespace() {
        let mut matched = false;
        for category in KeywordCategory::ALL {
            if let Some(entry) = taxonomy.lookup_folded(token, category) {
                query.matches_mut(category).push(entry);
                matched = true;
            }
        }
        if !matched {
            query.general_terms.push(token.to_string());
        }
    }

    query.raw_text = raw_text;
    query
}

impl Taxonomy {
    /// Classify `raw_text` against this taxonomy. See [`parse`].
    pub fn parse(&self, raw_text: &str) -> ParsedQuery<'_> {
        parse(self, raw_text)
    }
}
