// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword taxonomy: the vocabulary that turns "black leather sofa" into more
//! than three substrings.
//!
//! Four tables (color, material, style, size). Each entry has a primary term,
//! synonyms, and a payload whose shape depends on the table. Lookups are exact
//! and case-insensitive on the term or any synonym. Substring matching belongs
//! to the scorer, not here.
//!
//! All strings are lower-cased once at construction so neither the lookup nor
//! the scorer has to fold case per comparison. Empty terms are dropped because
//! the empty string is a substring of every tag.
//!
//! A table left empty at construction gets the built-in defaults from
//! [`defaults`], so a taxonomy is always usable out of the box.

pub mod defaults;

use crate::types::Dimensions;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Which table a keyword lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCategory {
    Color,
    Material,
    Style,
    Size,
}

impl KeywordCategory {
    pub const ALL: [KeywordCategory; 4] = [
        KeywordCategory::Color,
        KeywordCategory::Material,
        KeywordCategory::Style,
        KeywordCategory::Size,
    ];

    #[inline]
    fn slot(self) -> usize {
        match self {
            KeywordCategory::Color => 0,
            KeywordCategory::Material => 1,
            KeywordCategory::Style => 2,
            KeywordCategory::Size => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            KeywordCategory::Color => "color",
            KeywordCategory::Material => "material",
            KeywordCategory::Style => "style",
            KeywordCategory::Size => "size",
        }
    }
}

/// Category-specific data carried by a keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum KeywordPayload {
    /// `swatch` is display-only and never affects scoring.
    Color {
        swatch: Option<[f32; 3]>,
        related_tags: Vec<String>,
    },
    Material {
        related_tags: Vec<String>,
    },
    Style {
        related_tags: Vec<String>,
    },
    Size {
        approximate_size: Dimensions,
        tolerance: f64,
    },
}

impl KeywordPayload {
    pub fn category(&self) -> KeywordCategory {
        match self {
            KeywordPayload::Color { .. } => KeywordCategory::Color,
            KeywordPayload::Material { .. } => KeywordCategory::Material,
            KeywordPayload::Style { .. } => KeywordCategory::Style,
            KeywordPayload::Size { .. } => KeywordCategory::Size,
        }
    }

    pub fn related_tags(&self) -> &[String] {
        match self {
            KeywordPayload::Color { related_tags, .. }
            | KeywordPayload::Material { related_tags }
            | KeywordPayload::Style { related_tags } => related_tags,
            KeywordPayload::Size { .. } => &[],
        }
    }
}

/// One keyword: a primary term, its synonyms, and a payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordEntry {
    pub primary_term: String,
    pub synonyms: Vec<String>,
    pub payload: KeywordPayload,
}

fn fold_all<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    terms
        .into_iter()
        .map(|t| t.as_ref().trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

impl KeywordEntry {
    fn build<I, S>(term: &str, synonyms: I, payload: KeywordPayload) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        KeywordEntry {
            primary_term: term.trim().to_lowercase(),
            synonyms: fold_all(synonyms),
            payload,
        }
    }

    pub fn color<I, S>(term: &str, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(
            term,
            synonyms,
            KeywordPayload::Color {
                swatch: None,
                related_tags: Vec::new(),
            },
        )
    }

    pub fn material<I, S, R, T>(term: &str, synonyms: I, related_tags: R) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let related_tags = fold_all(related_tags);
        Self::build(term, synonyms, KeywordPayload::Material { related_tags })
    }

    pub fn style<I, S, R, T>(term: &str, synonyms: I, related_tags: R) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let related_tags = fold_all(related_tags);
        Self::build(term, synonyms, KeywordPayload::Style { related_tags })
    }

    /// A negative tolerance is clamped to zero (exact size match only).
    pub fn size<I, S>(term: &str, synonyms: I, approximate_size: Dimensions, tolerance: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tolerance = if tolerance.is_finite() && tolerance >= 0.0 {
            tolerance
        } else {
            warn!(term, tolerance, "size keyword tolerance out of range, clamping to 0");
            0.0
        };
        Self::build(
            term,
            synonyms,
            KeywordPayload::Size {
                approximate_size,
                tolerance,
            },
        )
    }

    pub fn with_swatch(mut self, rgb: [f32; 3]) -> Self {
        if let KeywordPayload::Color { swatch, .. } = &mut self.payload {
            *swatch = Some(rgb);
        }
        self
    }

    pub fn with_related_tags<R, T>(mut self, tags: R) -> Self
    where
        R: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        match &mut self.payload {
            KeywordPayload::Color { related_tags, .. }
            | KeywordPayload::Material { related_tags }
            | KeywordPayload::Style { related_tags } => *related_tags = fold_all(tags),
            KeywordPayload::Size { .. } => {}
        }
        self
    }

    pub fn category(&self) -> KeywordCategory {
        self.payload.category()
    }

    /// Exact match against the primary term or any synonym.
    ///
    /// `token` must already be lower-cased.
    #[inline]
    pub fn names(&self, token: &str) -> bool {
        self.primary_term == token || self.synonyms.iter().any(|s| s == token)
    }

    /// Every string that counts as this keyword when found inside an item tag:
    /// primary term, synonyms, related tags.
    pub fn match_terms(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary_term.as_str())
            .chain(self.synonyms.iter().map(String::as_str))
            .chain(self.payload.related_tags().iter().map(String::as_str))
    }
}

// =============================================================================
// CONFIG-FACING KEYWORD SPECS
// =============================================================================

fn default_tolerance() -> f64 {
    0.5
}

/// A color, material or style keyword as written in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagKeyword {
    pub term: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub related_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swatch: Option<[f32; 3]>,
}

/// A size keyword as written in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeKeyword {
    pub term: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    pub approximate_size: Dimensions,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

/// The four keyword tables as they appear under `[keywords]` in config.
///
/// An empty table means "use the built-in defaults for this category".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeywordTables {
    #[serde(default)]
    pub colors: Vec<TagKeyword>,
    #[serde(default)]
    pub materials: Vec<TagKeyword>,
    #[serde(default)]
    pub styles: Vec<TagKeyword>,
    #[serde(default)]
    pub sizes: Vec<SizeKeyword>,
}

impl TagKeyword {
    fn into_entry(self, category: KeywordCategory) -> KeywordEntry {
        let TagKeyword {
            term,
            synonyms,
            related_tags,
            swatch,
        } = self;
        match category {
            KeywordCategory::Material => KeywordEntry::material(&term, synonyms, related_tags),
            KeywordCategory::Style => KeywordEntry::style(&term, synonyms, related_tags),
            KeywordCategory::Color | KeywordCategory::Size => {
                let entry = KeywordEntry::color(&term, synonyms).with_related_tags(related_tags);
                match swatch {
                    Some(rgb) => entry.with_swatch(rgb),
                    None => entry,
                }
            }
        }
    }
}

impl SizeKeyword {
    fn into_entry(self) -> KeywordEntry {
        KeywordEntry::size(&self.term, self.synonyms, self.approximate_size, self.tolerance)
    }
}

// =============================================================================
// TAXONOMY
// =============================================================================

/// The four keyword tables, immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Taxonomy {
    tables: [Vec<KeywordEntry>; 4],
}

impl Taxonomy {
    /// Build from per-category tables. `None` or an empty table falls back to
    /// the built-in defaults for that category.
    ///
    /// An entry whose payload belongs to a different table is dropped with a
    /// warning instead of silently scoring under the wrong weight.
    pub fn new(
        colors: Option<Vec<KeywordEntry>>,
        materials: Option<Vec<KeywordEntry>>,
        styles: Option<Vec<KeywordEntry>>,
        sizes: Option<Vec<KeywordEntry>>,
    ) -> Self {
        let supplied = [colors, materials, styles, sizes];
        let mut tables: [Vec<KeywordEntry>; 4] = Default::default();

        for (category, entries) in KeywordCategory::ALL.into_iter().zip(supplied) {
            let mut table: Vec<KeywordEntry> = entries
                .unwrap_or_default()
                .into_iter()
                .filter(|entry| {
                    let fits = entry.category() == category && !entry.primary_term.is_empty();
                    if !fits {
                        warn!(
                            term = %entry.primary_term,
                            table = category.as_str(),
                            "dropping keyword that does not belong in this table"
                        );
                    }
                    fits
                })
                .collect();

            if table.is_empty() {
                table = defaults::for_category(category);
            }
            tables[category.slot()] = table;
        }

        Taxonomy { tables }
    }

    /// Build from config tables.
    pub fn from_tables(tables: KeywordTables) -> Self {
        let KeywordTables {
            colors,
            materials,
            styles,
            sizes,
        } = tables;
        Taxonomy::new(
            Some(
                colors
                    .into_iter()
                    .map(|k| k.into_entry(KeywordCategory::Color))
                    .collect(),
            ),
            Some(
                materials
                    .into_iter()
                    .map(|k| k.into_entry(KeywordCategory::Material))
                    .collect(),
            ),
            Some(
                styles
                    .into_iter()
                    .map(|k| k.into_entry(KeywordCategory::Style))
                    .collect(),
            ),
            Some(sizes.into_iter().map(SizeKeyword::into_entry).collect()),
        )
    }

    /// Case-insensitive exact lookup. First entry in table order wins.
    pub fn lookup(&self, token: &str, category: KeywordCategory) -> Option<&KeywordEntry> {
        let folded = token.trim().to_lowercase();
        self.lookup_folded(&folded, category)
    }

    /// Lookup for a token that is already trimmed and lower-cased.
    #[inline]
    pub(crate) fn lookup_folded(
        &self,
        token: &str,
        category: KeywordCategory,
    ) -> Option<&KeywordEntry> {
        if token.is_empty() {
            return None;
        }
        self.tables[category.slot()]
            .iter()
            .find(|entry| entry.names(token))
    }

    pub fn table(&self, category: KeywordCategory) -> &[KeywordEntry] {
        &self.tables[category.slot()]
    }

    pub fn len(&self) -> usize {
        self.tables.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Taxonomy::new(None, None, None, None)
    }
}
