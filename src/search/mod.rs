// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: parse, score, rank.
//!
//! [`SearchEngine`] owns the current taxonomy and catalog, each as an
//! `Arc` behind a lock. A search snapshots both `Arc`s before it scores
//! anything and releases the locks immediately, so `load_catalog` and
//! `configure` can swap either while a search is in flight without the
//! search seeing a half-updated state.
//!
//! Searching never fails. Empty text, no matches and degenerate filters all
//! produce an empty result list with a status message.

pub mod suggest;

pub use suggest::*;

use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::contracts::check_ranked_output;
use crate::query::ParsedQuery;
use crate::scoring::ranking::rank;
use crate::scoring::{basic_score, score_folded, FoldedItem};
use crate::taxonomy::{KeywordEntry, Taxonomy};
use crate::types::{CatalogItem, RankedItem, ScoredCandidate, SearchRequest, SearchResult};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info, info_span};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// =============================================================================
// STATUS MESSAGES
// =============================================================================

pub const READY_STATUS: &str = "Ready to search";
pub const CLEARED_STATUS: &str = "Search cleared";

pub fn searching_status(query: &str) -> String {
    format!("Searching for '{}'...", query)
}

pub fn found_status(count: usize, query: &str) -> String {
    let noun = if count == 1 { "result" } else { "results" };
    format!("Found {} {} for '{}'", count, noun, query)
}

pub fn no_results_status(query: &str) -> String {
    format!("No results found for '{}'", query)
}

// =============================================================================
// ENGINE
// =============================================================================

#[derive(Debug)]
pub struct SearchEngine {
    taxonomy: RwLock<Arc<Taxonomy>>,
    catalog: RwLock<Arc<Catalog>>,
    fuzzy_matching: bool,
}

impl Default for SearchEngine {
    fn default() -> Self {
        SearchEngine::new(Taxonomy::default())
    }
}

impl SearchEngine {
    /// An engine with `taxonomy`, an empty catalog and fuzzy matching on.
    pub fn new(taxonomy: Taxonomy) -> Self {
        SearchEngine {
            taxonomy: RwLock::new(Arc::new(taxonomy)),
            catalog: RwLock::new(Arc::new(Catalog::default())),
            fuzzy_matching: true,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        SearchEngine::new(config.taxonomy()).with_fuzzy_matching(config.fuzzy_matching)
    }

    pub fn with_fuzzy_matching(mut self, enabled: bool) -> Self {
        self.fuzzy_matching = enabled;
        self
    }

    pub fn fuzzy_matching(&self) -> bool {
        self.fuzzy_matching
    }

    /// Replace the taxonomy. Omitted (`None`) or empty categories fall back
    /// to the built-in defaults.
    pub fn configure(
        &self,
        colors: Option<Vec<KeywordEntry>>,
        materials: Option<Vec<KeywordEntry>>,
        styles: Option<Vec<KeywordEntry>>,
        sizes: Option<Vec<KeywordEntry>>,
    ) {
        self.set_taxonomy(Taxonomy::new(colors, materials, styles, sizes));
    }

    pub fn set_taxonomy(&self, taxonomy: Taxonomy) {
        info!(keywords = taxonomy.len(), "taxonomy replaced");
        *self.taxonomy.write() = Arc::new(taxonomy);
    }

    /// Replace the catalog snapshot. In-flight searches keep the old one.
    pub fn load_catalog(&self, items: Vec<CatalogItem>) {
        self.set_catalog(Catalog::new(items));
    }

    pub fn set_catalog(&self, catalog: Catalog) {
        info!(items = catalog.len(), "catalog replaced");
        *self.catalog.write() = Arc::new(catalog);
    }

    /// Current taxonomy snapshot.
    pub fn taxonomy(&self) -> Arc<Taxonomy> {
        Arc::clone(&self.taxonomy.read())
    }

    /// Current catalog snapshot.
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog.read())
    }

    /// Run one search against the current snapshots.
    ///
    /// `smart_mode` selects the weighted model; otherwise every item whose
    /// name, description or tags contain the text scores 1.0.
    pub fn search(&self, request: &SearchRequest, smart_mode: bool) -> SearchResult {
        let span = info_span!("search", query = %request.text, smart = smart_mode);
        let _enter = span.enter();

        let query_text = request.text.trim();
        if query_text.is_empty() {
            return SearchResult {
                items: Vec::new(),
                status_message: READY_STATUS.to_string(),
            };
        }

        let taxonomy = self.taxonomy();
        let catalog = self.catalog();

        let query = taxonomy.parse(query_text);
        debug!(
            keywords = query.keyword_count(),
            general = query.general_terms.len(),
            "query parsed"
        );

        let candidates = score_catalog(&catalog, &query, smart_mode, self.fuzzy_matching);
        let matched = candidates.len();
        let ranked = rank(candidates, request);
        check_ranked_output(&ranked, request.max_results);

        let items: Vec<RankedItem> = ranked
            .into_iter()
            .map(|c| RankedItem {
                item: c.item.clone(),
                score: c.score,
            })
            .collect();

        info!(matched, returned = items.len(), "search complete");

        let status_message = if items.is_empty() {
            no_results_status(query_text)
        } else {
            found_status(items.len(), query_text)
        };
        SearchResult {
            items,
            status_message,
        }
    }
}

/// Score a single item, keeping it only if something fired.
#[inline]
fn candidate<'c>(
    position: usize,
    item: &'c CatalogItem,
    folded: &FoldedItem,
    query: &ParsedQuery<'_>,
    smart_mode: bool,
    fuzzy_matching: bool,
) -> Option<ScoredCandidate<'c>> {
    let score = if smart_mode {
        score_folded(item, folded, query, fuzzy_matching)
    } else {
        basic_score(folded, &query.raw_text)
    };
    (score > 0.0).then_some(ScoredCandidate {
        position,
        item,
        score,
    })
}

/// Score every item, in catalog order, dropping zero scores.
fn score_catalog<'c>(
    catalog: &'c Catalog,
    query: &ParsedQuery<'_>,
    smart_mode: bool,
    fuzzy_matching: bool,
) -> Vec<ScoredCandidate<'c>> {
    #[cfg(feature = "parallel")]
    {
        catalog
            .items()
            .par_iter()
            .zip(catalog.folded())
            .enumerate()
            .filter_map(|(position, (item, folded))| {
                candidate(position, item, folded, query, smart_mode, fuzzy_matching)
            })
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        catalog
            .iter()
            .enumerate()
            .filter_map(|(position, (item, folded))| {
                candidate(position, item, folded, query, smart_mode, fuzzy_matching)
            })
            .collect()
    }
}
