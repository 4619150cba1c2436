// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword-aware relevance search over furniture catalogs.
//!
//! A query is split into tokens, matched against a taxonomy of color,
//! material, style and size keywords, and every catalog item is scored by a
//! weighted sum of independent signals. Items scoring above zero are filtered,
//! sorted and capped.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ taxonomy/    │────▶│  query/      │────▶│  scoring/    │
//! │ (keyword     │     │ (ParsedQuery:│     │ (signals,    │
//! │  tables)     │     │  tokens →    │     │  ranking)    │
//! └──────────────┘     │  keywords)   │     └──────┬───────┘
//!                      └──────────────┘            │
//! ┌──────────────┐     ┌──────────────┐     ┌──────▼───────┐
//! │ session/     │────▶│  search/     │◀────│  catalog.rs  │
//! │ (debounce,   │     │ (SearchEngine│     │ (items +     │
//! │  history)    │     │  suggest)    │     │  folded text)│
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        ▲                    ▲
//!        └───── config.rs ────┘   fuzzy/ feeds the typo bonus
//! ```
//!
//! # Signal weights
//!
//! | Signal        | Weight | Fires when                                    |
//! |---------------|--------|-----------------------------------------------|
//! | name          | 100    | the whole query is a substring of the name    |
//! | description   | 50     | the whole query is in the description         |
//! | color         | 40     | per color keyword whose tags hit the item     |
//! | material      | 35     | per material keyword                          |
//! | tag           | 30     | per item tag containing the query             |
//! | style         | 25     | per style keyword                             |
//! | size          | ≤ 20   | per size keyword within tolerance             |
//! | general term  | 15     | per leftover token found in name/desc/tags    |
//! | brand         | 10     | the whole query is in the brand               |
//! | fuzzy         | ≤ 5    | name similarity above 0.6                     |
//!
//! # Usage
//!
//! ```
//! use settee::{testing::sample_catalog, SearchEngine, SearchRequest};
//!
//! let engine = SearchEngine::default();
//! engine.load_catalog(sample_catalog());
//!
//! let result = engine.search(&SearchRequest::new("leather"), true);
//! assert_eq!(result.items[0].item.display_name, "Leather Sofa");
//! ```

pub mod catalog;
pub mod config;
pub mod contracts;
mod error;
pub mod fuzzy;
pub mod query;
pub mod scoring;
pub mod search;
pub mod session;
pub mod taxonomy;
pub mod testing;
mod types;

// Re-exports for public API
pub use catalog::Catalog;
pub use config::EngineConfig;
pub use error::{Error, Result, UnknownCategory};
pub use fuzzy::{edit_distance, fuzzy_match, similarity, FUZZY_THRESHOLD};
pub use query::{parse, ParsedQuery};
pub use scoring::ranking::{compare_candidates, passes_filters, rank};
pub use scoring::{
    basic_score, breakdown, keyword_weight, score, size_signal, FoldedItem, ScoreBreakdown,
    BASIC_MATCH_SCORE, BRAND_WEIGHT, COLOR_WEIGHT, DESCRIPTION_WEIGHT, FUZZY_WEIGHT,
    GENERAL_TERM_WEIGHT, MATERIAL_WEIGHT, NAME_WEIGHT, SIZE_WEIGHT, STYLE_WEIGHT, TAG_WEIGHT,
};
pub use search::{
    found_status, no_results_status, searching_status, suggest, SearchEngine, CLEARED_STATUS,
    MAX_SUGGESTIONS, READY_STATUS,
};
pub use session::{
    Clock, DebounceTicket, ManualClock, SearchHistory, SearchListener, SearchSession,
    SessionOptions, SessionState, SystemClock,
};
pub use taxonomy::{KeywordCategory, KeywordEntry, KeywordPayload, KeywordTables, Taxonomy};
pub use types::{
    CatalogItem, Dimensions, FurnitureCategory, PriceRange, RankedItem, ScoredCandidate,
    SearchRequest, SearchResult, DEFAULT_MAX_RESULTS,
};
