// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Merged with figment, later sources winning:
//!
//! 1. built-in defaults
//! 2. `settee.toml` in the working directory, or an explicit file
//! 3. `SETTEE_*` environment variables (`__` separates nested keys)
//!
//! ```toml
//! search_delay_ms = 300
//! max_results = 10
//!
//! [[keywords.materials]]
//! term = "rattan"
//! synonyms = ["wicker", "cane"]
//! related_tags = ["rattan", "wicker"]
//! ```
//!
//! A keyword table that is absent or empty keeps its built-in defaults. A
//! table that is present replaces the defaults for that category entirely.

use crate::error::{Error, Result};
use crate::session::{SessionOptions, DEFAULT_HISTORY_CAPACITY, DEFAULT_MIN_QUERY_LEN};
use crate::taxonomy::{KeywordTables, Taxonomy};
use crate::types::{SearchRequest, DEFAULT_MAX_RESULTS};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "settee.toml";
pub const ENV_PREFIX: &str = "SETTEE_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub search_delay_ms: u64,
    pub max_results: usize,
    pub fuzzy_matching: bool,
    pub smart_search: bool,
    pub history_capacity: usize,
    pub min_query_len: usize,
    pub keywords: KeywordTables,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            search_delay_ms: 500,
            max_results: DEFAULT_MAX_RESULTS,
            fuzzy_matching: true,
            smart_search: true,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            keywords: KeywordTables::default(),
        }
    }
}

impl EngineConfig {
    /// The provider stack, before extraction.
    ///
    /// An explicit `path` must exist. The implicit `settee.toml` is optional.
    pub fn figment(path: Option<&Path>) -> Result<Figment> {
        let file = match path {
            Some(path) => {
                std::fs::metadata(path).map_err(|source| Error::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Toml::file(path)
            }
            None => Toml::file(DEFAULT_CONFIG_FILE),
        };

        Ok(Figment::from(Serialized::defaults(EngineConfig::default()))
            .merge(file)
            .merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Load and validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config: EngineConfig = Self::figment(path)?.extract()?;
        config.validate()?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            return Err(Error::InvalidRequest(
                "history_capacity must be at least 1".to_string(),
            ));
        }
        if self.max_results == 0 {
            return Err(Error::InvalidRequest(
                "max_results must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            search_delay: self.search_delay(),
            min_query_len: self.min_query_len,
            history_capacity: self.history_capacity,
            smart_search: self.smart_search,
        }
    }

    /// Keyword tables with defaults filled in.
    pub fn taxonomy(&self) -> Taxonomy {
        Taxonomy::from_tables(self.keywords.clone())
    }

    /// An empty request carrying the configured result cap.
    pub fn default_request(&self) -> SearchRequest {
        SearchRequest::default().with_max_results(self.max_results)
    }
}
