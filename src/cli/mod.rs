// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the settee command-line interface.
//!
//! Four subcommands: `search` runs one query against a catalog, `suggest`
//! completes a prefix, `taxonomy` prints the active keyword tables, and `repl`
//! drives a session interactively. Every command reads the same config stack
//! (`settee.toml`, `SETTEE_*`), which `--config` can point elsewhere.

pub mod commands;
pub mod display;

use clap::{Args, Parser, Subcommand};
use settee::FurnitureCategory;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "settee",
    about = "Keyword-aware relevance search for furniture catalogs",
    version
)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG wins.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Config file (default: ./settee.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the catalog comes from.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct CatalogSource {
    /// JSON file holding an array of catalog items
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Use the built-in eight-item demo catalog
    #[arg(long)]
    pub sample: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog and print ranked results
    Search {
        /// Search query
        query: String,

        #[command(flatten)]
        source: CatalogSource,

        /// Lowest price to include (inclusive)
        #[arg(long)]
        min_price: Option<f64>,

        /// Highest price to include (inclusive)
        #[arg(long)]
        max_price: Option<f64>,

        /// Only items in this category (e.g. seating, tables, storage)
        #[arg(long)]
        category: Option<FurnitureCategory>,

        /// Skip items that are out of stock
        #[arg(long)]
        available_only: bool,

        /// Maximum number of results (default: max_results from config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Plain substring matching, no weighting
        #[arg(long)]
        basic: bool,

        /// Disable the typo-tolerance bonus
        #[arg(long)]
        no_fuzzy: bool,

        /// Show which signals fired for each result
        #[arg(long)]
        explain: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest completions for a prefix
    Suggest {
        /// Prefix to complete
        prefix: String,

        #[command(flatten)]
        source: CatalogSource,
    },

    /// Print the active keyword tables
    Taxonomy {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive session: each line is a submitted search
    Repl {
        #[command(flatten)]
        source: CatalogSource,
    },
}
