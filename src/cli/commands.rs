// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subcommand implementations.

use super::display::{self, themed, CYAN, GRAY, YELLOW};
use super::{CatalogSource, Cli, Commands};
use settee::testing::sample_catalog;
use settee::{
    breakdown, searching_status, suggest, Catalog, EngineConfig, Error, FoldedItem,
    KeywordCategory, Result, SearchEngine, SearchListener, SearchResult, SearchSession,
};
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub fn run(cli: Cli) -> Result<()> {
    let config = EngineConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Search {
            query,
            source,
            min_price,
            max_price,
            category,
            available_only,
            limit,
            basic,
            no_fuzzy,
            explain,
            json,
        } => {
            let max_results = limit.unwrap_or(config.max_results);
            if max_results == 0 {
                return Err(Error::InvalidRequest(
                    "--limit must be at least 1".to_string(),
                ));
            }

            let mut request = config
                .default_request()
                .with_text(query)
                .with_max_results(max_results);
            if min_price.is_some() || max_price.is_some() {
                request = request.with_price_range(
                    min_price.unwrap_or(0.0),
                    max_price.unwrap_or(f64::INFINITY),
                );
            }
            if let Some(category) = category {
                request = request.with_category(category);
            }
            if available_only {
                request = request.available_only();
            }

            let engine = SearchEngine::from_config(&config)
                .with_fuzzy_matching(config.fuzzy_matching && !no_fuzzy);
            engine.set_catalog(load_catalog(&source)?);

            let smart = config.smart_search && !basic;
            let result = engine.search(&request, smart);

            if json {
                print_json(&result)
            } else {
                print_results(&engine, &request.text, &result, explain && smart);
                Ok(())
            }
        }

        Commands::Suggest { prefix, source } => {
            let catalog = load_catalog(&source)?;
            for suggestion in suggest(&prefix, std::iter::empty::<&str>(), &catalog) {
                println!("{}", suggestion);
            }
            Ok(())
        }

        Commands::Taxonomy { json } => {
            let taxonomy = config.taxonomy();
            if json {
                let tables: BTreeMap<&str, _> = KeywordCategory::ALL
                    .iter()
                    .map(|&c| (c.as_str(), taxonomy.table(c)))
                    .collect();
                return print_json(&tables);
            }
            for category in KeywordCategory::ALL {
                display::section_top(&display::keyword_section_label(category));
                for entry in taxonomy.table(category) {
                    display::row(&display::keyword_line(entry));
                }
                display::section_bot();
            }
            Ok(())
        }

        Commands::Repl { source } => {
            let engine = SearchEngine::from_config(&config);
            engine.set_catalog(load_catalog(&source)?);
            repl(Arc::new(engine), &config)
        }
    }
}

fn load_catalog(source: &CatalogSource) -> Result<Catalog> {
    match &source.catalog {
        Some(path) => Catalog::from_json_file(path),
        None => {
            info!("using the built-in sample catalog");
            Ok(Catalog::new(sample_catalog()))
        }
    }
}

fn stdio_error(name: &str, source: io::Error) -> Error {
    Error::Io {
        path: PathBuf::from(name),
        source,
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)
        .map_err(|e| stdio_error("<stdout>", e.into()))?;
    writeln!(out).map_err(|e| stdio_error("<stdout>", e))
}

fn print_results(engine: &SearchEngine, query: &str, result: &SearchResult, explain: bool) {
    display::section_top(&format!("SEARCH \"{}\"", query));

    if result.is_empty() {
        display::row(&themed(GRAY, &[], &result.status_message));
        display::section_bot();
        return;
    }

    let taxonomy = engine.taxonomy();
    let parsed = taxonomy.parse(query);
    for (i, ranked) in result.items.iter().enumerate() {
        display::row(&display::result_line(i + 1, ranked));
        if explain {
            let signals = breakdown(
                &ranked.item,
                &FoldedItem::new(&ranked.item),
                &parsed,
                engine.fuzzy_matching(),
            );
            let line = format!("      {}", display::signal_line(&signals));
            display::row(&themed(GRAY, &[], &line));
        }
    }
    display::row("");
    display::row(&themed(YELLOW, &[], &result.status_message));
    display::section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// REPL
// ═══════════════════════════════════════════════════════════════════════════

/// Echoes the "Searching for ..." status as a search starts.
struct StatusEcho;

impl SearchListener for StatusEcho {
    fn search_started(&mut self, query: &str) {
        println!("{}", themed(GRAY, &[], &searching_status(query)));
    }
}

const REPL_HELP: &str = "\
  <text>          search
  :suggest <p>    suggestions for a prefix
  :history        recent searches
  :clear          clear the current search
  :quit           exit";

fn repl(engine: Arc<SearchEngine>, config: &EngineConfig) -> Result<()> {
    let mut session = SearchSession::new(Arc::clone(&engine), config.session_options());
    session.add_listener(Box::new(StatusEcho));
    session.filters_changed(config.default_request());

    println!("{}", themed(CYAN, &[], "settee repl (:help for commands)"));
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("settee> ");
        io::stdout()
            .flush()
            .map_err(|e| stdio_error("<stdout>", e))?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|e| stdio_error("<stdin>", e))?;
        let line = line.trim();

        match line {
            ":quit" | ":q" => break,
            ":help" => println!("{}", REPL_HELP),
            ":history" => {
                for (i, entry) in session.history().iter().enumerate() {
                    println!("{:>3}  {}", i + 1, entry);
                }
            }
            ":clear" => {
                session.clear();
                println!("{}", session.status());
            }
            _ if line.starts_with(":suggest") => {
                let prefix = line.trim_start_matches(":suggest").trim();
                println!("{}", session.suggestions(prefix).join(", "));
            }
            _ => {
                let result = session.on_submit(line);
                print_results(&engine, line, &result, false);
            }
        }
    }
    Ok(())
}
