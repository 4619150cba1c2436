// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search-as-you-type controller.
//!
//! Two states, one pending slot:
//!
//! ```text
//!            on_text_changed(len >= 2)
//!   ┌──────┐ ─────────────────────────▶ ┌─────────────────┐
//!   │ Idle │                            │ PendingDebounce │ ◀─┐ on_text_changed(len >= 2)
//!   └──────┘ ◀───────────────────────── └─────────────────┘ ──┘ (replaces the pending search)
//!             poll() past deadline / fire(ticket)
//!             on_submit / on_text_changed(len < 2) / clear
//! ```
//!
//! The controller never sleeps and owns no threads. Each pending search has a
//! generation number. Any event that cancels or replaces it bumps the
//! generation, so a host timer holding a stale [`DebounceTicket`] cannot fire
//! a search after the fact.
//!
//! # Invariants
//!
//! - At most one search is pending.
//! - N text changes inside one delay window execute exactly one search, with
//!   the text of the last change.
//! - History stays bounded and duplicate-free (see [`SearchHistory`]).

mod clock;
mod history;

pub use clock::*;
pub use history::*;

use crate::search::{searching_status, suggest, SearchEngine, CLEARED_STATUS, READY_STATUS};
use crate::types::{SearchRequest, SearchResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info_span};

pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(500);
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Tunables for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    pub search_delay: Duration,
    /// Text-change events shorter than this many chars clear results
    /// instead of scheduling a search.
    pub min_query_len: usize,
    pub history_capacity: usize,
    pub smart_search: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            search_delay: DEFAULT_SEARCH_DELAY,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            smart_search: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    PendingDebounce,
}

/// Handle to one scheduled search. Only the most recent ticket can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceTicket {
    generation: u64,
    deadline: Duration,
}

impl DebounceTicket {
    /// When the search is due, on the session's clock.
    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

/// Notifications for whoever renders the results.
pub trait SearchListener {
    fn search_started(&mut self, _query: &str) {}
    fn search_completed(&mut self, _result: &SearchResult) {}
}

#[derive(Debug)]
struct PendingSearch {
    text: String,
    deadline: Duration,
    generation: u64,
}

pub struct SearchSession<C: Clock = SystemClock> {
    engine: Arc<SearchEngine>,
    options: SessionOptions,
    clock: C,
    filters: SearchRequest,
    history: SearchHistory,
    pending: Option<PendingSearch>,
    generation: u64,
    last_query: Option<String>,
    results: SearchResult,
    suggestions: Vec<String>,
    listeners: Vec<Box<dyn SearchListener>>,
}

impl SearchSession<SystemClock> {
    pub fn new(engine: Arc<SearchEngine>, options: SessionOptions) -> Self {
        SearchSession::with_clock(engine, options, SystemClock::new())
    }
}

impl<C: Clock> SearchSession<C> {
    pub fn with_clock(engine: Arc<SearchEngine>, options: SessionOptions, clock: C) -> Self {
        let history = SearchHistory::new(options.history_capacity);
        SearchSession {
            engine,
            options,
            clock,
            filters: SearchRequest::default(),
            history,
            pending: None,
            generation: 0,
            last_query: None,
            results: SearchResult {
                items: Vec::new(),
                status_message: READY_STATUS.to_string(),
            },
            suggestions: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn add_listener(&mut self, listener: Box<dyn SearchListener>) {
        self.listeners.push(listener);
    }

    pub fn engine(&self) -> &Arc<SearchEngine> {
        &self.engine
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn state(&self) -> SessionState {
        if self.pending.is_some() {
            SessionState::PendingDebounce
        } else {
            SessionState::Idle
        }
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// Incremental edit of the search box.
    ///
    /// Returns a ticket when a search was scheduled. Hosts with their own
    /// timers can pass it to [`fire`](Self::fire); others just call
    /// [`poll`](Self::poll).
    pub fn on_text_changed(&mut self, text: &str) -> Option<DebounceTicket> {
        self.cancel_pending();

        if text.chars().count() < self.options.min_query_len {
            debug!(len = text.len(), "text too short, clearing results");
            self.suggestions.clear();
            self.clear_results(READY_STATUS);
            return None;
        }

        let deadline = self.clock.now() + self.options.search_delay;
        self.pending = Some(PendingSearch {
            text: text.to_string(),
            deadline,
            generation: self.generation,
        });
        self.suggestions = self.suggestions(text);
        debug!(generation = self.generation, ?deadline, "search scheduled");

        Some(DebounceTicket {
            generation: self.generation,
            deadline,
        })
    }

    /// Run the pending search if its deadline has passed.
    pub fn poll(&mut self) -> Option<SearchResult> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| self.clock.now() >= p.deadline);
        if !due {
            return None;
        }
        let pending = self.pending.take()?;
        Some(self.execute(&pending.text))
    }

    /// Run the search behind `ticket` now, if it is still the pending one.
    ///
    /// A stale ticket (replaced, cancelled or already run) does nothing.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<SearchResult> {
        let current = self.pending.as_ref().map(|p| p.generation);
        if current != Some(ticket.generation) {
            debug!(generation = ticket.generation, "stale ticket ignored");
            return None;
        }
        let pending = self.pending.take()?;
        Some(self.execute(&pending.text))
    }

    /// Deadline of the pending search, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Explicit submit: cancel any pending search and run this one now.
    pub fn on_submit(&mut self, text: &str) -> SearchResult {
        self.cancel_pending();
        self.execute(text)
    }

    /// Cancel everything and empty the results.
    pub fn clear(&mut self) {
        self.cancel_pending();
        self.last_query = None;
        self.suggestions.clear();
        self.clear_results(CLEARED_STATUS);
    }

    /// Replace the price/category/availability filters.
    ///
    /// The text of `filters` is ignored. If a query has been run, it is run
    /// again under the new filters and the result returned.
    pub fn filters_changed(&mut self, filters: SearchRequest) -> Option<SearchResult> {
        self.filters = filters;
        let query = self.last_query.clone()?;
        Some(self.execute(&query))
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    pub fn filters(&self) -> &SearchRequest {
        &self.filters
    }

    /// Snapshot of the history, most recent first.
    pub fn history(&self) -> Vec<String> {
        self.history.entries()
    }

    /// Suggestions for `prefix` from history, catalog names and popular terms.
    pub fn suggestions(&self, prefix: &str) -> Vec<String> {
        suggest(prefix, self.history.iter(), &self.engine.catalog())
    }

    /// Suggestions computed at the last text change.
    pub fn current_suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn current_results(&self) -> &SearchResult {
        &self.results
    }

    pub fn status(&self) -> &str {
        &self.results.status_message
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn cancel_pending(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    fn clear_results(&mut self, status: &str) {
        self.results = SearchResult {
            items: Vec::new(),
            status_message: status.to_string(),
        };
    }

    fn execute(&mut self, text: &str) -> SearchResult {
        let span = info_span!("session", query = %text);
        let _enter = span.enter();

        if text.trim().is_empty() {
            self.last_query = None;
            self.clear_results(READY_STATUS);
            return self.results.clone();
        }

        for listener in &mut self.listeners {
            listener.search_started(text);
        }
        self.results.status_message = searching_status(text);

        let request = self.filters.with_text(text);
        let result = self.engine.search(&request, self.options.smart_search);

        if self.history.push(text) {
            debug!(entries = self.history.len(), "history updated");
        }
        self.last_query = Some(text.to_string());
        self.results = result.clone();

        for listener in &mut self.listeners {
            listener.search_completed(&result);
        }
        result
    }
}
