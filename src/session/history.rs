// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded, most-recent-first search history.
//!
//! # Invariants
//!
//! - `len() <= capacity()`
//! - entries are pairwise distinct (exact, case-sensitive)
//! - a query already present is not moved to the front

use std::collections::VecDeque;

pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for SearchHistory {
    fn default() -> Self {
        SearchHistory::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl SearchHistory {
    /// A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        SearchHistory {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record `query`. Returns false if it was already present.
    ///
    /// New entries go to the front. When full, the oldest entry is evicted.
    pub fn push(&mut self, query: &str) -> bool {
        if self.contains(query) {
            return false;
        }
        self.entries.push_front(query.to_string());
        self.entries.truncate(self.capacity);
        true
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.iter().any(|e| e == query)
    }

    /// Most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Owned snapshot, most recent first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
