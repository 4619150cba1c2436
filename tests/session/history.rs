// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! History bounds and ordering as seen through a session.

use crate::common::sample_engine;
use settee::{SearchHistory, SearchSession, SessionOptions};
use std::sync::Arc;

fn session(capacity: usize) -> SearchSession {
    let options = SessionOptions {
        history_capacity: capacity,
        ..SessionOptions::default()
    };
    SearchSession::new(Arc::new(sample_engine()), options)
}

#[test]
fn test_history_is_bounded_most_recent_first() {
    let mut session = session(10);
    for i in 0..12 {
        session.on_submit(&format!("query {}", i));
    }

    let history = session.history();
    assert_eq!(history.len(), 10);
    assert_eq!(history.first().map(String::as_str), Some("query 11"));
    assert_eq!(history.last().map(String::as_str), Some("query 2"));
}

#[test]
fn test_repeat_query_is_not_moved() {
    let mut session = session(10);
    for q in ["sofa", "lamp", "bed"] {
        session.on_submit(q);
    }
    session.on_submit("sofa");

    assert_eq!(session.history(), vec!["bed", "lamp", "sofa"]);
}

#[test]
fn test_no_results_still_recorded() {
    let mut session = session(10);
    let result = session.on_submit("zebra");

    assert!(result.is_empty());
    assert_eq!(session.history(), vec!["zebra"]);
}

#[test]
fn test_history_feeds_suggestions_first() {
    let mut session = session(10);
    session.on_submit("modern lamp");

    let suggestions = session.suggestions("mo");
    assert_eq!(suggestions[0], "modern lamp");
    assert!(suggestions.len() <= settee::MAX_SUGGESTIONS);
}

#[test]
fn test_zero_capacity_keeps_one() {
    let mut history = SearchHistory::new(0);
    history.push("a");
    history.push("b");
    assert_eq!(history.entries(), vec!["b"]);
}
