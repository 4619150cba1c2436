// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Listener notifications around each executed search.

use crate::common::sample_engine;
use parking_lot::Mutex;
use settee::{
    ManualClock, SearchListener, SearchResult, SearchSession, SessionOptions, CLEARED_STATUS,
};
use std::sync::Arc;
use std::time::Duration;

#[derive(Default)]
struct Recorder {
    events: Arc<Mutex<Vec<String>>>,
}

impl SearchListener for Recorder {
    fn search_started(&mut self, query: &str) {
        self.events.lock().push(format!("start {}", query));
    }

    fn search_completed(&mut self, result: &SearchResult) {
        self.events.lock().push(format!("done {}", result.status_message));
    }
}

fn recorded_session() -> (SearchSession<ManualClock>, ManualClock, Arc<Mutex<Vec<String>>>) {
    let clock = ManualClock::new();
    let mut session = SearchSession::with_clock(
        Arc::new(sample_engine()),
        SessionOptions::default(),
        clock.clone(),
    );
    let recorder = Recorder::default();
    let events = Arc::clone(&recorder.events);
    session.add_listener(Box::new(recorder));
    (session, clock, events)
}

#[test]
fn test_started_then_completed() {
    let (mut session, _, events) = recorded_session();
    session.on_submit("sofa");

    assert_eq!(
        *events.lock(),
        vec!["start sofa", "done Found 1 result for 'sofa'"]
    );
}

#[test]
fn test_debounced_burst_notifies_once() {
    let (mut session, clock, events) = recorded_session();
    session.on_text_changed("ta");
    session.on_text_changed("tab");
    session.on_text_changed("table");
    clock.advance(Duration::from_millis(500));
    session.poll();

    let events = events.lock();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], "start table");
}

#[test]
fn test_blank_submit_and_clear_are_silent() {
    let (mut session, _, events) = recorded_session();
    session.on_submit("   ");
    session.clear();

    assert!(events.lock().is_empty());
    assert_eq!(session.status(), CLEARED_STATUS);
}

#[test]
fn test_every_listener_hears_each_search() {
    let (mut session, _, first) = recorded_session();
    let second = Recorder::default();
    let second_events = Arc::clone(&second.events);
    session.add_listener(Box::new(second));

    session.on_submit("lamp");
    session.on_submit("bed");

    assert_eq!(first.lock().len(), 4);
    assert_eq!(*first.lock(), *second_events.lock());
}
