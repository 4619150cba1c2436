// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Debounce timing, driven by a manual clock.

use crate::common::sample_engine;
use settee::{
    ManualClock, SearchSession, SessionOptions, SessionState, SystemClock, READY_STATUS,
};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn session_with(options: SessionOptions) -> (SearchSession<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let session = SearchSession::with_clock(Arc::new(sample_engine()), options, clock.clone());
    (session, clock)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_burst_of_edits_runs_one_search() {
    let (mut session, clock) = session_with(SessionOptions::default());

    for text in ["le", "lea", "leat", "leath", "leather"] {
        session.on_text_changed(text);
        clock.advance(ms(100));
        assert!(session.poll().is_none(), "fired early at '{}'", text);
    }

    // Last edit at t=400, so due at t=900; clock is at 500
    clock.advance(ms(399));
    assert!(session.poll().is_none());
    clock.advance(ms(1));

    let result = session.poll().expect("search should be due");
    assert_eq!(result.display_names(), vec!["Leather Sofa"]);
    assert_eq!(session.history(), vec!["leather"]);
    assert!(session.poll().is_none());
}

#[test]
fn test_deadline_tracks_last_edit() {
    let (mut session, clock) = session_with(SessionOptions::default());

    let first = session.on_text_changed("so").expect("scheduled");
    assert_eq!(first.deadline(), ms(500));

    clock.advance(ms(200));
    let second = session.on_text_changed("sofa").expect("scheduled");
    assert_eq!(second.deadline(), ms(700));
    assert_eq!(session.next_deadline(), Some(ms(700)));
}

#[test]
fn test_custom_delay_and_min_length() {
    let options = SessionOptions {
        search_delay: ms(50),
        min_query_len: 4,
        ..SessionOptions::default()
    };
    let (mut session, clock) = session_with(options);

    assert!(session.on_text_changed("bed").is_none());
    assert_eq!(session.state(), SessionState::Idle);
    assert_eq!(session.status(), READY_STATUS);

    assert!(session.on_text_changed("lamp").is_some());
    clock.advance(ms(50));
    let result = session.poll().expect("search should be due");
    assert_eq!(result.display_names(), vec!["Modern Floor Lamp"]);
}

#[test]
fn test_length_counts_raw_chars() {
    let (mut session, _) = session_with(SessionOptions::default());
    assert!(session.on_text_changed("a").is_none());
    assert!(session.on_text_changed(" a").is_some());
    assert!(session.on_text_changed("é").is_none());
    assert!(session.on_text_changed("éé").is_some());
}

#[test]
fn test_only_latest_ticket_fires() {
    let (mut session, _) = session_with(SessionOptions::default());
    let tickets: Vec<_> = ["ch", "cha", "chai", "chair"]
        .into_iter()
        .filter_map(|text| session.on_text_changed(text))
        .collect();

    for stale in &tickets[..3] {
        assert!(session.fire(*stale).is_none());
    }
    let result = session.fire(tickets[3]).expect("latest ticket fires");
    assert_eq!(result.display_names(), vec!["Modern Chair"]);
    assert_eq!(session.history(), vec!["chair"]);
}

#[test]
fn test_system_clock_session() {
    let options = SessionOptions {
        search_delay: ms(20),
        ..SessionOptions::default()
    };
    let mut session: SearchSession<SystemClock> =
        SearchSession::new(Arc::new(sample_engine()), options);

    session.on_text_changed("sofa");
    thread::sleep(ms(40));
    let result = session.poll().expect("search should be due");
    assert_eq!(result.display_names(), vec!["Leather Sofa"]);
}
