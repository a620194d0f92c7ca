// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Broadcasts written with `--events`

use crate::prelude::*;

#[test]
fn next_broadcasts_announcement_and_last_issued() {
    let temp = Project::empty();

    let out = temp.turno().args(&["--events", "next"]).passes();

    assert_eq!(
        out.events(),
        vec![
            json!({"event": "announcement", "data": "Ticket created: 1"}),
            json!({"event": "last-issued", "data": 1}),
        ]
    );
    out.stdout_eq("Ticket created: 1");
}

#[test]
fn serve_broadcasts_the_called_ticket() {
    let temp = Project::empty();
    temp.turno().args(&["next"]).passes();

    let out = temp.turno().args(&["serve", "C", "--events"]).passes();

    assert_eq!(
        out.events(),
        vec![
            json!({"event": "now-serving", "data": {"numero": 1, "escritorio": "C"}}),
            json!({"event": "pending-count", "data": 0}),
            json!({"event": "recent-served", "data": [{"numero": 1, "escritorio": "C"}]}),
        ]
    );
}

#[test]
fn empty_serve_broadcasts_nothing() {
    let temp = Project::empty();
    assert!(temp.turno().args(&["--events", "serve", "C"]).passes().events().is_empty());
}

#[test]
fn status_broadcasts_the_initial_burst() {
    let temp = Project::empty();
    temp.turno().args(&["next"]).passes();

    let out = temp.turno().args(&["--events", "status"]).passes();

    let names: Vec<_> = out.events().iter().map(|e| e["event"].clone()).collect();
    assert_eq!(names, vec![json!("last-issued"), json!("recent-served"), json!("pending-count")]);
}

#[test]
fn without_flag_nothing_is_broadcast() {
    let temp = Project::empty();
    assert!(temp.turno().args(&["next"]).passes().events().is_empty());
}
