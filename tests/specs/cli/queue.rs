// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Issuing and serving tickets

use crate::prelude::*;

#[test]
fn next_issues_sequential_tickets() {
    let temp = Project::empty();

    temp.turno().args(&["next"]).passes().stdout_eq("Ticket created: 1");
    temp.turno().args(&["next"]).passes().stdout_eq("Ticket created: 2");

    let snapshot = temp.snapshot();
    assert_eq!(snapshot["ultimo"], 2);
    assert_eq!(snapshot["tickets"], json!([{"numero": 1, "escritorio": null}, {"numero": 2, "escritorio": null}]));
}

#[test]
fn serve_calls_the_oldest_ticket() {
    let temp = Project::empty();
    temp.turno().args(&["next"]).passes();
    temp.turno().args(&["next"]).passes();

    temp.turno().args(&["serve", "Desk 1"]).passes().stdout_eq("Now serving #1 @ Desk 1");

    let snapshot = temp.snapshot();
    assert_eq!(snapshot["tickets"], json!([{"numero": 2, "escritorio": null}]));
    assert_eq!(snapshot["ultimos4"], json!([{"numero": 1, "escritorio": "Desk 1"}]));
}

#[test]
fn serve_with_nobody_waiting_is_not_an_error() {
    let temp = Project::empty();
    temp.turno().args(&["serve", "A"]).passes().stdout_eq("No tickets waiting");
}

#[test]
fn serve_rejects_an_empty_desk() {
    let temp = Project::empty();
    temp.turno().args(&["next"]).passes();

    temp.turno().args(&["serve", ""]).fails_with(EXIT_INVALID).stderr_has("desk must not be empty");

    assert_eq!(temp.snapshot()["tickets"].as_array().map(Vec::len), Some(1));
}

#[test]
fn history_keeps_the_last_four() {
    let temp = Project::empty();
    for _ in 0..6 {
        temp.turno().args(&["next"]).passes();
    }
    for desk in ["A", "B", "C", "D", "E"] {
        temp.turno().args(&["serve", desk]).passes();
    }

    let out = temp.turno().args(&["status", "-o", "json"]).passes().stdout_json();
    let recent: Vec<_> = out["recent"].as_array().unwrap().iter().map(|t| t["numero"].clone()).collect();
    assert_eq!(recent, vec![json!(5), json!(4), json!(3), json!(2)]);
    assert_eq!(out["pending"], 1);
}

#[test]
fn status_text_summarises_the_queue() {
    let temp = Project::empty();
    temp.turno().args(&["next"]).passes();
    temp.turno().args(&["next"]).passes();
    temp.turno().args(&["serve", "B"]).passes();

    temp.turno()
        .args(&["status"])
        .passes()
        .stdout_has("Last issued      2")
        .stdout_has("Waiting          1")
        .stdout_has("Recently served  #1 @ B");
}

#[test]
fn json_output_for_next_and_serve() {
    let temp = Project::empty();

    let issued = temp.turno().args(&["-o", "json", "next"]).passes().stdout_json();
    assert_eq!(issued, json!({"message": "Ticket created: 1", "number": 1}));

    let served = temp.turno().args(&["serve", "A", "--output", "json"]).passes().stdout_json();
    assert_eq!(served, json!({"ticket": {"numero": 1, "escritorio": "A"}}));

    let empty = temp.turno().args(&["serve", "A", "-o", "json"]).passes().stdout_json();
    assert_eq!(empty, json!({"ticket": null}));
}
