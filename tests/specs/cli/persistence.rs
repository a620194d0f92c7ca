// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Day rotation and on-disk recovery

use crate::prelude::*;

#[test]
fn snapshot_from_another_day_starts_fresh() {
    let temp = Project::empty();
    temp.snapshot_file(
        r#"{"ultimo": 40, "date": "2020-01-01", "tickets": [{"numero": 40, "escritorio": null}], "ultimos4": []}"#,
    );

    temp.turno().args(&["next"]).passes().stdout_eq("Ticket created: 1");

    assert_ne!(temp.snapshot()["date"], "2020-01-01");
}

#[test]
fn corrupt_snapshot_starts_fresh_and_is_rewritten() {
    let temp = Project::empty();
    temp.snapshot_file("{\"ultimo\": 4, \"tick");

    temp.turno().args(&["status", "-o", "json"]).passes();

    assert_eq!(temp.snapshot()["ultimo"], 0);
}

#[test]
fn legacy_snapshot_with_another_day_of_month_starts_fresh() {
    let temp = Project::empty();
    // Day 0 never matches a calendar day
    temp.snapshot_file(r#"{"ultimo": 9, "hoy": 0, "tickets": [], "ultimos4": []}"#);

    let out = temp.turno().args(&["status", "-o", "json"]).passes().stdout_json();

    assert_eq!(out["last_issued"], 0);
    assert!(temp.snapshot().get("hoy").is_none());
}

#[test]
fn state_dir_flag_overrides_environment() {
    let temp = Project::empty();
    let other = temp.path().join("elsewhere");
    let other_arg = other.to_string_lossy().into_owned();

    temp.turno().args(&["--state-dir", &other_arg, "next"]).passes();

    assert!(other.join("db/data.json").is_file());
    assert!(!temp.snapshot_path().exists());
}

#[test]
fn unwritable_state_fails_without_issuing() {
    let temp = Project::empty();
    // A file where the db directory should be
    temp.file("state/db", "");

    temp.turno().args(&["next"]).fails_with(1).stderr_has("could not save tickets");
}

#[test]
fn no_temp_file_is_left_behind() {
    let temp = Project::empty();
    temp.turno().args(&["next"]).passes();
    temp.turno().args(&["next"]).passes();

    let db = temp.state_dir().join("db");
    assert!(!db.join("data.tmp").exists());
    assert!(db.join("data.bak.json").is_file());
}
