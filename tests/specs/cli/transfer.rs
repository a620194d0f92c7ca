// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Export and bulk import

use crate::prelude::*;

#[test]
fn export_prints_the_snapshot() {
    let temp = Project::empty();
    temp.turno().args(&["next"]).passes();

    let doc = temp.turno().args(&["export"]).passes().stdout_json();

    assert_eq!(doc, temp.snapshot());
    assert_eq!(doc["ultimo"], 1);
    assert_eq!(doc["date"].as_str().map(str::len), Some(10));
}

#[test]
fn export_to_file_and_import_it_elsewhere() {
    let source = Project::empty();
    source.turno().args(&["next"]).passes();
    source.turno().args(&["next"]).passes();
    source.turno().args(&["serve", "A"]).passes();
    let file = source.path().join("tickets.json");
    let file_arg = file.to_string_lossy().into_owned();

    source.turno().args(&["export", "-f", &file_arg]).passes().stdout_has("Exported tickets to");

    let target = Project::empty();
    target
        .turno()
        .args(&["import", &file_arg])
        .passes()
        .stdout_eq("Imported tickets: last issued 2, 1 waiting, 1 recently served");
    assert_eq!(target.snapshot(), source.snapshot());
}

#[test]
fn import_from_stdin() {
    let temp = Project::empty();

    let doc = temp
        .turno()
        .args(&["import", "-", "-o", "json"])
        .stdin(r#"{"ultimo": 10, "tickets": [], "ultimos4": []}"#)
        .passes()
        .stdout_json();

    assert_eq!(doc["ultimo"], 10);
    assert_eq!(doc["tickets"], json!([]));
    temp.turno().args(&["next"]).passes().stdout_eq("Ticket created: 11");
}

#[test]
fn import_coerces_a_numeric_string() {
    let temp = Project::empty();
    temp.turno().args(&["import", "-"]).stdin(r#"{"ultimo": "7"}"#).passes();
    assert_eq!(temp.snapshot()["ultimo"], 7);
}

#[test]
fn invalid_import_leaves_everything_unchanged() {
    let temp = Project::empty();
    temp.turno().args(&["next"]).passes();
    let before = std::fs::read(temp.snapshot_path()).unwrap();

    temp.turno()
        .args(&["import", "-"])
        .stdin(r#"{"ultimo": 1, "tickets": "soon"}"#)
        .fails_with(EXIT_INVALID)
        .stderr_has("\"tickets\" must be an array");

    assert_eq!(std::fs::read(temp.snapshot_path()).unwrap(), before);
}

#[test]
fn malformed_json_is_rejected() {
    let temp = Project::empty();
    temp.turno().args(&["import", "-"]).stdin("{ultimo: 1}").fails_with(EXIT_INVALID).stderr_has("invalid JSON");
}

#[test]
fn missing_import_file_fails() {
    let temp = Project::empty();
    let missing = temp.path().join("missing.json");
    temp.turno().args(&["import", &missing.to_string_lossy()]).fails_with(1).stderr_has("could not read");
}
