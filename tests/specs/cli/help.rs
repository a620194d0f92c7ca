// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use crate::prelude::*;

#[test]
fn turno_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn turno_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("next")
        .stdout_has("serve")
        .stdout_has("status")
        .stdout_has("export")
        .stdout_has("import");
}

#[test]
fn turno_serve_help_names_the_desk() {
    cli().args(&["serve", "--help"]).passes().stdout_has("<DESK>");
}

#[test]
fn turno_version_includes_package_version() {
    cli().args(&["--version"]).passes().stdout_has(env!("CARGO_PKG_VERSION"));
}

#[test]
fn unknown_command_fails() {
    cli().args(&["reset"]).fails();
}
