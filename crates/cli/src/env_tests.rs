// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

fn clear() {
    std::env::remove_var("TURNO_STATE_DIR");
    std::env::remove_var("XDG_STATE_HOME");
    std::env::remove_var("TURNO_LOG");
}

#[test]
#[serial]
fn explicit_state_dir_wins() {
    clear();
    std::env::set_var("TURNO_STATE_DIR", "/srv/turno");
    std::env::set_var("XDG_STATE_HOME", "/xdg");

    assert_eq!(state_dir(), Some(PathBuf::from("/srv/turno")));
    clear();
}

#[test]
#[serial]
fn xdg_state_home_is_namespaced() {
    clear();
    std::env::set_var("XDG_STATE_HOME", "/xdg");

    assert_eq!(state_dir(), Some(PathBuf::from("/xdg/turno")));
    clear();
}

#[test]
#[serial]
fn empty_values_are_ignored() {
    clear();
    std::env::set_var("TURNO_STATE_DIR", "");
    std::env::set_var("XDG_STATE_HOME", "/xdg");

    assert_eq!(state_dir(), Some(PathBuf::from("/xdg/turno")));
    clear();
}

#[test]
#[serial]
fn falls_back_to_home() {
    clear();
    if let Some(home) = dirs::home_dir() {
        assert_eq!(state_dir(), Some(home.join(".local/state/turno")));
    }
}

#[test]
#[serial]
fn log_filter_defaults_to_warn() {
    clear();
    assert_eq!(log_filter(), "warn");

    std::env::set_var("TURNO_LOG", "turno_storage=debug");
    assert_eq!(log_filter(), "turno_storage=debug");
    clear();
}
