// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

/// Version shown by `--version`
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH"));

/// Log filter used when `TURNO_LOG` is unset or unparseable
pub const DEFAULT_LOG_FILTER: &str = "warn";

fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Resolve state directory: TURNO_STATE_DIR > XDG_STATE_HOME/turno > ~/.local/state/turno
pub fn state_dir() -> Option<PathBuf> {
    if let Some(dir) = var("TURNO_STATE_DIR") {
        return Some(PathBuf::from(dir));
    }
    if let Some(xdg) = var("XDG_STATE_HOME") {
        return Some(PathBuf::from(xdg).join("turno"));
    }
    dirs::home_dir().map(|home| home.join(".local/state/turno"))
}

/// `tracing` filter directives, e.g. `info` or `turno_storage=debug`
pub fn log_filter() -> String {
    var("TURNO_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
