// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Where the CLI keeps its data.

use std::path::PathBuf;

use thiserror::Error;
use turno_storage::SnapshotPaths;

use crate::env;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine state directory; set TURNO_STATE_DIR or pass --state-dir")]
    NoStateDir,
}

/// Resolved locations for one invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of all turno state
    pub state_dir: PathBuf,
    /// Snapshot files, under `<state_dir>/db`
    pub snapshot: SnapshotPaths,
}

impl Config {
    /// `state_dir` overrides the environment when given
    pub fn load(state_dir: Option<PathBuf>) -> Result<Self, ConfigError> {
        let state_dir = state_dir.or_else(env::state_dir).ok_or(ConfigError::NoStateDir)?;
        let snapshot = SnapshotPaths::in_dir(state_dir.join("db"));
        Ok(Self { state_dir, snapshot })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
