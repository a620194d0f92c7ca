// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot document: the on-disk and export form of a ledger.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use turno_core::{Ledger, Ticket};

use crate::atomic::FileOps;

/// Errors that can occur in snapshot operations
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The serialized ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotDoc {
    /// Highest ticket number issued
    #[serde(rename = "ultimo")]
    pub last_issued: u64,
    /// Day the data belongs to
    #[serde(rename = "date")]
    pub day: NaiveDate,
    /// Waiting tickets, FIFO order
    #[serde(rename = "tickets")]
    pub waiting: Vec<Ticket>,
    /// Served history, most recent first
    #[serde(rename = "ultimos4")]
    pub recent_served: Vec<Ticket>,
}

impl From<&Ledger> for SnapshotDoc {
    fn from(ledger: &Ledger) -> Self {
        Self {
            last_issued: ledger.last_issued(),
            day: ledger.day(),
            waiting: ledger.waiting().iter().cloned().collect(),
            recent_served: ledger.recent_served().iter().cloned().collect(),
        }
    }
}

impl SnapshotDoc {
    /// Pretty-printed JSON, the format written to disk and offered for download
    pub fn to_pretty_json(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    pub fn to_value(&self) -> Result<Value, SnapshotError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Locations of the live snapshot and its staging siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotPaths {
    /// Authoritative snapshot
    pub live: PathBuf,
    /// Staging file for the next snapshot
    pub temp: PathBuf,
    /// Previous snapshot, kept until the next save
    pub backup: PathBuf,
}

impl SnapshotPaths {
    /// Standard file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            live: dir.join("data.json"),
            temp: dir.join("data.tmp"),
            backup: dir.join("data.bak.json"),
        }
    }
}

/// A parsed but unvalidated snapshot file.
#[derive(Debug, Clone)]
pub struct RawSnapshot {
    pub doc: Value,
    /// Last modification time, when the filesystem reports one
    pub modified: Option<SystemTime>,
}

/// Read and parse the file at `path`.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn read_raw<F: FileOps>(fs: &F, path: &Path) -> Result<Option<RawSnapshot>, SnapshotError> {
    let bytes = match fs.read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let doc = serde_json::from_slice(&bytes)?;
    let modified = fs.modified(path).ok();
    Ok(Some(RawSnapshot { doc, modified }))
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
