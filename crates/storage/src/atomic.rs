// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Crash-safe snapshot replacement.
//!
//! A save stages the new document next to the live file and swaps it in with
//! renames, so a reader of the live path sees either the previous snapshot or
//! the new one:
//!
//! 1. write the document to the temp path
//! 2. drop the previous backup
//! 3. rename live -> backup
//! 4. rename temp -> live
//!
//! If any step fails and the live file is gone or unreadable, the backup is
//! renamed back into place before the error is returned. The temp file is
//! removed on every exit path.

use std::io::{self, Write};
use std::path::Path;
use std::time::SystemTime;

use tracing::{debug, warn};

use crate::snapshot::{SnapshotError, SnapshotPaths};

/// The small set of filesystem calls the snapshot protocol needs.
pub trait FileOps: Clone + Send + Sync + 'static {
    fn exists(&self, path: &Path) -> bool;
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
    fn modified(&self, path: &Path) -> io::Result<SystemTime>;
    /// Create or truncate `path`, write `bytes` and flush them to disk
    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()>;
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// The real filesystem
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFs;

impl FileOps for StdFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        std::fs::metadata(path)?.modified()
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut file = std::fs::File::create(path)?;
        file.write_all(bytes)?;
        file.sync_all()
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }
}

/// Writes snapshots with the staged rename protocol.
#[derive(Debug, Clone)]
pub struct AtomicWriter<F: FileOps = StdFs> {
    paths: SnapshotPaths,
    fs: F,
}

impl<F: FileOps> AtomicWriter<F> {
    pub fn new(paths: SnapshotPaths, fs: F) -> Self {
        Self { paths, fs }
    }

    pub fn paths(&self) -> &SnapshotPaths {
        &self.paths
    }

    /// Replace the live snapshot with `bytes`.
    pub fn write(&self, bytes: &[u8]) -> Result<(), SnapshotError> {
        let result = self.stage_and_swap(bytes);
        if let Err(e) = &result {
            warn!(path = %self.paths.live.display(), error = %e, "snapshot write failed");
            self.rollback();
        }
        self.remove_temp();
        result
    }

    fn stage_and_swap(&self, bytes: &[u8]) -> Result<(), SnapshotError> {
        if let Some(dir) = self.paths.live.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !self.fs.exists(dir) {
                self.fs.create_dir_all(dir)?;
            }
        }

        self.fs.write(&self.paths.temp, bytes)?;

        if self.fs.exists(&self.paths.backup) {
            // A stale backup is replaced by the rename below anyway
            if let Err(e) = self.fs.remove_file(&self.paths.backup) {
                debug!(path = %self.paths.backup.display(), error = %e, "could not remove old backup");
            }
        }
        if self.fs.exists(&self.paths.live) {
            self.fs.rename(&self.paths.live, &self.paths.backup)?;
        }
        self.fs.rename(&self.paths.temp, &self.paths.live)?;
        Ok(())
    }

    /// Best-effort restore of the backup. Failures are logged and swallowed so
    /// the caller still sees the original error.
    fn rollback(&self) {
        if !self.fs.exists(&self.paths.backup) || self.live_is_intact() {
            return;
        }
        if self.fs.exists(&self.paths.live) {
            if let Err(e) = self.fs.remove_file(&self.paths.live) {
                warn!(path = %self.paths.live.display(), error = %e, "rollback could not remove damaged snapshot");
                return;
            }
        }
        match self.fs.rename(&self.paths.backup, &self.paths.live) {
            Ok(()) => warn!(path = %self.paths.live.display(), "restored previous snapshot from backup"),
            Err(e) => warn!(path = %self.paths.live.display(), error = %e, "rollback failed"),
        }
    }

    fn live_is_intact(&self) -> bool {
        self.fs
            .read(&self.paths.live)
            .ok()
            .is_some_and(|bytes| serde_json::from_slice::<serde_json::Value>(&bytes).is_ok())
    }

    fn remove_temp(&self) {
        if self.fs.exists(&self.paths.temp) {
            if let Err(e) = self.fs.remove_file(&self.paths.temp) {
                debug!(path = %self.paths.temp.display(), error = %e, "could not remove temp snapshot");
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
pub(crate) mod fake {
    use super::{FileOps, StdFs};
    use parking_lot::Mutex;
    use std::io;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use std::time::SystemTime;

    /// Mutating filesystem operation
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum FsOp {
        Write,
        Rename,
        Remove,
    }

    /// Recorded mutating call; `path` is the destination for renames
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct FsCall {
        pub op: FsOp,
        pub path: PathBuf,
    }

    struct Fault {
        call: FsCall,
        /// `None` fails forever
        remaining: Option<usize>,
    }

    #[derive(Default)]
    struct FaultyFsState {
        calls: Vec<FsCall>,
        faults: Vec<Fault>,
    }

    /// Real filesystem with injectable failures and a call log
    #[derive(Clone, Default)]
    pub struct FaultyFs {
        inner: Arc<Mutex<FaultyFsState>>,
    }

    impl FaultyFs {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every `op` targeting `path` fail
        pub fn fail(&self, op: FsOp, path: impl Into<PathBuf>) {
            let call = FsCall { op, path: path.into() };
            self.inner.lock().faults.push(Fault { call, remaining: None });
        }

        /// Make only the next `op` targeting `path` fail
        pub fn fail_once(&self, op: FsOp, path: impl Into<PathBuf>) {
            let call = FsCall { op, path: path.into() };
            self.inner.lock().faults.push(Fault { call, remaining: Some(1) });
        }

        /// Remove all injected failures
        pub fn heal(&self) {
            self.inner.lock().faults.clear();
        }

        /// Mutating calls made so far, including failed ones
        pub fn calls(&self) -> Vec<FsCall> {
            self.inner.lock().calls.clone()
        }

        fn check(&self, op: FsOp, path: &Path) -> io::Result<()> {
            let mut state = self.inner.lock();
            state.calls.push(FsCall { op, path: path.to_path_buf() });
            let Some(fault) = state
                .faults
                .iter_mut()
                .find(|f| f.call.op == op && f.call.path == path && f.remaining != Some(0))
            else {
                return Ok(());
            };
            if let Some(remaining) = fault.remaining.as_mut() {
                *remaining -= 1;
            }
            Err(io::Error::other(format!("injected {op:?} failure")))
        }
    }

    impl FileOps for FaultyFs {
        fn exists(&self, path: &Path) -> bool {
            StdFs.exists(path)
        }

        fn create_dir_all(&self, path: &Path) -> io::Result<()> {
            StdFs.create_dir_all(path)
        }

        fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
            StdFs.read(path)
        }

        fn modified(&self, path: &Path) -> io::Result<SystemTime> {
            StdFs.modified(path)
        }

        fn write(&self, path: &Path, bytes: &[u8]) -> io::Result<()> {
            self.check(FsOp::Write, path)?;
            StdFs.write(path, bytes)
        }

        fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
            self.check(FsOp::Rename, to)?;
            StdFs.rename(from, to)
        }

        fn remove_file(&self, path: &Path) -> io::Result<()> {
            self.check(FsOp::Remove, path)?;
            StdFs.remove_file(path)
        }
    }
}

#[cfg(test)]
#[path = "atomic_tests.rs"]
mod tests;
