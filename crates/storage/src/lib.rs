// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Storage layer for turno
//!
//! The ledger is persisted as one JSON snapshot. Writes go through a staged
//! temp-file + backup + rename sequence so the live file always holds a
//! complete document, and every load applies the day-rotation rule.

mod atomic;
mod migration;
mod snapshot;
mod store;

pub use atomic::{AtomicWriter, FileOps, StdFs};
pub use migration::{Migration, MigrationContext, MigrationError, MigrationRegistry};
pub use snapshot::{read_raw, RawSnapshot, SnapshotDoc, SnapshotError, SnapshotPaths};
pub use store::{LoadOutcome, ResetReason, StoreError, TicketStore};

#[cfg(any(test, feature = "test-support"))]
pub use atomic::fake::{FaultyFs, FsCall, FsOp};
