// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ticket control: the entry point a host calls for every queue operation.

use chrono::NaiveDate;
use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use turno_adapters::Publisher;
use turno_core::{Broadcast, Clock, Ticket, ValidationError};
use turno_storage::{
    FileOps, LoadOutcome, SnapshotDoc, SnapshotError, SnapshotPaths, StdFs, StoreError,
    TicketStore,
};

/// Errors returned to the host
#[derive(Debug, Error)]
pub enum ControlError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("could not save tickets: {0}")]
    Persistence(#[from] SnapshotError),
    #[error("ticket numbers are exhausted at {0}; import a lower \"ultimo\" to continue")]
    NumbersExhausted(u64),
}

impl From<StoreError> for ControlError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Validation(e) => ControlError::Validation(e),
            StoreError::Persistence(e) => ControlError::Persistence(e),
            StoreError::NumbersExhausted(n) => ControlError::NumbersExhausted(n),
        }
    }
}

/// Point-in-time summary of the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub day: NaiveDate,
    pub last_issued: u64,
    pub pending: usize,
    pub recent: Vec<Ticket>,
}

/// Serialized access to one ticket store, broadcasting every change.
///
/// Clones share the same ledger. Each operation holds the lock from
/// validation through persistence and publishing, so operations never
/// interleave and listeners see broadcasts in commit order.
pub struct TicketControl<C: Clock, P: Publisher, F: FileOps = StdFs> {
    store: Arc<Mutex<TicketStore<C, F>>>,
    publisher: P,
}

impl<C: Clock, P: Publisher, F: FileOps> Clone for TicketControl<C, P, F> {
    fn clone(&self) -> Self {
        Self { store: Arc::clone(&self.store), publisher: self.publisher.clone() }
    }
}

impl<C: Clock, P: Publisher> TicketControl<C, P, StdFs> {
    pub fn open(paths: SnapshotPaths, clock: C, publisher: P) -> Self {
        Self::open_with(paths, clock, StdFs, publisher)
    }
}

impl<C: Clock, P: Publisher, F: FileOps> TicketControl<C, P, F> {
    pub fn open_with(paths: SnapshotPaths, clock: C, fs: F, publisher: P) -> Self {
        let store = TicketStore::open_with(paths, clock, fs);
        Self { store: Arc::new(Mutex::new(store)), publisher }
    }

    /// How the ledger was obtained on the most recent load
    pub fn last_load(&self) -> LoadOutcome {
        self.store.lock().last_load()
    }

    /// Re-read the snapshot, applying the day-rotation rule, and push a full refresh
    pub fn reload(&self) -> LoadOutcome {
        let mut store = self.store.lock();
        let outcome = store.load();
        self.broadcast(&Broadcast::full_refresh(store.ledger()));
        outcome
    }

    /// Issue a ticket. Returns the confirmation for the requesting kiosk.
    pub fn advance(&self) -> Result<String, ControlError> {
        let mut store = self.store.lock();
        let message = store.advance()?;
        self.broadcast(&[
            Broadcast::Announcement(message.clone()),
            Broadcast::LastIssued(store.ledger().last_issued()),
        ]);
        Ok(message)
    }

    /// Call the next waiting ticket to `desk`.
    ///
    /// `Ok(None)` means nobody is waiting; nothing is saved or published.
    pub fn serve(&self, desk: &str) -> Result<Option<Ticket>, ControlError> {
        let mut store = self.store.lock();
        let Some(ticket) = store.serve(desk)? else {
            return Ok(None);
        };
        let ledger = store.ledger();
        self.broadcast(&[
            Broadcast::NowServing(ticket.clone()),
            Broadcast::PendingCount(ledger.pending()),
            Broadcast::RecentServed(ledger.recent_served().iter().cloned().collect()),
        ]);
        Ok(Some(ticket))
    }

    /// Validate `payload` and make it the whole ledger.
    pub fn replace(&self, payload: &Value) -> Result<SnapshotDoc, ControlError> {
        let mut store = self.store.lock();
        let doc = store.replace(payload)?;
        self.broadcast(&Broadcast::full_refresh(store.ledger()));
        Ok(doc)
    }

    pub fn export(&self) -> SnapshotDoc {
        self.store.lock().export()
    }

    /// The export as pretty-printed JSON, ready to be saved as a download
    pub fn export_json(&self) -> Result<Vec<u8>, ControlError> {
        Ok(self.export().to_pretty_json()?)
    }

    /// Publish the burst a newly connected display needs
    pub fn sync(&self) {
        let store = self.store.lock();
        self.broadcast(&Broadcast::full_refresh(store.ledger()));
    }

    pub fn status(&self) -> Status {
        let store = self.store.lock();
        let ledger = store.ledger();
        Status {
            day: ledger.day(),
            last_issued: ledger.last_issued(),
            pending: ledger.pending(),
            recent: ledger.recent_served().iter().cloned().collect(),
        }
    }

    /// Publish each broadcast. The operation is already saved, so failures
    /// are only logged.
    fn broadcast(&self, broadcasts: &[Broadcast]) {
        for broadcast in broadcasts {
            if let Err(e) = self.publisher.publish(broadcast) {
                tracing::warn!(event = %broadcast, error = %e, "failed to publish broadcast");
            }
        }
    }
}

#[cfg(test)]
#[path = "control_tests.rs"]
mod tests;
