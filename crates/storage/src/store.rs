// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The persisted ledger.
//!
//! [`TicketStore`] owns the in-memory ledger and its snapshot file. Loading
//! applies the day-rotation rule; every mutation is written to disk before it
//! becomes visible in memory.

use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};
use turno_core::{
    coerce_count, field, parse_ticket, validate_desk, Clock, Ledger, Ticket, ValidatedImport,
    ValidationError,
};

use crate::atomic::{AtomicWriter, FileOps, StdFs};
use crate::migration::{MigrationContext, MigrationRegistry};
use crate::snapshot::{read_raw, SnapshotDoc, SnapshotError, SnapshotPaths};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("failed to persist ticket snapshot: {0}")]
    Persistence(#[from] SnapshotError),
    #[error("ticket numbers are exhausted at {0}; import a lower \"ultimo\" to continue")]
    NumbersExhausted(u64),
}

/// How the last load arrived at the current ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Today's snapshot was adopted as-is
    Current,
    /// A same-day snapshot in an older format was upgraded
    Migrated,
    /// The ledger started empty
    Reset(ResetReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReason {
    /// No snapshot file
    Missing,
    /// The file could not be read or is not a JSON object
    Unreadable,
    /// The snapshot belongs to another day
    NewDay,
    /// A legacy snapshot that could not be proven to be from today
    StaleLegacy,
}

turno_core::variant_names! {
    ResetReason {
        Missing => "no snapshot",
        Unreadable => "unreadable snapshot",
        NewDay => "new day",
        StaleLegacy => "stale legacy snapshot",
    }
}

impl LoadOutcome {
    fn needs_save(self) -> bool {
        !matches!(self, LoadOutcome::Current)
    }
}

/// Ledger plus its durable snapshot.
pub struct TicketStore<C: Clock, F: FileOps = StdFs> {
    ledger: Ledger,
    clock: C,
    fs: F,
    writer: AtomicWriter<F>,
    migrations: MigrationRegistry,
    last_load: LoadOutcome,
}

impl<C: Clock> TicketStore<C, StdFs> {
    /// Load the ledger from `paths` on the real filesystem
    pub fn open(paths: SnapshotPaths, clock: C) -> Self {
        Self::open_with(paths, clock, StdFs)
    }
}

impl<C: Clock, F: FileOps> TicketStore<C, F> {
    /// Load the ledger from `paths`. Never fails; see [`TicketStore::load`].
    pub fn open_with(paths: SnapshotPaths, clock: C, fs: F) -> Self {
        let ledger = Ledger::fresh(clock.today());
        let writer = AtomicWriter::new(paths, fs.clone());
        let mut store = Self {
            ledger,
            clock,
            fs,
            writer,
            migrations: MigrationRegistry::new(),
            last_load: LoadOutcome::Current,
        };
        store.load();
        store
    }

    /// Re-read the snapshot and apply the day-rotation rule.
    ///
    /// A snapshot dated today is adopted. A same-day legacy snapshot is
    /// upgraded and saved. Anything else (missing, unreadable, another day)
    /// resets to an empty ledger for today, which is saved immediately. A
    /// failed save here is logged and the in-memory ledger is kept.
    pub fn load(&mut self) -> LoadOutcome {
        let today = self.clock.today();
        let (ledger, outcome) = self.read_ledger(today);
        self.ledger = ledger;

        match outcome {
            LoadOutcome::Current => info!(
                day = %today,
                last_issued = self.ledger.last_issued(),
                pending = self.ledger.pending(),
                "loaded today's tickets"
            ),
            LoadOutcome::Migrated => {
                info!(day = %today, last_issued = self.ledger.last_issued(), "upgraded legacy snapshot")
            }
            LoadOutcome::Reset(reason) => info!(day = %today, %reason, "starting an empty ledger"),
        }

        if outcome.needs_save() {
            if let Err(e) = self.persist(&self.ledger) {
                warn!(error = %e, "could not save ledger after load, continuing in memory");
            }
        }
        self.last_load = outcome;
        outcome
    }

    fn read_ledger(&self, today: NaiveDate) -> (Ledger, LoadOutcome) {
        let reset = |reason| (Ledger::fresh(today), LoadOutcome::Reset(reason));
        let live = &self.writer.paths().live;

        let raw = match read_raw(&self.fs, live) {
            Ok(Some(raw)) => raw,
            Ok(None) => return reset(ResetReason::Missing),
            Err(e) => {
                warn!(path = %live.display(), error = %e, "ignoring unreadable snapshot");
                return reset(ResetReason::Unreadable);
            }
        };
        if !raw.doc.is_object() {
            warn!(path = %live.display(), "ignoring snapshot that is not a JSON object");
            return reset(ResetReason::Unreadable);
        }

        let stamped = raw.doc.get(field::DATE).and_then(Value::as_str).map(str::to_owned);
        if stamped.as_deref().and_then(|s| s.parse::<NaiveDate>().ok()) == Some(today) {
            return (adopt(&raw.doc, today), LoadOutcome::Current);
        }

        let ctx = MigrationContext {
            today,
            modified_on: raw.modified.map(|t| self.clock.local_date_of(t)),
        };
        match self.migrations.migrate(raw.doc, &ctx) {
            Ok(Some(doc)) => (adopt(&doc, today), LoadOutcome::Migrated),
            Ok(None) => {
                debug!(stamped = ?stamped, "snapshot is from another day");
                reset(ResetReason::NewDay)
            }
            Err(e) => {
                debug!(error = %e, "legacy snapshot rejected");
                reset(ResetReason::StaleLegacy)
            }
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn last_load(&self) -> LoadOutcome {
        self.last_load
    }

    pub fn paths(&self) -> &SnapshotPaths {
        self.writer.paths()
    }

    /// Issue the next ticket and return the confirmation text.
    pub fn advance(&mut self) -> Result<String, StoreError> {
        let mut next = self.ledger.clone();
        let Some(ticket) = next.issue() else {
            warn!(last_issued = self.ledger.last_issued(), "no ticket numbers left");
            return Err(StoreError::NumbersExhausted(self.ledger.last_issued()));
        };
        self.commit(next)?;
        info!(number = ticket.number, "issued ticket");
        Ok(format!("Ticket created: {}", ticket.number))
    }

    /// Serve the oldest waiting ticket at `desk`.
    ///
    /// Returns `Ok(None)` without writing anything when nobody is waiting.
    pub fn serve(&mut self, desk: &str) -> Result<Option<Ticket>, StoreError> {
        let desk = validate_desk(desk)?;
        let mut next = self.ledger.clone();
        let Some(ticket) = next.serve_next(desk) else {
            debug!(desk, "no tickets waiting");
            return Ok(None);
        };
        self.commit(next)?;
        info!(number = ticket.number, desk, "serving ticket");
        Ok(Some(ticket))
    }

    /// Replace the whole ledger with a validated import stamped with today's date.
    ///
    /// Nothing changes, in memory or on disk, if validation fails.
    pub fn replace(&mut self, payload: &Value) -> Result<SnapshotDoc, StoreError> {
        let import = ValidatedImport::parse(payload)?;
        let next = Ledger::from_import(import, self.clock.today());
        self.commit(next)?;
        info!(
            last_issued = self.ledger.last_issued(),
            pending = self.ledger.pending(),
            "replaced ledger from import"
        );
        Ok(self.export())
    }

    /// The current snapshot document
    pub fn export(&self) -> SnapshotDoc {
        SnapshotDoc::from(&self.ledger)
    }

    /// Persist `next`, then make it current. On failure the previous ledger stays.
    fn commit(&mut self, next: Ledger) -> Result<(), StoreError> {
        self.persist(&next)?;
        self.ledger = next;
        Ok(())
    }

    fn persist(&self, ledger: &Ledger) -> Result<(), SnapshotError> {
        let bytes = SnapshotDoc::from(ledger).to_pretty_json()?;
        self.writer.write(&bytes)
    }
}

/// Take a same-day document's fields, dropping what does not parse
fn adopt(doc: &Value, today: NaiveDate) -> Ledger {
    let last_issued = doc.get(field::LAST_ISSUED).and_then(coerce_count).unwrap_or(0);
    Ledger::restore(
        today,
        last_issued,
        lenient_tickets(doc, field::WAITING),
        lenient_tickets(doc, field::RECENT_SERVED),
    )
}

fn lenient_tickets(doc: &Value, list: &'static str) -> Vec<Ticket> {
    let Some(items) = doc.get(list).and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match parse_ticket(item) {
            Ok(ticket) => Some(ticket),
            Err(fault) => {
                warn!(list, %fault, "dropping malformed ticket from snapshot");
                None
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
