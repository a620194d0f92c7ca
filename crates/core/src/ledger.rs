// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory ticket ledger.
//!
//! The ledger owns the day's numbering: the last issued number, the FIFO of
//! waiting tickets and a short most-recent-first history of served tickets.
//! It performs no I/O; persistence wraps it in `turno-storage`.

use std::collections::VecDeque;

use chrono::NaiveDate;

use crate::import::{ValidatedImport, MAX_TICKET_NUMBER};
use crate::ticket::Ticket;

/// Number of served tickets kept in the history
pub const RECENT_SERVED_CAP: usize = 4;

/// The full queue state for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    last_issued: u64,
    day: NaiveDate,
    waiting: VecDeque<Ticket>,
    recent_served: VecDeque<Ticket>,
}

impl Ledger {
    /// An empty ledger for `day`
    pub fn fresh(day: NaiveDate) -> Self {
        Self { last_issued: 0, day, waiting: VecDeque::new(), recent_served: VecDeque::new() }
    }

    /// Rebuild a ledger from previously persisted parts.
    ///
    /// The history is capped at [`RECENT_SERVED_CAP`], keeping the most recent entries.
    pub fn restore(
        day: NaiveDate,
        last_issued: u64,
        waiting: impl IntoIterator<Item = Ticket>,
        recent_served: impl IntoIterator<Item = Ticket>,
    ) -> Self {
        Self {
            last_issued,
            day,
            waiting: waiting.into_iter().collect(),
            recent_served: recent_served.into_iter().take(RECENT_SERVED_CAP).collect(),
        }
    }

    /// Build a ledger from a validated import, stamped with `day`.
    pub fn from_import(import: ValidatedImport, day: NaiveDate) -> Self {
        let (last_issued, waiting, recent_served) = import.into_parts();
        Self::restore(day, last_issued, waiting, recent_served)
    }

    pub fn last_issued(&self) -> u64 {
        self.last_issued
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn waiting(&self) -> &VecDeque<Ticket> {
        &self.waiting
    }

    pub fn recent_served(&self) -> &VecDeque<Ticket> {
        &self.recent_served
    }

    /// Number of tickets still waiting
    pub fn pending(&self) -> usize {
        self.waiting.len()
    }

    /// Issue the next ticket number and append it to the waiting queue.
    ///
    /// Returns `None`, leaving the ledger untouched, once numbering has
    /// reached [`MAX_TICKET_NUMBER`]; a higher number could not be read back.
    pub fn issue(&mut self) -> Option<Ticket> {
        if self.last_issued >= MAX_TICKET_NUMBER {
            return None;
        }
        self.last_issued += 1;
        let ticket = Ticket::waiting(self.last_issued);
        self.waiting.push_back(ticket.clone());
        Some(ticket)
    }

    /// Serve the oldest waiting ticket at `desk`.
    ///
    /// Returns `None` without touching the ledger when nobody is waiting.
    pub fn serve_next(&mut self, desk: &str) -> Option<Ticket> {
        let mut ticket = self.waiting.pop_front()?;
        ticket.desk = Some(desk.to_string());

        self.recent_served.push_front(ticket.clone());
        self.recent_served.truncate(RECENT_SERVED_CAP);
        Some(ticket)
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
