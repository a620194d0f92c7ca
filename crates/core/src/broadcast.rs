// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! State change notifications pushed to displays and kiosks.

use serde::{Deserialize, Serialize};

use crate::ledger::Ledger;
use crate::ticket::Ticket;

/// A message the host publishes after a ledger operation.
///
/// Serialized as `{"event": "<name>", "data": <payload>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum Broadcast {
    /// Human-readable confirmation for the kiosk that issued a ticket
    Announcement(String),
    /// Highest number issued today
    LastIssued(u64),
    /// The ticket that was just called to a desk
    NowServing(Ticket),
    /// Number of tickets still waiting
    PendingCount(usize),
    /// Served history, most recent first
    RecentServed(Vec<Ticket>),
}

crate::variant_names! {
    Broadcast {
        Announcement(..) => "announcement",
        LastIssued(..) => "last-issued",
        NowServing(..) => "now-serving",
        PendingCount(..) => "pending-count",
        RecentServed(..) => "recent-served",
    }
}

impl Broadcast {
    /// The burst a display needs to render the ledger from scratch
    pub fn full_refresh(ledger: &Ledger) -> Vec<Broadcast> {
        vec![
            Broadcast::LastIssued(ledger.last_issued()),
            Broadcast::RecentServed(ledger.recent_served().iter().cloned().collect()),
            Broadcast::PendingCount(ledger.pending()),
        ]
    }
}

#[cfg(test)]
#[path = "broadcast_tests.rs"]
mod tests;
