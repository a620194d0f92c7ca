// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use chrono::NaiveDate;

use crate::ticket::Ticket;

/// An operation applied to a ledger in property tests
#[derive(Debug, Clone)]
pub enum LedgerOp {
    Issue,
    Serve(String),
}

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for ledger operations.
pub mod strategies {
    use super::LedgerOp;
    use proptest::prelude::*;

    pub fn arb_desk() -> impl Strategy<Value = String> {
        "[A-Z][0-9]?"
    }

    pub fn arb_op() -> impl Strategy<Value = LedgerOp> {
        prop_oneof![
            3 => Just(LedgerOp::Issue),
            2 => arb_desk().prop_map(LedgerOp::Serve),
        ]
    }

    pub fn arb_ops(max: usize) -> impl Strategy<Value = Vec<LedgerOp>> {
        prop::collection::vec(arb_op(), 0..max)
    }
}

// ── Factory functions ───────────────────────────────────────────────────

/// Build a date, panicking on an invalid calendar day
#[allow(clippy::panic)]
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid test date {year}-{month}-{day}"),
    }
}

/// Ticket numbers in order
pub fn numbers<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Vec<u64> {
    tickets.into_iter().map(|t| t.number).collect()
}
