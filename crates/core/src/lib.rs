// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! turno-core: ticket model, ledger and import validation for the turno queue

pub mod macros;

pub mod broadcast;
pub mod clock;
pub mod field;
pub mod import;
pub mod ledger;
pub mod ticket;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use broadcast::Broadcast;
pub use clock::{Clock, FakeClock, SystemClock};
pub use import::{
    coerce_count, parse_ticket, validate_desk, TicketFault, ValidatedImport, ValidationError,
    MAX_TICKET_NUMBER,
};
pub use ledger::{Ledger, RECENT_SERVED_CAP};
pub use ticket::Ticket;
