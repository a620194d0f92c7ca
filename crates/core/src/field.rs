// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Field names of the snapshot document.
//!
//! These names are the on-disk and export format and must stay stable;
//! existing data files and downloaded exports depend on them.

/// Highest ticket number issued today
pub const LAST_ISSUED: &str = "ultimo";
/// Day stamp (`YYYY-MM-DD`, local time)
pub const DATE: &str = "date";
/// Waiting tickets, FIFO order
pub const WAITING: &str = "tickets";
/// Recently served tickets, most recent first
pub const RECENT_SERVED: &str = "ultimos4";
/// Day-of-month stamp used by the legacy document format
pub const LEGACY_DAY: &str = "hoy";

/// Ticket number
pub const NUMBER: &str = "numero";
/// Desk that served the ticket
pub const DESK: &str = "escritorio";
