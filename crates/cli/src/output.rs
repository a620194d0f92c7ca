// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;
use turno_core::Ticket;
use turno_engine::Status;

use crate::color;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Tickets as `#2 @ B, #1 @ A`, or a muted dash when there are none
pub fn format_tickets(tickets: &[Ticket]) -> String {
    if tickets.is_empty() {
        return color::muted("-");
    }
    tickets.iter().map(Ticket::to_string).collect::<Vec<_>>().join(", ")
}

pub fn format_status(status: &Status) -> String {
    let rows = [
        ("Day", status.day.to_string()),
        ("Last issued", status.last_issued.to_string()),
        ("Waiting", status.pending.to_string()),
        ("Recently served", format_tickets(&status.recent)),
    ];
    rows.iter()
        .map(|(label, value)| format!("{} {}", color::header(&format!("{label:<16}")), value))
        .collect::<Vec<_>>()
        .join("\n")
}
