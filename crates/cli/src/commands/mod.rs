// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod queue;
pub mod transfer;

use anyhow::Result;
use clap::Subcommand;
use turno_adapters::Publisher;
use turno_core::SystemClock;
use turno_engine::TicketControl;

use crate::config::Config;
use crate::output::OutputFormat;

#[derive(Subcommand)]
pub enum Command {
    /// Issue the next ticket
    Next,
    /// Call the next waiting ticket to a desk
    Serve {
        /// Desk (counter, window) the ticket is called to
        desk: String,
    },
    /// Show today's queue
    Status,
    /// Write the current tickets as a JSON snapshot
    Export(transfer::ExportArgs),
    /// Replace all tickets with a JSON snapshot
    Import(transfer::ImportArgs),
}

/// Open the ledger and run `command` against it
pub fn dispatch<P: Publisher>(
    command: Command,
    config: &Config,
    format: OutputFormat,
    publisher: P,
) -> Result<()> {
    let control = TicketControl::open(config.snapshot.clone(), SystemClock, publisher);
    tracing::debug!(state_dir = %config.state_dir.display(), load = ?control.last_load(), "opened ledger");

    match command {
        Command::Next => queue::next(&control, format),
        Command::Serve { desk } => queue::serve(&control, &desk, format),
        Command::Status => queue::status(&control, format),
        Command::Export(args) => transfer::export(&control, &args, format),
        Command::Import(args) => transfer::import(&control, &args, format),
    }
}
