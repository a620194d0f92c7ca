// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Queue command handlers

use anyhow::Result;
use serde_json::json;
use turno_adapters::Publisher;
use turno_core::Clock;
use turno_engine::TicketControl;

use crate::exit_error::ExitError;
use crate::output::{format_status, print_json, OutputFormat};

pub fn next<C: Clock, P: Publisher>(control: &TicketControl<C, P>, format: OutputFormat) -> Result<()> {
    let message = control.advance().map_err(ExitError::from)?;
    match format {
        OutputFormat::Text => println!("{message}"),
        OutputFormat::Json => {
            let last_issued = control.status().last_issued;
            print_json(&json!({ "message": message, "number": last_issued }))?;
        }
    }
    Ok(())
}

pub fn serve<C: Clock, P: Publisher>(
    control: &TicketControl<C, P>,
    desk: &str,
    format: OutputFormat,
) -> Result<()> {
    let ticket = control.serve(desk).map_err(ExitError::from)?;
    match format {
        OutputFormat::Text => match &ticket {
            Some(ticket) => println!("Now serving {ticket}"),
            None => println!("No tickets waiting"),
        },
        OutputFormat::Json => print_json(&json!({ "ticket": ticket }))?,
    }
    Ok(())
}

/// Print the queue and, with `--events`, publish the burst a display needs
pub fn status<C: Clock, P: Publisher>(control: &TicketControl<C, P>, format: OutputFormat) -> Result<()> {
    control.sync();
    let status = control.status();
    match format {
        OutputFormat::Text => println!("{}", format_status(&status)),
        OutputFormat::Json => print_json(&status)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
