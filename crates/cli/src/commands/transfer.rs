// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Export and import of the whole ledger

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::{json, Value};
use turno_adapters::Publisher;
use turno_core::Clock;
use turno_engine::TicketControl;

use crate::exit_error::{ExitError, EXIT_FAILURE};
use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct ExportArgs {
    /// Write to FILE instead of stdout
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Snapshot to load, or `-` for stdin
    #[arg(value_name = "FILE")]
    pub source: PathBuf,
}

/// Suggested file name for a downloaded export
pub const EXPORT_FILE_NAME: &str = "tickets.json";

pub fn export<C: Clock, P: Publisher>(
    control: &TicketControl<C, P>,
    args: &ExportArgs,
    format: OutputFormat,
) -> Result<()> {
    let bytes = control.export_json().map_err(ExitError::from)?;
    let Some(file) = &args.file else {
        println!("{}", String::from_utf8_lossy(&bytes));
        return Ok(());
    };

    let path = if file.is_dir() { file.join(EXPORT_FILE_NAME) } else { file.clone() };
    std::fs::write(&path, &bytes).map_err(|e| {
        ExitError::new(EXIT_FAILURE, format!("could not write {}: {e}", path.display()))
    })?;
    match format {
        OutputFormat::Text => println!("Exported tickets to {}", path.display()),
        OutputFormat::Json => print_json(&json!({ "path": path }))?,
    }
    Ok(())
}

pub fn import<C: Clock, P: Publisher>(
    control: &TicketControl<C, P>,
    args: &ImportArgs,
    format: OutputFormat,
) -> Result<()> {
    let raw = read_source(&args.source)?;
    let payload = parse_payload(&raw)?;
    let doc = control.replace(&payload).map_err(ExitError::from)?;
    match format {
        OutputFormat::Text => println!(
            "Imported tickets: last issued {}, {} waiting, {} recently served",
            doc.last_issued,
            doc.waiting.len(),
            doc.recent_served.len()
        ),
        OutputFormat::Json => print_json(&doc)?,
    }
    Ok(())
}

fn read_source(source: &Path) -> Result<String> {
    if source == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw).context("reading snapshot from stdin")?;
        return Ok(raw);
    }
    std::fs::read_to_string(source).map_err(|e| {
        ExitError::new(EXIT_FAILURE, format!("could not read {}: {e}", source.display())).into()
    })
}

/// Malformed JSON is a rejected request, like any other invalid payload
fn parse_payload(raw: &str) -> Result<Value, ExitError> {
    serde_json::from_str(raw).map_err(|e| ExitError::invalid(format!("invalid JSON: {e}")))
}

#[cfg(test)]
#[path = "transfer_tests.rs"]
mod tests;
