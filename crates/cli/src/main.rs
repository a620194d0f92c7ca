// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! turno: walk-in ticket queue from the command line

mod color;
mod commands;
mod config;
mod env;
mod exit_error;
mod logging;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use turno_adapters::{JsonLinesPublisher, NoopPublisher};

use crate::commands::Command;
use crate::config::Config;
use crate::exit_error::{ExitError, EXIT_FAILURE};
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "turno", version = env::VERSION, about = "Walk-in ticket queue", styles = color::styles())]
struct Cli {
    /// Directory holding the ticket database
    #[arg(long, global = true, value_name = "DIR")]
    state_dir: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long = "output", global = true, value_enum, default_value_t)]
    output: OutputFormat,

    /// Write queue broadcasts to stderr as JSON lines
    #[arg(long, global = true)]
    events: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

fn main() {
    logging::init();
    if let Err(e) = run() {
        let code = e.downcast_ref::<ExitError>().map_or(EXIT_FAILURE, |e| e.code);
        eprintln!("error: {e:#}");
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = Config::load(cli.state_dir)?;
    if cli.events {
        commands::dispatch(command, &config, cli.output, JsonLinesPublisher::stderr())
    } else {
        commands::dispatch(command, &config, cli.output, NoopPublisher)
    }
}
