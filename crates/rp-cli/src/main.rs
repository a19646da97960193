//! railplan: print the turn-by-turn movement of N trains.
//!
//! Log output goes to stderr and is controlled by `RAILPLAN_LOG`
//! (`error`, `warn`, `info`, `debug`, `trace`; default `warn`).

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Result, anyhow};
use clap::Parser;
use clap::error::ErrorKind;
use log::debug;

use rp_cli::{Cli, Request, run, usage_error};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("RAILPLAN_LOG", "warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            debug!("{e}");
            eprintln!("Error: {}", usage_error(&e));
            return ExitCode::FAILURE;
        }
    };

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    let request = Request::try_from(cli)?;
    let lines = run(&request)?;

    let mut out = io::stdout().lock();
    for line in &lines {
        writeln!(out, "{line}").map_err(|e| anyhow!("failed to write schedule: {e}"))?;
    }
    out.flush().map_err(|e| anyhow!("failed to write schedule: {e}"))?;
    Ok(())
}
