mod cancel;
mod checkpoint;
mod cli;
mod config;
mod error;
mod execution;
mod installer;
mod logging;
mod manifest;
mod orchestrator;
mod package_managers;
mod report;
mod themes;
mod types;
mod vcs;


use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use crate::cli::Cli;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);
    cli.execute()
}
