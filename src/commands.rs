// src/commands.rs
//! Command handlers for the manual-dupes executables

use crate::cli::{BackendCli, ScanArgs};
use crate::packages::{BackendChoice, BackendKind, SystemRunner};
use crate::report::Scanner;
use crate::Error;
use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches};
use std::io;
use std::time::Duration;
use tracing::info;

/// Set up stderr logging; `RUST_LOG` takes precedence over `verbose`
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Parse the command line of a single-backend executable named `bin_name`
pub fn parse_backend_cli(bin_name: &'static str) -> BackendCli {
    let matches = BackendCli::command().name(bin_name).get_matches();
    match BackendCli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    }
}

/// Build the subprocess runner described by `args`
pub fn build_runner(args: &ScanArgs) -> Result<SystemRunner> {
    let runner = SystemRunner::new();
    match args.timeout {
        None => Ok(runner),
        Some(0) => Err(Error::ConfigError("timeout must be at least 1 second".to_string()).into()),
        Some(secs) => Ok(runner.with_timeout(Duration::from_secs(secs))),
    }
}

/// Scan the system and print one line per redundant manual mark to stdout
pub fn cmd_scan(choice: BackendChoice, args: &ScanArgs) -> Result<()> {
    let kind = choice.resolve()?;
    cmd_scan_backend(kind, args)
}

/// Scan with a fixed backend
pub fn cmd_scan_backend(kind: BackendKind, args: &ScanArgs) -> Result<()> {
    let runner = build_runner(args)?;
    let backend = kind.build(runner);
    let scanner = Scanner::new(backend.as_ref()).with_jobs(args.jobs)?;

    let stdout = io::stdout();
    let report = scanner
        .scan_to(stdout.lock())
        .context("Failed to write report")?;

    info!(
        "Checked {} manual packages, {} redundant manual marks",
        report.packages_scanned,
        report.redundancies.len()
    );
    Ok(())
}
