// src/main.rs

use anyhow::Result;
use clap::Parser;
use manual_dupes::cli::Cli;
use manual_dupes::commands;
use manual_dupes::BackendChoice;

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::init_logging(cli.scan.verbose);

    let choice = BackendChoice::parse(&cli.backend)?;
    commands::cmd_scan(choice, &cli.scan)
}
