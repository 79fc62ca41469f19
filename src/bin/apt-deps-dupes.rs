// src/bin/apt-deps-dupes.rs

use anyhow::Result;
use manual_dupes::commands;
use manual_dupes::BackendKind;

fn main() -> Result<()> {
    let cli = commands::parse_backend_cli("apt-deps-dupes");
    commands::init_logging(cli.scan.verbose);

    commands::cmd_scan_backend(BackendKind::Apt, &cli.scan)
}
