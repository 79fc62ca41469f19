// src/cli.rs
//! CLI definitions for manual-dupes
//!
//! The combined `manual-dupes` executable and the per-backend
//! `apt-deps-dupes`/`xbps-deps-dupes` executables share the scan options
//! below. None of them take a required argument.

use clap::{Args, Parser};

#[derive(Parser, Debug)]
#[command(name = "manual-dupes")]
#[command(author = "manual-dupes Contributors")]
#[command(version)]
#[command(
    about = "Report manually-installed packages that another manual package already depends on",
    long_about = None
)]
pub struct Cli {
    /// Package manager to query: auto, apt or xbps
    #[arg(short, long, default_value = "auto")]
    pub backend: String,

    #[command(flatten)]
    pub scan: ScanArgs,
}

/// CLI for the single-backend executables
#[derive(Parser, Debug)]
#[command(version)]
#[command(about = "Report manually-installed packages that another manual package already depends on", long_about = None)]
pub struct BackendCli {
    #[command(flatten)]
    pub scan: ScanArgs,
}

/// Options shared by every executable
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Number of dependency queries to run at once
    #[arg(short, long, default_value_t = 1)]
    pub jobs: usize,

    /// Kill a dependency query after this many seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Log each query to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for ScanArgs {
    fn default() -> Self {
        Self {
            jobs: 1,
            timeout: None,
            verbose: false,
        }
    }
}
