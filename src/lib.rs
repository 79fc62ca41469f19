// src/lib.rs

//! manual-dupes
//!
//! Finds redundant manual marks: packages a user explicitly installed that
//! another manually-installed package already depends on. Such a package
//! could be marked as automatically installed without the system losing it.
//!
//! # Architecture
//!
//! - Backends: one `PackageBackend` per package manager (apt, xbps), each
//!   running the system's own query tools as subprocesses
//! - Queries never fail the run: an unanswerable query counts as empty
//! - Report: closure members that are also manual, ordered by their position
//!   in the manual list

pub mod cli;
pub mod commands;
mod error;
pub mod packages;
pub mod report;

pub use error::{Error, Result};
pub use packages::{
    AptBackend, BackendChoice, BackendKind, CommandRunner, PackageBackend, SystemRunner,
    XbpsBackend,
};
pub use report::{find_redundancies, ManualSet, Redundancy, ScanReport, Scanner};
