// src/packages/mod.rs

//! Package manager backends
//!
//! Each backend answers two questions about the running system: which
//! packages were installed manually, and what a given package depends on.
//! Backends implement the `PackageBackend` trait and run the system's own
//! query tools through a `CommandRunner`.

pub mod apt_query;
pub mod registry;
pub mod runner;
pub mod traits;
pub mod xbps_query;

pub use apt_query::AptBackend;
pub use registry::{BackendChoice, BackendKind};
pub use runner::{run_lines, CommandRunner, SystemRunner};
pub use traits::PackageBackend;
pub use xbps_query::XbpsBackend;
