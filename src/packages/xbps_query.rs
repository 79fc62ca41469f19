// src/packages/xbps_query.rs

//! Query manual packages and dependency trees on XBPS systems
//!
//! `xbps-query` prints package versions (`bash-5.2.15_1`) rather than bare
//! names, so every line has its version/revision suffix stripped before use.

use crate::packages::runner::{run_lines, CommandRunner};
use crate::packages::traits::{collect_closure, PackageBackend};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

const XBPS_QUERY: &str = "xbps-query";

/// `-<version>_<revision>` at the end of a pkgver string
///
/// This is a heuristic: a name that happens to end in this shape is
/// truncated too.
static VERSION_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-[0-9][A-Za-z0-9.+~]*_[0-9]+$").expect("version suffix pattern is valid")
});

/// XBPS backend driven by xbps-query
pub struct XbpsBackend<R> {
    runner: R,
}

impl<R: CommandRunner> XbpsBackend<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Map one line of xbps-query output to a package name
    pub fn normalize_line(line: &str) -> Option<String> {
        let name = VERSION_SUFFIX.replace(line.trim(), "");
        let name = name.trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}

impl<R: CommandRunner> PackageBackend for XbpsBackend<R> {
    fn name(&self) -> &'static str {
        "xbps"
    }

    fn list_manual(&self) -> Vec<String> {
        debug!("Querying manually installed xbps packages");

        let packages: Vec<String> = run_lines(&self.runner, XBPS_QUERY, &["-m"])
            .iter()
            .filter_map(|line| Self::normalize_line(line))
            .collect();

        debug!("Found {} manually installed packages", packages.len());
        packages
    }

    fn closure(&self, package: &str) -> HashSet<String> {
        debug!("Querying dependency tree for package: {}", package);

        let lines = run_lines(&self.runner, XBPS_QUERY, &["-x", "--fulldeptree", package]);
        let deps = collect_closure(package, &lines, Self::normalize_line);

        debug!("Found {} dependencies for package {}", deps.len(), package);
        deps
    }
}
