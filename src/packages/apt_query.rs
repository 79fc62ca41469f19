// src/packages/apt_query.rs

//! Query manual packages and dependency trees on Debian-family systems
//!
//! This module uses `apt-mark` for the manual list and `apt-cache depends
//! --recurse` for dependency closures.

use crate::packages::runner::{run_lines, CommandRunner};
use crate::packages::traits::{collect_closure, PackageBackend};
use std::collections::HashSet;
use tracing::debug;

const APT_MARK: &str = "apt-mark";
const APT_CACHE: &str = "apt-cache";

/// Arguments for listing manually installed packages
const SHOWMANUAL_ARGS: &[&str] = &["showmanual"];

/// Arguments for a recursive dependency query; the package name is appended.
/// Only hard dependency edges are followed.
const DEPENDS_ARGS: &[&str] = &[
    "depends",
    "--recurse",
    "--no-recommends",
    "--no-suggests",
    "--no-conflicts",
    "--no-breaks",
    "--no-replaces",
    "--no-enhances",
];

/// Debian-family backend driven by apt-mark and apt-cache
pub struct AptBackend<R> {
    runner: R,
}

impl<R: CommandRunner> AptBackend<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Map one line of apt output to a package name
    ///
    /// `apt-cache depends` prints each package at column zero followed by
    /// indented relation lines (`  Depends: libc6`). Indented lines and
    /// virtual packages shown as `<name>` are discarded. Anything after the
    /// first token, such as a version constraint, is dropped.
    pub fn normalize_line(line: &str) -> Option<String> {
        if line.starts_with(char::is_whitespace) {
            return None;
        }
        let token = line.split_whitespace().next()?;
        if token.starts_with('<') && token.ends_with('>') {
            return None;
        }
        Some(token.to_string())
    }
}

impl<R: CommandRunner> PackageBackend for AptBackend<R> {
    fn name(&self) -> &'static str {
        "apt"
    }

    fn list_manual(&self) -> Vec<String> {
        debug!("Querying manually installed apt packages");

        let packages: Vec<String> = run_lines(&self.runner, APT_MARK, SHOWMANUAL_ARGS)
            .iter()
            .filter_map(|line| Self::normalize_line(line))
            .collect();

        debug!("Found {} manually installed packages", packages.len());
        packages
    }

    fn closure(&self, package: &str) -> HashSet<String> {
        debug!("Querying dependency tree for package: {}", package);

        let mut args = DEPENDS_ARGS.to_vec();
        args.push(package);
        let lines = run_lines(&self.runner, APT_CACHE, &args);
        let deps = collect_closure(package, &lines, Self::normalize_line);

        debug!("Found {} dependencies for package {}", deps.len(), package);
        deps
    }
}
