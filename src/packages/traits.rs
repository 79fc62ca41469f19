// src/packages/traits.rs

//! Common trait for package manager backends

use std::collections::HashSet;

/// Read-only view of a system package manager
///
/// Implementations never fail: a query the package manager cannot answer is
/// reported as an empty list or set.
pub trait PackageBackend: Send + Sync {
    /// Short backend name (e.g., "apt", "xbps")
    fn name(&self) -> &'static str;

    /// Manually-installed package names in the order the package manager
    /// reports them. Duplicates are kept.
    fn list_manual(&self) -> Vec<String>;

    /// Every package `package` requires through hard dependency edges,
    /// directly or transitively. Never contains `package` itself.
    fn closure(&self, package: &str) -> HashSet<String>;
}

/// Turn raw query lines into a dependency closure of `package`
///
/// Lines the normalizer discards are dropped, and the queried package is
/// removed since some tools list the root of the tree.
pub fn collect_closure<F>(package: &str, lines: &[String], normalize: F) -> HashSet<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut deps: HashSet<String> = lines
        .iter()
        .filter_map(|line| normalize(line.as_str()))
        .collect();
    deps.remove(package);
    deps
}
