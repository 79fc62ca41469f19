// src/report.rs

//! Redundant manual-mark detection
//!
//! A manual mark is redundant when the package is already required by
//! another manually-installed package. The scan lists the manual packages,
//! fetches each one's dependency closure, and reports every closure member
//! that is itself manual. Hits for one package are ordered by the position
//! of the dependency in the manual list, never by traversal order, so a scan
//! of an unchanged system always prints the same lines.

use crate::error::{Error, Result};
use crate::packages::PackageBackend;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::io::Write;
use tracing::{debug, info};

/// Manually-installed packages with their first-seen positions
#[derive(Debug, Clone, Default)]
pub struct ManualSet {
    names: Vec<String>,
    members: HashSet<String>,
    order: HashMap<String, usize>,
}

impl ManualSet {
    /// Build from the manual list as reported by the backend
    ///
    /// Repeated names keep the position of their first occurrence.
    pub fn new<I, S>(packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for name in packages {
            let name = name.into();
            if set.members.insert(name.clone()) {
                set.order.insert(name.clone(), set.names.len());
                set.names.push(name);
            }
        }
        set
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    /// Position in the manual list, or -1 for names not in it
    pub fn position(&self, name: &str) -> i64 {
        self.order.get(name).map_or(-1, |&idx| idx as i64)
    }

    /// Unique names in first-seen order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// One redundant manual mark: `package` already pulls in `dependency`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redundancy {
    pub package: String,
    pub dependency: String,
}

impl fmt::Display for Redundancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} depends on {}", self.package, self.dependency)
    }
}

/// Manual packages in `closure` other than `package`, in manual-list order
pub fn find_redundancies(
    package: &str,
    closure: &HashSet<String>,
    manual: &ManualSet,
) -> Vec<Redundancy> {
    let mut hits: Vec<&String> = closure
        .iter()
        .filter(|dep| dep.as_str() != package && manual.contains(dep))
        .collect();
    hits.sort_by(|a, b| {
        manual
            .position(a)
            .cmp(&manual.position(b))
            .then_with(|| a.cmp(b))
    });

    hits.into_iter()
        .map(|dep| Redundancy {
            package: package.to_string(),
            dependency: dep.clone(),
        })
        .collect()
}

/// Result of a full scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Manual list entries whose closure was queried
    pub packages_scanned: usize,
    pub redundancies: Vec<Redundancy>,
}

impl ScanReport {
    /// Write one `"<pkg> depends on <dep>"` line per redundancy
    pub fn write_to<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        for redundancy in &self.redundancies {
            writeln!(out, "{}", redundancy)?;
        }
        out.flush()
    }

    pub fn is_clean(&self) -> bool {
        self.redundancies.is_empty()
    }
}

/// Runs the detection pipeline against one backend
pub struct Scanner<'a> {
    backend: &'a dyn PackageBackend,
    jobs: usize,
}

impl<'a> Scanner<'a> {
    /// Scanner that queries one package at a time
    pub fn new(backend: &'a dyn PackageBackend) -> Self {
        Self { backend, jobs: 1 }
    }

    /// Query up to `jobs` dependency closures at once
    ///
    /// Output order is unaffected; results are gathered in manual-list order
    /// before any are reported.
    pub fn with_jobs(mut self, jobs: usize) -> Result<Self> {
        if jobs == 0 {
            return Err(Error::ConfigError("jobs must be at least 1".to_string()));
        }
        self.jobs = jobs;
        Ok(self)
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// Scan the system and collect every redundancy
    pub fn scan(&self) -> Result<ScanReport> {
        if self.jobs == 1 {
            return self.scan_to(std::io::sink());
        }

        let (listed, manual) = self.collect_manual();
        let redundancies: Vec<Redundancy> = self
            .scan_parallel(&listed, &manual)?
            .into_iter()
            .flatten()
            .collect();
        info!("Found {} redundant manual marks", redundancies.len());

        Ok(ScanReport {
            packages_scanned: listed.len(),
            redundancies,
        })
    }

    /// Scan and write the report lines to `out`
    ///
    /// A sequential scanner writes each package's lines as soon as its
    /// closure is known; a parallel one writes everything at the end.
    pub fn scan_to<W: Write>(&self, mut out: W) -> Result<ScanReport> {
        if self.jobs > 1 {
            let report = self.scan()?;
            report.write_to(&mut out)?;
            return Ok(report);
        }

        let (listed, manual) = self.collect_manual();
        let mut redundancies = Vec::new();
        for pkg in &listed {
            let hits = self.scan_package(pkg, &manual);
            for hit in &hits {
                writeln!(out, "{}", hit)?;
            }
            out.flush()?;
            redundancies.extend(hits);
        }
        info!("Found {} redundant manual marks", redundancies.len());

        Ok(ScanReport {
            packages_scanned: listed.len(),
            redundancies,
        })
    }

    /// The manual list as reported (duplicates kept) and its set view
    fn collect_manual(&self) -> (Vec<String>, ManualSet) {
        let listed = self.backend.list_manual();
        let manual = ManualSet::new(listed.iter().cloned());
        info!(
            "Scanning {} manual packages with {} backend",
            manual.len(),
            self.backend.name()
        );
        (listed, manual)
    }

    fn scan_parallel(
        &self,
        listed: &[String],
        manual: &ManualSet,
    ) -> Result<Vec<Vec<Redundancy>>> {
        debug!("Querying dependency closures with {} workers", self.jobs);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| Error::ConfigError(format!("failed to start worker pool: {}", e)))?;

        // Indexed collect keeps manual-list order
        Ok(pool.install(|| {
            listed
                .par_iter()
                .map(|pkg| self.scan_package(pkg, manual))
                .collect()
        }))
    }

    fn scan_package(&self, package: &str, manual: &ManualSet) -> Vec<Redundancy> {
        let closure = self.backend.closure(package);
        let hits = find_redundancies(package, &closure, manual);
        if !hits.is_empty() {
            debug!("{} pulls in {} manual packages", package, hits.len());
        }
        hits
    }
}
