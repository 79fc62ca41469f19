// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use manual_dupes::{CommandRunner, Error, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A `CommandRunner` that answers from a script instead of spawning processes.
///
/// Commands are keyed by program and arguments joined with single spaces.
/// Unscripted commands fail, like a missing or erroring tool would.
#[derive(Clone, Default)]
pub struct ScriptedRunner {
    responses: Arc<HashMap<String, Option<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command` with `stdout`
    pub fn respond(mut self, command: &str, stdout: &str) -> Self {
        Arc::make_mut(&mut self.responses).insert(command.to_string(), Some(stdout.to_string()));
        self
    }

    /// Make `command` exit non-zero
    pub fn fail(mut self, command: &str) -> Self {
        Arc::make_mut(&mut self.responses).insert(command.to_string(), None);
        self
    }

    /// Every command run so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let mut key = program.to_string();
        for arg in args {
            key.push(' ');
            key.push_str(arg);
        }
        self.calls.lock().unwrap().push(key.clone());

        match self.responses.get(&key) {
            Some(Some(stdout)) => Ok(stdout.clone()),
            _ => Err(Error::QueryFailed {
                program: program.to_string(),
                message: "exit code 1: scripted failure".to_string(),
            }),
        }
    }
}

pub const APT_DEPENDS: &str = "apt-cache depends --recurse --no-recommends --no-suggests \
--no-conflicts --no-breaks --no-replaces --no-enhances";

/// `apt-cache depends` command line for `pkg`
pub fn apt_depends(pkg: &str) -> String {
    format!("{} {}", APT_DEPENDS, pkg)
}

/// `xbps-query --fulldeptree` command line for `pkg`
pub fn xbps_deptree(pkg: &str) -> String {
    format!("xbps-query -x --fulldeptree {}", pkg)
}

/// Render a scan as the text the executables print
pub fn render(report: &manual_dupes::ScanReport) -> String {
    let mut out = Vec::new();
    report.write_to(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}
