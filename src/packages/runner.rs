// src/packages/runner.rs

//! Running package manager query tools
//!
//! Every query is a blocking subprocess whose standard output is read back as
//! text. A query that cannot be spawned, exits non-zero, or times out yields
//! no lines at all: callers treat it as "nothing known about this package"
//! rather than as a failure of the whole run.

use crate::error::{Error, Result};
use std::io::Read;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::debug;
use wait_timeout::ChildExt;

/// Something that can execute an external query and hand back its stdout
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, returning standard output as text
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;
}

/// Runs queries as real subprocesses
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    timeout: Option<Duration>,
}

impl SystemRunner {
    /// Create a runner that waits for each query to finish
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill queries that run longer than `timeout`
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        debug!("Executing: {} {:?}", program, args);

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::QueryFailed {
                program: program.to_string(),
                message: format!("failed to spawn: {}", e),
            })?;

        let Some(timeout) = self.timeout else {
            let output = child.wait_with_output()?;
            return check_output(program, output.status, &output.stdout, &output.stderr);
        };

        // Drain both pipes while waiting so a chatty query cannot fill one
        // and stall.
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        match child.wait_timeout(timeout)? {
            Some(status) => {
                let stdout = stdout.join().unwrap_or_default();
                let stderr = stderr.join().unwrap_or_default();
                check_output(program, status, &stdout, &stderr)
            }
            None => {
                let _ = child.kill();
                let _ = child.wait();
                Err(Error::QueryTimeout {
                    program: program.to_string(),
                    seconds: timeout.as_secs(),
                })
            }
        }
    }
}

/// Read a child pipe to the end on a background thread
fn drain<P: Read + Send + 'static>(pipe: Option<P>) -> JoinHandle<Vec<u8>> {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    })
}

fn check_output(
    program: &str,
    status: ExitStatus,
    stdout: &[u8],
    stderr: &[u8],
) -> Result<String> {
    if status.success() {
        Ok(String::from_utf8_lossy(stdout).into_owned())
    } else {
        let code = status.code().unwrap_or(-1);
        Err(Error::QueryFailed {
            program: program.to_string(),
            message: format!(
                "exit code {}: {}",
                code,
                String::from_utf8_lossy(stderr).trim()
            ),
        })
    }
}

/// Run a query and return its non-blank output lines
///
/// Trailing whitespace is removed from each line; leading whitespace is kept
/// because some tools use indentation to mark continuation lines. Any error
/// is logged and collapsed to an empty result.
pub fn run_lines(runner: &dyn CommandRunner, program: &str, args: &[&str]) -> Vec<String> {
    match runner.run(program, args) {
        Ok(stdout) => stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.trim_end().to_string())
            .collect(),
        Err(e) => {
            debug!("Treating query as empty: {}", e);
            Vec::new()
        }
    }
}
