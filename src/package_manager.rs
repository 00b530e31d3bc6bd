//! Package manager integration for deleting packages from a feed
//!
//! This module provides:
//! - The `nuget delete` command line for one package id
//! - A runner trait with a system implementation that spawns the command
//! - The sequential deletion driver over a [`DeletionBatch`]

use crate::domain::DeletionBatch;
use std::process::Command;

/// Default program used to issue deletes
pub const DEFAULT_DELETE_PROGRAM: &str = "nuget";

/// A single delete invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    /// Program to run (e.g., "nuget")
    pub program: String,
    /// Package id to delete
    pub package_id: String,
    /// Feed host the delete is sent to
    pub source: String,
    /// API key authorizing the delete
    api_key: String,
}

impl DeleteCommand {
    /// Create a new delete command
    pub fn new(
        program: impl Into<String>,
        package_id: impl Into<String>,
        source: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            package_id: package_id.into(),
            source: source.into(),
            api_key: api_key.into(),
        }
    }

    /// Arguments passed to the program
    pub fn args(&self) -> Vec<String> {
        vec![
            "delete".to_string(),
            self.package_id.clone(),
            "-Source".to_string(),
            self.source.clone(),
            "-ApiKey".to_string(),
            self.api_key.clone(),
            "-NonInteractive".to_string(),
        ]
    }

    /// Command line with the API key masked, for logging
    pub fn redacted(&self) -> String {
        format!(
            "{} delete {} -Source {} -ApiKey *** -NonInteractive",
            self.program, self.package_id, self.source
        )
    }
}

/// How a delete invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The process ran to completion with this exit code (`None` if killed)
    Completed { code: Option<i32> },
    /// The process could not be started
    LaunchFailed { message: String },
}

/// Trait for running delete commands
pub trait DeleteRunner {
    /// Run one delete command and wait for it to finish
    fn run_delete(&self, command: &DeleteCommand) -> DeleteOutcome;
}

/// Default runner that executes real commands
#[derive(Debug, Default)]
pub struct SystemDeleteRunner;

impl SystemDeleteRunner {
    /// Create a new system delete runner
    pub fn new() -> Self {
        Self
    }
}

impl DeleteRunner for SystemDeleteRunner {
    fn run_delete(&self, command: &DeleteCommand) -> DeleteOutcome {
        match Command::new(&command.program).args(command.args()).output() {
            Ok(output) => {
                tracing::debug!(
                    command = %command.redacted(),
                    stdout = %String::from_utf8_lossy(&output.stdout).trim(),
                    stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                    "delete command output"
                );
                DeleteOutcome::Completed {
                    code: output.status.code(),
                }
            }
            Err(e) => DeleteOutcome::LaunchFailed {
                message: format!("Failed to execute command: {}", e),
            },
        }
    }
}

/// Summary of a deletion run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeletionReport {
    /// Number of delete commands issued
    pub issued: usize,
}

/// Issue one delete per package id, strictly in order
///
/// Each command finishes before the next starts. The outcome of a command
/// never stops the batch; `on_start` is called with the zero-based index and
/// package id before each command.
pub fn run_deletions<R, F>(
    runner: &R,
    batch: &DeletionBatch,
    program: &str,
    feed_host: &str,
    api_key: &str,
    mut on_start: F,
) -> DeletionReport
where
    R: DeleteRunner + ?Sized,
    F: FnMut(usize, &str),
{
    let mut report = DeletionReport::default();

    for (index, package_id) in batch.package_ids().iter().enumerate() {
        on_start(index, package_id);
        let command = DeleteCommand::new(program, package_id, feed_host, api_key);

        match runner.run_delete(&command) {
            DeleteOutcome::Completed { code } => {
                tracing::debug!(command = %command.redacted(), ?code, "delete command finished");
            }
            DeleteOutcome::LaunchFailed { message } => {
                tracing::warn!(command = %command.redacted(), %message, "delete command not started");
            }
        }
        report.issued += 1;
    }

    report
}
