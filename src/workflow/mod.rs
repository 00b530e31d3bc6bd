//! Interactive workflows for the two tools
//!
//! Each workflow runs: banner → prompts → feed/batch work → summary, and
//! reports fatal problems on the console instead of returning them. Only
//! console I/O failures come back as errors.

mod deleter;
mod lister;

pub use deleter::{run_deleter, DeleterSettings};
pub use lister::{run_lister, ListerSettings};

use crate::console::{Console, MessageKey};
use crate::error::AppError;
use std::error::Error;
use std::io::{BufRead, Write};

/// How a workflow ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// All work was done and the user acknowledged the summary
    Completed,
    /// The query found nothing; no files were written
    NoResults,
    /// A fatal error was shown and the run stopped
    Halted,
}

impl RunOutcome {
    /// Returns true if the process should exit successfully
    pub fn is_success(&self) -> bool {
        !matches!(self, RunOutcome::Halted)
    }
}

/// Join an error's source chain, or "none" when it has no sources
pub fn describe_causes(error: &dyn Error) -> String {
    let mut causes = Vec::new();
    let mut source = error.source();
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }

    if causes.is_empty() {
        "none".to_string()
    } else {
        causes.join(": ")
    }
}

/// Show a fatal error with its category, message and causes, then halt
pub(crate) fn report_fatal<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    error: &AppError,
) -> std::io::Result<()> {
    tracing::debug!(error = ?error, "fatal error");
    let details = console.message(
        MessageKey::ErrorDetails,
        &[error.kind(), &error.to_string(), &describe_causes(error)],
    );
    halt_with_restart(console, &details)
}

/// Show an error followed by the restart instruction, then halt
pub(crate) fn halt_with_restart<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    message: &str,
) -> std::io::Result<()> {
    let restart = console.message(MessageKey::RestartApplication, &[]);
    console.print_error_then_halt(&format!("{}\n{}", message, restart))
}

/// Wait for the final Enter after a completed run
pub(crate) fn wait_for_exit<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> std::io::Result<()> {
    console.print_empty_line()?;
    console.print_message(MessageKey::PressEnterToExit, &[])?;
    console.wait_for_acknowledgement()
}
