//! nuget-package-deleter - delete packages from a NuGet feed
//!
//! Reads package ids from a file and issues one `nuget delete` per id
//! against the host of the given feed URL.

use clap::Parser;
use nuget_feed_tools::cli::DeleterArgs;
use nuget_feed_tools::console::Console;
use nuget_feed_tools::logging;
use nuget_feed_tools::package_manager::SystemDeleteRunner;
use nuget_feed_tools::workflow::{run_deleter, DeleterSettings};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = DeleterArgs::parse();
    logging::init(args.common.verbose);

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: DeleterArgs) -> anyhow::Result<ExitCode> {
    tracing::debug!(program = %args.delete_program, "starting deleter");

    let runner = SystemDeleteRunner::new();
    let settings = DeleterSettings {
        delete_program: args.delete_program,
        show_progress: io::stdout().is_terminal(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console =
        Console::new(stdin.lock(), stdout.lock()).with_color(!args.common.no_color);

    let outcome = run_deleter(&mut console, &runner, &settings)?;
    tracing::debug!(?outcome, "deleter finished");

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
