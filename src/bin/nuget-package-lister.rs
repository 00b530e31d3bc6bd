//! nuget-package-lister - list the packages in a NuGet feed
//!
//! Prompts for a feed URL and an optional package id, shows the matching
//! packages and saves them as text and CSV files.

use clap::Parser;
use nuget_feed_tools::cli::ListerArgs;
use nuget_feed_tools::console::Console;
use nuget_feed_tools::feed::{HttpClient, ODataFeedClient, DEFAULT_USER_AGENT};
use nuget_feed_tools::logging;
use nuget_feed_tools::workflow::{run_lister, ListerSettings};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = ListerArgs::parse();
    logging::init(args.common.verbose);

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: ListerArgs) -> anyhow::Result<ExitCode> {
    tracing::debug!(output_dir = %args.output_dir.display(), timeout = ?args.timeout, "starting lister");

    let http = HttpClient::with_config(args.timeout, DEFAULT_USER_AGENT)?;
    let client = ODataFeedClient::new(http);

    let settings = ListerSettings {
        output_dir: args.output_dir,
        show_progress: io::stdout().is_terminal(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console =
        Console::new(stdin.lock(), stdout.lock()).with_color(!args.common.no_color);

    let outcome = run_lister(&mut console, &client, &settings).await?;
    tracing::debug!(?outcome, "lister finished");

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
