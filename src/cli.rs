//! CLI argument parsing for the lister and deleter binaries

use crate::package_manager::DEFAULT_DELETE_PROGRAM;
use clap::{Args, Parser};
use std::path::PathBuf;
use std::time::Duration;

/// Parse a timeout in seconds, optionally suffixed with `s` or `m`
fn parse_timeout(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty timeout string".to_string());
    }

    let (num_str, multiplier) = if let Some(n) = s.strip_suffix('m') {
        (n, 60)
    } else if let Some(n) = s.strip_suffix('s') {
        (n, 1)
    } else {
        (s, 1)
    };

    let num: u64 = num_str
        .parse()
        .map_err(|_| format!("invalid number in timeout: {}", num_str))?;
    if num == 0 {
        return Err("timeout must be greater than zero".to_string());
    }

    Ok(Duration::from_secs(num * multiplier))
}

/// Options shared by both tools
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(long)]
    pub verbose: bool,

    /// Disable colored console output
    #[arg(long)]
    pub no_color: bool,
}

/// Interactive NuGet feed package lister
#[derive(Parser, Debug, Clone)]
#[command(
    name = "nuget-package-lister",
    version,
    about = "List the packages in a NuGet feed and save them as text and CSV"
)]
pub struct ListerArgs {
    /// Directory the package list files are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// HTTP request timeout (e.g., 30, 30s, 2m); no timeout by default
    #[arg(long, value_parser = parse_timeout)]
    pub timeout: Option<Duration>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Interactive NuGet feed package deleter
#[derive(Parser, Debug, Clone)]
#[command(
    name = "nuget-package-deleter",
    version,
    about = "Delete the packages named in a file from a NuGet feed"
)]
pub struct DeleterArgs {
    /// Program used to issue `delete` commands
    #[arg(long = "nuget", default_value = DEFAULT_DELETE_PROGRAM)]
    pub delete_program: String,

    #[command(flatten)]
    pub common: CommonArgs,
}
