//! Package listing workflow
//!
//! banner → feed URL → probe → package id filter → query → list → export

use super::{halt_with_restart, report_fatal, wait_for_exit, RunOutcome};
use crate::console::{validate, Console, MessageKey, Padding, LIST_ITEM_DECORATOR};
use crate::domain::{ListerConfig, QueryFilter};
use crate::error::{AppError, InputError};
use crate::feed::{self, FeedClient, ProbeOutcome};
use crate::output::{export, file_base_name, format_entries};
use crate::progress::Progress;
use chrono::Utc;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use url::Url;

/// Settings for a listing run that are not gathered interactively
#[derive(Debug, Clone)]
pub struct ListerSettings {
    /// Directory the text and CSV files are written to
    pub output_dir: PathBuf,
    /// Whether to draw a spinner while querying
    pub show_progress: bool,
}

impl Default for ListerSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            show_progress: false,
        }
    }
}

/// Run the interactive package listing workflow
pub async fn run_lister<R, W, C>(
    console: &mut Console<R, W>,
    client: &C,
    settings: &ListerSettings,
) -> Result<RunOutcome, AppError>
where
    R: BufRead,
    W: Write,
    C: FeedClient + ?Sized,
{
    print_banner(console)?;

    let feed_url = prompt_feed_url(console)?;
    let contacting = console.message(MessageKey::AttemptingToContactServer, &[feed_url.as_str()]);
    console.print_text(&contacting)?;

    match client.probe(&feed_url).await {
        ProbeOutcome::Reachable => {}
        ProbeOutcome::Unreachable => {
            let message = console.message(MessageKey::FeedUnreachable, &[feed_url.as_str()]);
            halt_with_restart(console, &message)?;
            return Ok(RunOutcome::Halted);
        }
        ProbeOutcome::ProbeError { kind, message } => {
            let details = console.message(MessageKey::ErrorDetails, &[&kind, &message, "none"]);
            halt_with_restart(console, &details)?;
            return Ok(RunOutcome::Halted);
        }
    }
    console.print_message(MessageKey::SuccessfullyContactedServer, &[])?;

    let prompt = console.message(MessageKey::EnterPackageIdPrompt, &[]);
    let invalid = console.messages().get(MessageKey::InvalidPackageId).to_string();
    let package_id = console.prompt_until_valid(&prompt, validate::is_package_id_filter, &invalid)?;

    let config = ListerConfig::new(
        feed_url,
        QueryFilter::new(&package_id),
        settings.output_dir.clone(),
    );
    print_filter_message(console, &config.filter)?;

    let mut progress = Progress::spinner(
        settings.show_progress,
        &format!("Querying {}", config.feed_url),
    );
    let queried = feed::query(client, &config.feed_url, &config.filter).await;
    progress.finish_and_clear();

    let packages = match queried {
        Ok(packages) => packages,
        Err(e) => {
            report_fatal(console, &e.into())?;
            return Ok(RunOutcome::Halted);
        }
    };

    if packages.is_empty() {
        let notice = console.message(MessageKey::NoPackagesFound, &[config.feed_url.as_str()]);
        console.print_notice_then_halt(&notice)?;
        return Ok(RunOutcome::NoResults);
    }

    console.print_list(&format_entries(&packages))?;
    let found = console.message(
        MessageKey::NumberOfPackagesFound,
        &[&packages.len().to_string()],
    );
    console.print_text_surrounded_by_rules(&found)?;

    let base_name = file_base_name(config.filter.package_id(), Utc::now());
    let paths = match export(&packages, &config.output_dir, &base_name) {
        Ok(paths) => paths,
        Err(e) => {
            report_fatal(console, &e.into())?;
            return Ok(RunOutcome::Halted);
        }
    };

    let summary = console.message(
        MessageKey::OutputSummary,
        &[
            &paths.text.display().to_string(),
            &paths.csv.display().to_string(),
        ],
    );
    console.print_text_followed_by_rule(&summary)?;

    wait_for_exit(console)?;
    Ok(RunOutcome::Completed)
}

fn print_banner<R: BufRead, W: Write>(console: &mut Console<R, W>) -> std::io::Result<()> {
    let options: Vec<String> = QueryFilter::unfiltered()
        .option_labels()
        .iter()
        .map(|label| format!("{}{}", LIST_ITEM_DECORATOR, label))
        .collect();
    let description = format!(
        "{}\n{}",
        console.message(MessageKey::ListerBlurb, &[]),
        options.join("\n")
    );
    let welcome = console.message(MessageKey::ListerWelcome, &[]);
    let source_notes = console.message(MessageKey::FeedUrlFormatBlurb, &[]);
    console.print_banner(&welcome, &description, &source_notes)
}

/// Prompt until an absolute http(s) feed URL is entered
pub(crate) fn prompt_feed_url<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Url, InputError> {
    let prompt = console.message(MessageKey::EnterFeedUrlPrompt, &[]);
    let invalid = console.messages().get(MessageKey::InvalidFeedUrl).to_string();
    let raw = console.prompt_required(&prompt, validate::is_absolute_url, &invalid)?;
    validate::parse_feed_url(&raw)
        .ok_or_else(|| InputError::invalid_value(raw, "not an absolute http or https URL"))
}

fn print_filter_message<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    filter: &QueryFilter,
) -> std::io::Result<()> {
    match filter.package_id() {
        Some(id) => {
            console.print_empty_line()?;
            console.print_message(MessageKey::PackageIdSpecified, &[id])?;
        }
        None => console.print_message(MessageKey::NoPackageIdEntered, &[])?,
    }
    console.print_padded(crate::console::HORIZONTAL_RULE, Padding::BlankLine)?;
    console.print_message(MessageKey::AttemptingToFindPackages, &[])
}
