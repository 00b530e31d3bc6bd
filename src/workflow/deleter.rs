//! Package deletion workflow
//!
//! banner → batch file → feed URL → API key → read batch → delete each id

use super::lister::prompt_feed_url;
use super::{report_fatal, wait_for_exit, RunOutcome};
use crate::console::{validate, Console, MessageKey};
use crate::domain::{DeleterConfig, DeletionBatch};
use crate::error::AppError;
use crate::package_manager::{run_deletions, DeleteRunner, DEFAULT_DELETE_PROGRAM};
use crate::progress::Progress;
use std::io::{BufRead, Write};

/// Settings for a deletion run that are not gathered interactively
#[derive(Debug, Clone)]
pub struct DeleterSettings {
    /// Program used to issue deletes
    pub delete_program: String,
    /// Whether to draw a progress bar while deleting
    pub show_progress: bool,
}

impl Default for DeleterSettings {
    fn default() -> Self {
        Self {
            delete_program: DEFAULT_DELETE_PROGRAM.to_string(),
            show_progress: false,
        }
    }
}

/// Run the interactive package deletion workflow
pub fn run_deleter<R, W, D>(
    console: &mut Console<R, W>,
    runner: &D,
    settings: &DeleterSettings,
) -> Result<RunOutcome, AppError>
where
    R: BufRead,
    W: Write,
    D: DeleteRunner + ?Sized,
{
    let welcome = console.message(MessageKey::DeleterWelcome, &[]);
    let description = console.message(MessageKey::DeleterBlurb, &[&settings.delete_program]);
    let source_notes = console.message(MessageKey::DeleterSourceBlurb, &[]);
    console.print_banner(&welcome, &description, &source_notes)?;

    let prompt = console.message(MessageKey::EnterBatchFilePrompt, &[]);
    let not_found = console.messages().get(MessageKey::BatchFileNotFound).to_string();
    let batch_file = console.prompt_required(&prompt, validate::is_existing_file, &not_found)?;

    let feed_url = prompt_feed_url(console)?;

    let prompt = console.message(MessageKey::EnterApiKeyPrompt, &[]);
    let required = console.message(MessageKey::ValueRequired, &[]);
    let api_key = console.prompt_required(&prompt, validate::is_present, &required)?;

    let config = DeleterConfig::new(batch_file, feed_url, api_key, &settings.delete_program);

    let batch = match DeletionBatch::read(&config.batch_file) {
        Ok(batch) => batch,
        Err(e) => {
            report_fatal(console, &e.into())?;
            return Ok(RunOutcome::Halted);
        }
    };

    let batch_file = config.batch_file.display().to_string();
    let read = console.message(
        MessageKey::BatchSummary,
        &[&batch.len().to_string(), &batch_file],
    );
    console.print_text(&read)?;

    let feed_host = config.feed_host();
    let deleting_template = console.messages().get(MessageKey::DeletingPackage).to_string();
    let mut progress = Progress::bar(
        settings.show_progress,
        batch.len() as u64,
        "Deleting packages",
    );

    let report = run_deletions(
        runner,
        &batch,
        &config.delete_program,
        &feed_host,
        &config.api_key,
        |index, package_id| {
            if index > 0 {
                progress.inc();
            }
            progress.set_message(&crate::console::render_template(
                &deleting_template,
                &[package_id, &feed_host],
            ));
        },
    );
    if !batch.is_empty() {
        progress.inc();
    }
    progress.finish_and_clear();

    let summary = console.message(
        MessageKey::DeletionSummary,
        &[&report.issued.to_string(), &feed_host],
    );
    console.print_text_surrounded_by_rules(&summary)?;

    wait_for_exit(console)?;
    Ok(RunOutcome::Completed)
}
