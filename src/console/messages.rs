//! Message catalog for console output
//!
//! Every user-facing string lives here as a template keyed by [`MessageKey`].
//! Templates use positional placeholders (`{0}`, `{1}`, ...).

use std::collections::HashMap;

/// Keys for every message the tools print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    ListerWelcome,
    ListerBlurb,
    FeedUrlFormatBlurb,
    DeleterWelcome,
    DeleterBlurb,
    DeleterSourceBlurb,
    EnterFeedUrlPrompt,
    EnterPackageIdPrompt,
    EnterBatchFilePrompt,
    EnterApiKeyPrompt,
    ValueRequired,
    InvalidFeedUrl,
    InvalidPackageId,
    BatchFileNotFound,
    AttemptingToContactServer,
    SuccessfullyContactedServer,
    FeedUnreachable,
    NoPackageIdEntered,
    PackageIdSpecified,
    AttemptingToFindPackages,
    NoPackagesFound,
    NumberOfPackagesFound,
    OutputSummary,
    BatchSummary,
    DeletingPackage,
    DeletionSummary,
    ErrorDetails,
    RestartApplication,
    PressEnterToExit,
}

/// Read-only mapping from message key to template
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    templates: HashMap<MessageKey, String>,
}

impl MessageCatalog {
    /// Create a catalog holding the default English messages
    pub fn new() -> Self {
        let templates = DEFAULT_TEMPLATES
            .iter()
            .map(|(key, template)| (*key, (*template).to_string()))
            .collect();
        Self { templates }
    }

    /// Replace a single template
    pub fn with_template(mut self, key: MessageKey, template: impl Into<String>) -> Self {
        self.templates.insert(key, template.into());
        self
    }

    /// Get the raw template for a key
    pub fn get(&self, key: MessageKey) -> &str {
        self.templates.get(&key).map(String::as_str).unwrap_or("")
    }

    /// Render the template for a key with positional arguments
    pub fn render(&self, key: MessageKey, args: &[&str]) -> String {
        render_template(self.get(key), args)
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Substitute `{N}` placeholders with `args[N]` in a single pass
///
/// Placeholders without a matching argument, and any other braces, are
/// copied through unchanged. Substituted text is never re-scanned.
pub fn render_template(template: &str, args: &[&str]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let substituted = after_open.find('}').and_then(|close| {
            let index: usize = after_open[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg, close))
        });

        match substituted {
            Some((arg, close)) => {
                rendered.push_str(arg);
                rest = &after_open[close + 1..];
            }
            None => {
                rendered.push('{');
                rest = after_open;
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

const DEFAULT_TEMPLATES: &[(MessageKey, &str)] = &[
    (MessageKey::ListerWelcome, "Welcome to nuget-package-lister!"),
    (
        MessageKey::ListerBlurb,
        "This tool lists the packages available at a NuGet package feed. It was built against NuGet Server 2.8\n\
         and queries the feed's OData endpoint; other servers may not work. The query uses the following options:",
    ),
    (
        MessageKey::FeedUrlFormatBlurb,
        "The URL that you enter should be in the form of 'https://<domain>.<gTLD>/nuget/' or\n\
         'https://nuget.<domain>.<gTLD>/nuget/' without the quotes. Your feed may end differently, e.g.\n\
         '/api/packages/'. To find the URL for your package feed visit the base URL (without /nuget/);\n\
         it is listed under the Repository URLs section.",
    ),
    (MessageKey::DeleterWelcome, "Welcome to nuget-package-deleter!"),
    (
        MessageKey::DeleterBlurb,
        "This tool removes the NuGet packages named in a file from a NuGet feed. It was built against\n\
         NuGet Server 2.8; other servers may not work. Each package is removed with the `{0} delete` command.",
    ),
    (
        MessageKey::DeleterSourceBlurb,
        "The file should contain package ids separated by commas, one or more per line.\n\
         Deletes are sent to the scheme and host of the feed URL you enter; its path is ignored.",
    ),
    (
        MessageKey::EnterFeedUrlPrompt,
        "Please enter the URL of the NuGet package feed that you would like to access:",
    ),
    (
        MessageKey::EnterPackageIdPrompt,
        "If you only wish to return results for a specific package, please enter the package id now. Otherwise, press enter.",
    ),
    (
        MessageKey::EnterBatchFilePrompt,
        "Please enter the path of the file containing the package ids to delete:",
    ),
    (
        MessageKey::EnterApiKeyPrompt,
        "Please enter the API key for the NuGet package feed:",
    ),
    (MessageKey::ValueRequired, "A value is required. Please try again."),
    (
        MessageKey::InvalidFeedUrl,
        "The provided package feed URL\n'{0}'\nis not valid. Please enter an absolute http or https URL.",
    ),
    (
        MessageKey::InvalidPackageId,
        "'{0}' is not a valid package id. Package ids may only contain letters, digits, '.', '-' and '_'.",
    ),
    (
        MessageKey::BatchFileNotFound,
        "The file\n'{0}'\ncould not be found. Please enter the path of an existing file.",
    ),
    (
        MessageKey::AttemptingToContactServer,
        "Attempting to contact the server via '{0}'...",
    ),
    (
        MessageKey::SuccessfullyContactedServer,
        "Successfully contacted the server using the URL provided",
    ),
    (
        MessageKey::FeedUnreachable,
        "The server at the following feed URL could not be found:\n'{0}'",
    ),
    (
        MessageKey::NoPackageIdEntered,
        "No package id has been entered, all packages will be returned.",
    ),
    (
        MessageKey::PackageIdSpecified,
        "Only packages with an id that matches '{0}' will be returned.",
    ),
    (MessageKey::AttemptingToFindPackages, "Attempting to find packages..."),
    (
        MessageKey::NoPackagesFound,
        "No packages were found at the following feed URL:\n'{0}'",
    ),
    (MessageKey::NumberOfPackagesFound, "{0} package/s were found."),
    (
        MessageKey::OutputSummary,
        "A text and a csv file containing the results have been written to:\n'{0}'\n'{1}'",
    ),
    (
        MessageKey::BatchSummary,
        "{0} package id/s were read from '{1}'.",
    ),
    (MessageKey::DeletingPackage, "Deleting '{0}' from '{1}'..."),
    (
        MessageKey::DeletionSummary,
        "{0} delete command/s were issued against '{1}'.",
    ),
    (
        MessageKey::ErrorDetails,
        "A {0} error occurred\nThe message was: {1}\nCaused by: {2}",
    ),
    (
        MessageKey::RestartApplication,
        "Please restart the application and try again.",
    ),
    (MessageKey::PressEnterToExit, "Press Enter to exit."),
];
