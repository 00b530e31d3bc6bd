//! Run configurations gathered during the interactive input phase
//!
//! Each value is built once from validated input and then passed by
//! reference to the query engine or deletion driver.

use super::QueryFilter;
use std::path::PathBuf;
use url::Url;

/// Configuration for a package listing run
#[derive(Debug, Clone)]
pub struct ListerConfig {
    /// Absolute feed URL
    pub feed_url: Url,
    /// Package id filter
    pub filter: QueryFilter,
    /// Directory the text and CSV files are written to
    pub output_dir: PathBuf,
}

impl ListerConfig {
    /// Create a new lister configuration
    pub fn new(feed_url: Url, filter: QueryFilter, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            feed_url,
            filter,
            output_dir: output_dir.into(),
        }
    }
}

/// Configuration for a package deletion run
#[derive(Debug, Clone)]
pub struct DeleterConfig {
    /// File holding the comma-separated package ids
    pub batch_file: PathBuf,
    /// Absolute feed URL as entered
    pub feed_url: Url,
    /// API key passed to the delete command
    pub api_key: String,
    /// Program used to issue deletes (e.g., "nuget")
    pub delete_program: String,
}

impl DeleterConfig {
    /// Create a new deleter configuration
    pub fn new(
        batch_file: impl Into<PathBuf>,
        feed_url: Url,
        api_key: impl Into<String>,
        delete_program: impl Into<String>,
    ) -> Self {
        Self {
            batch_file: batch_file.into(),
            feed_url,
            api_key: api_key.into(),
            delete_program: delete_program.into(),
        }
    }

    /// The delete target: scheme and host of the feed URL, path discarded
    ///
    /// A non-default port is kept as part of the host.
    pub fn feed_host(&self) -> String {
        self.feed_url.origin().ascii_serialization()
    }
}
