//! Diagnostic logging setup
//!
//! Logs go to stderr so they never interleave with the console dialogue on
//! stdout. `RUST_LOG` takes precedence over `--verbose`.

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when `RUST_LOG` is not set
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "nuget_feed_tools=debug"
    } else {
        "nuget_feed_tools=warn"
    }
}

/// Install the global subscriber; a second call is a no-op
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed && verbose {
        tracing::debug!("verbose logging enabled");
    }
}
