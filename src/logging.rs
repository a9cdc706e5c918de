//! Diagnostic logging setup
//!
//! Events go to stderr through a `tracing-subscriber` fmt layer. `RUST_LOG`
//! wins over the default level.

use tracing_subscriber::EnvFilter;

use crate::error::{ReleaseNotionError, Result};

/// Default filter when `RUST_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "release_notion=debug"
    } else {
        "release_notion=warn"
    }
}

/// Install the global subscriber
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbose)))
        .map_err(|e| ReleaseNotionError::config(format!("invalid log filter: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| ReleaseNotionError::config(format!("failed to initialize logging: {}", e)))
}
