//! Logging setup
//!
//! Installs a `tracing` subscriber once per process.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber with the given filter directive.
///
/// An unparsable directive falls back to `info`. Fails if a subscriber is
/// already installed.
pub fn init_logging(filter: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))
}
