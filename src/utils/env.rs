//! Environment variable handling
//!
//! Loads an optional `.env` file and reads the log filter.

use std::env;

/// Environment variable holding the `tracing` filter directive
pub const LOG_ENV_VAR: &str = "RISKMATRIX_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Load environment variables from a `.env` file.
///
/// A missing file is not an error; configuration is optional.
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Log filter from `RISKMATRIX_LOG`, falling back to `info`
pub fn log_filter() -> String {
    log_filter_from(env::var(LOG_ENV_VAR).ok())
}

fn log_filter_from(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}
