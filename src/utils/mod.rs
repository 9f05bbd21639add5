//! Utility functions for the risk matrix backend
//!
//! Provides environment variable handling and logging setup.

pub mod env;
pub mod logging;

pub use env::{load_env, log_filter};
pub use logging::init_logging;
