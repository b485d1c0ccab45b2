//! Logging initialization with environment-based formatters
//!
//! Production gets structured JSON for log aggregation; anything else gets
//! colorful human-readable output.

use crate::config::get_environment;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG`; defaults to `info` when unset.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match get_environment().as_str() {
        "production" | "prod" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .json()
                .with_target(true)
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(true)
                .with_ansi(true)
                .init();
        }
    }
}
