//! Logging setup for the `figsearch` binary.
//!
//! Log lines go to stderr so that stdout carries only command results.
//! The level comes from the `-v` count unless `FIGSEARCH_LOG` holds a
//! filter directive (e.g. `FIGSEARCH_LOG=figsearch_region=trace`).

use std::io;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity flags
pub const LOG_ENV: &str = "FIGSEARCH_LOG";

/// Map a `-v` count to a filter level
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// Calling this more than once keeps the first subscriber.
pub fn init_logging(verbosity: u8) {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init();
}
