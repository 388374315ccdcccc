//! Tracing/logging initialization.
//!
//! Library crates only emit `tracing` events; binaries call [`init`] once
//! at startup to install a subscriber.

use tracing_subscriber::EnvFilter;

/// Environment variable selecting the log format (`json` or plain text).
pub const ENV_LOG_FORMAT: &str = "CASHFLOW_LOG_FORMAT";

/// Initialize tracing/logging for the process.
///
/// Filtering follows `RUST_LOG` (default `info`). Logs go to stderr so
/// stdout stays free for command output. Safe to call multiple times
/// (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var(ENV_LOG_FORMAT).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
