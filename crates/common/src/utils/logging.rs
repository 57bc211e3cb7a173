use std::io;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Initialize logging in the requested format.
pub fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Compact => init_logging_default(),
        LogFormat::Json => init_logging_json(),
    }
}

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Initialize tracing subscriber with compact human-readable output.
/// - Respects `RUST_LOG` if set, defaults to `info`
/// - Writes to stderr so stdout stays clean for command output
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(env_filter("info"))
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}

/// Initialize tracing subscriber with JSON structured output.
/// - Respects `RUST_LOG` if set, defaults to `info,utils::time=debug`
/// - Writes to stderr, one JSON object per line
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(env_filter("info,utils::time=debug"))
        .with_target(false)
        .json()
        .with_writer(io::stderr)
        .try_init();
}
