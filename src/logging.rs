//! Diagnostic logging setup.
//!
//! Logs go to stderr; stdout is reserved for report output.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub const DEFAULT_LEVEL: &str = "warn";

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `level` when set. Calling this again after a
/// subscriber is installed has no effect.
pub fn init_logging(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .try_init()
    };

    if installed.is_ok() {
        tracing::debug!(level, json, "logging initialized");
    }
}
