//! Diagnostic logging to stderr.
//!
//! Priority: RUST_LOG env var > `--debug` flag > default "warn".
//! User-facing output does not go through here; see `ui::formatter`.

use tracing_subscriber::EnvFilter;

/// Level used when neither RUST_LOG nor `--debug` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Builds the filter for the given flag, honouring RUST_LOG first.
pub fn filter(debug_flag: bool) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    }
}

/// Initialise the logging subsystem. Call once, from `main`.
pub fn init(debug_flag: bool) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter(debug_flag))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();

    if result.is_ok() {
        tracing::debug!(version = env!("CARGO_PKG_VERSION"), "logging initialised");
    }
}
