//! `campus-observability` — shared tracing/logging setup.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing for the client.
///
/// Filtering is driven by `RUST_LOG`, defaulting to `info`. Output is the
/// compact human-readable format; audience decode failures surface here at
/// `warn`, authorization denials at `debug`. Safe to call multiple times;
/// subsequent calls become no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .try_init();
}
