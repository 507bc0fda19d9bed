//! Logging setup.

/// Install the global `tracing` subscriber.
///
/// Logs go to stderr so `tree` output on stdout stays machine-readable.
/// `RUST_LOG` overrides `level`.
pub fn init(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level.parse().unwrap_or_default());

    // A second init (e.g. from tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
