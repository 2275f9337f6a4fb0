//! Logging init: tracing to stderr, since stdout carries the built URLs.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// The default filter keeps the crates at `info` and everything else at
/// `warn`; override with `RUST_LOG`.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,urlsmith_core=info,urlsmith_cli=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
