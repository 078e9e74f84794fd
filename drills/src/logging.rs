//! Development-time tracing for debugging the drills.
//!
//! Diagnostics go to stderr, gated by `RUST_LOG`. A drill's answer is its
//! stdout; nothing here may end up there.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads the `RUST_LOG` env var. Defaults to `warn` if unset. Output:
/// stderr, compact format.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
