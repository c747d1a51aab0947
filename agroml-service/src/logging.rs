//! Tracing bootstrap for binaries and integration harnesses.

use agroml_core::config::defaults::DEFAULT_LOG_LEVEL;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. Filter comes from `RUST_LOG`, defaulting
/// to `info`. Calling twice is harmless; the second call is ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
