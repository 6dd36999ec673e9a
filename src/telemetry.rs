//! Tracing Setup
//!
//! The cache only emits `tracing` events; hosts decide where they go. This
//! helper installs the same subscriber stack the server binaries use.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a global fmt subscriber filtered by `RUST_LOG`.
///
/// Falls back to `default_filter` (e.g. `"mini_memcache=debug"`) when `RUST_LOG`
/// is unset or unparsable. Returns an error instead of panicking if a global
/// subscriber is already installed.
pub fn init_tracing(default_filter: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
