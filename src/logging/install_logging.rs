use crate::prelude::*;
use tracing_subscriber::EnvFilter;

/// Installs a global `tracing` subscriber printing to stdout, at `level`
/// unless overridden by `RUST_LOG`.
///
/// Safe to call multiple times, only the first call has an effect.
#[export]
pub fn install_logging(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
