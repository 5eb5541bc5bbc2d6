//! Subscriber setup for the `tracing` events emitted by the plugin.

use pvars_foundation::{Error, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a global `fmt` subscriber writing to stderr.
///
/// `filter` is an `EnvFilter` directive such as `pvars=debug`; an
/// unparsable directive falls back to `info`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(filter: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init()
        .map_err(|e| Error::internal(format!("failed to install log subscriber: {e}")))
}
