//! Logging bootstrap for the `zonefile-node` binary.
//!
//! Libraries only emit `tracing` events; installing a subscriber is the
//! binary's job.

use anyhow::Context;
use tracing_subscriber::{fmt, EnvFilter};

use crate::container::LoggingConfig;

/// Build the filter: `RUST_LOG` if set, else the configured directive.
pub fn build_filter(config: &LoggingConfig) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.filter)
            .with_context(|| format!("Invalid log filter '{}'", config.filter)),
    }
}

/// Install the global subscriber. Call once, at startup.
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let subscriber = fmt()
        .with_env_filter(build_filter(config)?)
        .with_target(true)
        .with_thread_ids(config.thread_ids)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Installing the global tracing subscriber")?;
    Ok(())
}
