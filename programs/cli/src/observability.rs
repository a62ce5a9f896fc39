//! Logging setup for the `cookie-jar` tool.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::TracingConfig;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` overrides the configured level when set.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_subscriber(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level().as_str().to_lowercase()));

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .pretty()
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("Failed to set global default subscriber")
}
