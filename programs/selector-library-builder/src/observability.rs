//! Logging setup for the builder.
//!
//! Stdout logging only; the builder is a short-lived, human supervised tool.

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Initialize the global tracing subscriber at `level`.
///
/// `RUST_LOG` overrides `level` when it is set and valid.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_observability(level: Level) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .pretty()
                .with_target(true)
                .with_line_number(true)
                .with_file(true),
        )
        .try_init()
        .context("Failed to set global default subscriber")
}
