//! services/clinic/src/telemetry.rs
//!
//! Structured-logging setup for the host application.

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber. `RUST_LOG` takes precedence over
/// the configured level when set. Call once at startup; calling again is an
/// error from the subscriber registry, so embedders should guard for it.
pub fn init(level: Level) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
