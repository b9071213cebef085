//! Tracing subscriber setup.

use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with an fmt layer on stderr.
///
/// Stdout is reserved for rendered output, so logs always go to stderr.
///
/// # Initialization Behavior
///
/// - An invalid `RUST_LOG` falls back to the configured level
/// - Idempotent: safe to call multiple times (only the first call takes effect)
/// - Never fails; logging is optional
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    if subscriber.try_init().is_ok() {
        tracing::debug!(level, "tracing initialized");
    }
}
