//! Structured logging with tracing
//!
//! `RUST_LOG` takes precedence over the configured level so a single
//! deployment can be turned up to `debug` without touching config files.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Install the global tracing subscriber.
///
/// Calling this twice (e.g. from tests) is not an error.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    let registry = tracing_subscriber::registry().with(filter);

    let init_result = match config.format.as_str() {
        "json" => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true),
            )
            .try_init(),
        "compact" => registry
            .with(fmt::layer().compact().with_target(false))
            .try_init(),
        _ => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .try_init(),
    };

    if let Err(e) = init_result {
        if e.to_string().contains("already been set") {
            return Ok(());
        }
        return Err(Box::new(e));
    }

    tracing::debug!(level = %config.level, format = %config.format, "Tracing initialized");
    Ok(())
}
