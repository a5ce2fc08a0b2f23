//! Tracing subscriber setup for the terminal front-end.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Installs the global subscriber.
///
/// - Output: stderr, so logs never interleave with the rendered transcript
/// - Format: compact text, or JSON lines when `config.json` is set
/// - Filter: `RUST_LOG` if present, otherwise `config.filter`
pub fn init(config: &LoggingConfig) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let compact_layer = (!config.json).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .compact()
    });

    let json_layer = config.json.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(false)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(compact_layer)
        .with(json_layer)
        .try_init()?;

    tracing::debug!(json = config.json, "Tracing initialized");
    Ok(())
}
