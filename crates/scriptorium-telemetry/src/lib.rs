//! Logging for Scriptorium
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a
//! `fmt` layer in the configured format

use scriptorium_config::{LogFormat, TelemetryConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global subscriber
///
/// The filter comes from `override_filter` if given, then `RUST_LOG`, then
/// the configured directive. Logs go to stderr so command output on stdout
/// stays machine-readable.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: &TelemetryConfig, override_filter: Option<&str>) -> anyhow::Result<()> {
    let filter = build_filter(config, override_filter);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Pretty => registry.with(fmt_layer).try_init(),
        LogFormat::Json => registry.with(fmt_layer.json()).try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

fn build_filter(config: &TelemetryConfig, override_filter: Option<&str>) -> EnvFilter {
    let directive = override_filter
        .map(str::to_owned)
        .or_else(|| std::env::var(EnvFilter::DEFAULT_ENV).ok())
        .unwrap_or_else(|| config.log_filter.clone());

    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"))
}
