//! Structured logging for the `furrow` binary.
//!
//! Logs are written to stderr so stdout carries only the requested dump.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the logging subsystem based on configuration.
///
/// Log level precedence (highest to lowest):
///
/// 1. CLI `--log-level`
/// 2. `FURROW_LOG_LEVEL`
/// 3. Default configuration value (`warn`)
///
/// If a global subscriber is already set the call has no effect; the first
/// subscriber wins.
pub fn init_logging(config: &CliConfig) {
    let filter = filter_from_config(config);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
