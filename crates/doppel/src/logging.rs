//! Logging initialization for the doppel CLI.
//!
//! Structured logging via `tracing`, driven by the `[logging]` section of the
//! doppel config file with CLI-flag overrides.

use doppel_core::config::LoggingConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logging subsystem.
///
/// The level comes from `logging.level` in the config file; `--verbose`
/// forces `debug` and the `RUST_LOG` environment variable, when set,
/// overrides both. `--json-logs` (or `logging.format = "json"`) switches to
/// structured JSON output. Logs go to stderr; stdout carries verdicts and
/// reports.
pub fn init(config: &LoggingConfig, verbose: bool, json_logs: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(effective_level(&config.level, verbose)));

    let registry = tracing_subscriber::registry().with(filter);
    if json_logs || config.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(true),
            )
            .init();
    }
}

/// Resolve the default filter directive from config level and verbose flag.
///
/// `--verbose` never lowers the configured level: a config already at `trace`
/// stays at `trace`.
fn effective_level(config_level: &str, verbose: bool) -> &str {
    if verbose && config_level != "trace" {
        "debug"
    } else {
        config_level
    }
}
