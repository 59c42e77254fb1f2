//! Tracing subscriber setup.

use pokedex_core::config::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// The filter comes from `RUST_LOG` when set, else from `--log-level`,
/// else from the `logging.level` config value. Both formats write to
/// stderr so build output never mixes with piped stdout.
pub fn init_tracing(cli_level: Option<&str>, config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback_directive(cli_level, config)));

    match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(log_writer)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(log_writer)
            .init(),
    }
}

/// Shared sink for every log format.
fn log_writer() -> std::io::Stderr {
    std::io::stderr()
}

/// Filter directive used when `RUST_LOG` is unset.
fn fallback_directive<'a>(cli_level: Option<&'a str>, config: &'a LoggingConfig) -> &'a str {
    cli_level.unwrap_or(&config.level)
}
