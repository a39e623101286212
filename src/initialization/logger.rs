//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::Write;

use colored::*;
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON formats for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=scrape_service=debug,reqwest=info scrape_service
///
/// # Machine-readable output
/// scrape_service --log-level debug --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    for (module, cap) in NOISY_MODULES {
        builder.filter_module(module, *cap);
    }
    builder.filter_module(CRATE_TARGET, level);

    match format {
        LogFormat::Json => builder.format(format_json),
        LogFormat::Plain => builder.format(format_plain),
    };

    // try_init() so a second initialization (tests) is an error, not a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

const CRATE_TARGET: &str = "scrape_service";

/// Dependencies that log per parsed node or per connection.
const NOISY_MODULES: &[(&str, LevelFilter)] = &[
    ("html5ever", LevelFilter::Error),
    ("selectors", LevelFilter::Warn),
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
];

/// `scrape_service::scrape::hackernews` -> `scrape::hackernews`
fn short_target(target: &str) -> &str {
    target
        .strip_prefix(CRATE_TARGET)
        .map(|rest| rest.trim_start_matches("::"))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(target)
}

fn format_json(buf: &mut Formatter, record: &Record<'_>) -> std::io::Result<()> {
    let line = serde_json::json!({
        "ts": chrono::Local::now().to_rfc3339(),
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    });
    writeln!(buf, "{line}")
}

fn format_plain(buf: &mut Formatter, record: &Record<'_>) -> std::io::Result<()> {
    let level = record.level();
    let label = format!("{level:<5}");
    let label = match level {
        Level::Error => label.red().bold(),
        Level::Warn => label.yellow(),
        Level::Info => label.green(),
        Level::Debug => label.blue(),
        Level::Trace => label.dimmed(),
    };

    writeln!(
        buf,
        "{} {} {} {}",
        chrono::Local::now().format("%H:%M:%S%.3f").to_string().dimmed(),
        label,
        short_target(record.target()).cyan(),
        record.args()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_twice_does_not_panic() {
        let first = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        // At most one installation can win within a test process
        assert!(first.is_err() || second.is_err());
        if let Err(e) = second {
            assert!(e.to_string().starts_with("Logger initialization error"));
        }
    }

    #[test]
    fn test_short_target() {
        assert_eq!(short_target("scrape_service::scrape::hackernews"), "scrape::hackernews");
        assert_eq!(short_target("scrape_service"), "scrape_service");
        assert_eq!(short_target("reqwest::connect"), "reqwest::connect");
    }
}
