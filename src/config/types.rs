//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_USER_AGENT, GENERIC_TIMEOUT_SECS, HN_BASE_URL,
    HN_TIMEOUT_SECS, SESSION_TTL,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Parsed from the command line (each flag can also come from an `SCRAPE_*`
/// environment variable or a `.env` file), or built programmatically:
///
/// ```no_run
/// use scrape_service::Config;
///
/// let config = Config {
///     port: 8080,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "scrape_service",
    about = "Scrapes Hacker News or any page with CSS selectors and serves the results over HTTP."
)]
pub struct Config {
    /// Address the web server binds to
    #[arg(long, env = "SCRAPE_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port the web server listens on
    #[arg(long, env = "SCRAPE_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, env = "SCRAPE_LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, env = "SCRAPE_LOG_FORMAT", value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// HTTP User-Agent header value for outbound requests
    #[arg(long, env = "SCRAPE_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Hacker News site root; listing pages and item links are built from it
    #[arg(long, env = "SCRAPE_HN_BASE_URL", default_value = HN_BASE_URL)]
    pub hn_base_url: String,

    /// Per-page timeout for Hacker News fetches, in seconds
    #[arg(long, env = "SCRAPE_HN_TIMEOUT_SECS", default_value_t = HN_TIMEOUT_SECS)]
    pub hn_timeout_secs: u64,

    /// Timeout for the page fetched by a generic scrape, in seconds
    #[arg(long, env = "SCRAPE_GENERIC_TIMEOUT_SECS", default_value_t = GENERIC_TIMEOUT_SECS)]
    pub generic_timeout_secs: u64,

    /// How long a session keeps its last result available for export, in seconds
    #[arg(long, env = "SCRAPE_SESSION_TTL_SECS", default_value_t = SESSION_TTL.as_secs())]
    pub session_ttl_secs: u64,
}

impl Config {
    /// Socket address string for the web server.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn hn_timeout(&self) -> Duration {
        Duration::from_secs(self.hn_timeout_secs)
    }

    pub fn generic_timeout(&self) -> Duration {
        Duration::from_secs(self.generic_timeout_secs)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            hn_base_url: HN_BASE_URL.to_string(),
            hn_timeout_secs: HN_TIMEOUT_SECS,
            generic_timeout_secs: GENERIC_TIMEOUT_SECS,
            session_ttl_secs: SESSION_TTL.as_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_default_config_matches_cli_defaults() {
        let parsed = Config::try_parse_from(["scrape_service"]).expect("defaults should parse");
        let default = Config::default();
        assert_eq!(parsed.host, default.host);
        assert_eq!(parsed.port, default.port);
        assert_eq!(parsed.hn_base_url, default.hn_base_url);
        assert_eq!(parsed.hn_timeout_secs, 10);
        assert_eq!(parsed.generic_timeout_secs, 15);
        assert_eq!(parsed.session_ttl_secs, 1800);
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::try_parse_from([
            "scrape_service",
            "--port",
            "8080",
            "--hn-timeout-secs",
            "3",
            "--log-format",
            "json",
        ])
        .expect("flags should parse");
        assert_eq!(config.port, 8080);
        assert_eq!(config.hn_timeout(), Duration::from_secs(3));
        assert!(matches!(config.log_format, LogFormat::Json));
    }

    #[test]
    fn test_bind_address() {
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 9000,
            ..Default::default()
        };
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }
}
