//! Error type definitions.
//!
//! Errors are layered by how far they are allowed to travel:
//! - [`ParseFault`] never leaves the field or item it occurred in
//! - [`FetchError`] is per page; the Hacker News flow skips the page, the
//!   generic flow aborts
//! - [`ValidationError`] and [`ExportError`] go straight back to the caller

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured Hacker News base URL is not a URL.
    #[error("Invalid Hacker News base URL: {0}")]
    BaseUrlError(#[from] url::ParseError),
}

/// Categories of fetch failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FetchErrorKind {
    Timeout,
    Connect,
    Status,
    Body,
    Request,
}

impl FetchErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::Timeout => "timeout",
            FetchErrorKind::Connect => "connection error",
            FetchErrorKind::Status => "HTTP status error",
            FetchErrorKind::Body => "body read error",
            FetchErrorKind::Request => "request error",
        }
    }
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A page could not be retrieved.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("Could not connect to {url}: {reason}")]
    Connect { url: String, reason: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to read response body from {url}: {reason}")]
    Body { url: String, reason: String },

    #[error("Request to {url} failed: {reason}")]
    Request { url: String, reason: String },
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Timeout { .. } => FetchErrorKind::Timeout,
            FetchError::Connect { .. } => FetchErrorKind::Connect,
            FetchError::Status { .. } => FetchErrorKind::Status,
            FetchError::Body { .. } => FetchErrorKind::Body,
            FetchError::Request { .. } => FetchErrorKind::Request,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            FetchError::Timeout { url }
            | FetchError::Connect { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Body { url, .. }
            | FetchError::Request { url, .. } => url,
        }
    }
}

/// A selector or link inside a page could not be used.
///
/// Recovered locally: a field gets an error marker, an item is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFault {
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("cannot resolve link '{href}': {reason}")]
    InvalidUrl { href: String, reason: String },
}

/// A request parameter is missing or unusable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid scrape type '{0}'")]
    InvalidScrapeType(String),

    #[error("URL is required for generic scraping")]
    MissingUrl,

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Parameter '{name}' must be an integer, got '{value}'")]
    InvalidInteger { name: String, value: String },

    #[error("Parameter '{name}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: String,
        min: i64,
        max: i64,
        value: i64,
    },

    #[error("Invalid container selector '{selector}': {reason}")]
    InvalidContainerSelector { selector: String, reason: String },

    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

/// Request-level failure of a scrape.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Failed to scrape {}: {}", .0.url(), .0)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Failure to export the session's last result.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No data to export. Please scrape some data first.")]
    NoResults,

    #[error("Unsupported export format '{0}'")]
    UnsupportedFormat(String),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export buffer error: {0}")]
    Buffer(String),
}
