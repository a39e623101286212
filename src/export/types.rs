//! Export types.

use chrono::{DateTime, TimeZone};
use strum_macros::{Display, EnumIter, EnumString};

use crate::config::EXPORT_FILENAME_TIMESTAMP_FORMAT;

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    /// One header row of columns, one row per record
    Csv,
    /// Array of objects, 2-space indented
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Json => "application/json",
        }
    }

    /// Attachment name, e.g. `scraped_data_20240501_120000.csv`.
    pub fn file_name<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        format!(
            "scraped_data_{}.{}",
            at.format(EXPORT_FILENAME_TIMESTAMP_FORMAT),
            self.extension()
        )
    }
}

/// A serialized result ready to be sent as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}
