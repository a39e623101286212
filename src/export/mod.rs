//! Export of scrape results to downloadable files (CSV, JSON).

mod csv;
mod json;
mod types;

use chrono::{DateTime, Local};
use log::info;

use crate::error_handling::ExportError;
use crate::models::ScrapeResult;

pub use csv::export_csv;
pub use json::export_json;
pub use types::{ExportFile, ExportFormat};

/// Parses a format name from a request path.
pub fn parse_format(name: &str) -> Result<ExportFormat, ExportError> {
    name.parse()
        .map_err(|_| ExportError::UnsupportedFormat(name.to_string()))
}

/// Serializes `result` in `format`, naming the file after `at`.
///
/// An empty result cannot be exported.
pub fn export(
    result: &ScrapeResult,
    format: ExportFormat,
    at: &DateTime<Local>,
) -> Result<ExportFile, ExportError> {
    if result.is_empty() {
        return Err(ExportError::NoResults);
    }

    let body = match format {
        ExportFormat::Csv => export_csv(result)?,
        ExportFormat::Json => export_json(result)?,
    };
    let file_name = format.file_name(at);
    info!(
        "Exported {} records as {file_name} ({} bytes)",
        result.records.len(),
        body.len()
    );

    Ok(ExportFile {
        file_name,
        content_type: format.content_type(),
        body,
    })
}
