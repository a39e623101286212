//! CSV export functionality.
//!
//! One header row holding the result's columns, then one row per record.
//! A record without a value for a column gets an empty cell.

use csv::Writer;

use crate::error_handling::ExportError;
use crate::models::ScrapeResult;

/// Serializes `result` to CSV bytes.
pub fn export_csv(result: &ScrapeResult) -> Result<Vec<u8>, ExportError> {
    let mut writer = Writer::from_writer(Vec::new());

    writer.write_record(&result.columns)?;
    for record in &result.records {
        let row = result
            .columns
            .iter()
            .map(|column| record.get(column).map(ToString::to_string).unwrap_or_default());
        writer.write_record(row)?;
    }

    writer.flush().map_err(|e| ExportError::Buffer(e.to_string()))?;
    writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Record, ScrapeType};

    fn record(pairs: &[(&str, &str)]) -> Record {
        let mut record = Record::new();
        for (k, v) in pairs {
            record.insert(*k, *v);
        }
        record
    }

    #[test]
    fn test_header_is_columns_and_missing_cells_are_empty() {
        let mut first = record(&[("title", "Hello, world"), ("author", "ana")]);
        first.insert("votes", 120i64);
        let second = record(&[("title", "Quoted \"text\""), ("extra", "x")]);
        let result = ScrapeResult::new(
            ScrapeType::Generic,
            vec![first, second],
            "2024-05-01 12:00:00".to_string(),
        );

        let csv = String::from_utf8(export_csv(&result).expect("export")).expect("utf8");
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "title,author,votes,extra");
        assert_eq!(lines[1], "\"Hello, world\",ana,120,");
        assert_eq!(lines[2], "\"Quoted \"\"text\"\"\",,,x");
        assert_eq!(lines.len(), 3);
    }
}
