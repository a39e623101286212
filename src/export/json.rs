//! JSON export functionality.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::error_handling::ExportError;
use crate::models::{Record, ScrapeResult};

/// One record laid out over the full column set.
struct ColumnRow<'a> {
    columns: &'a [String],
    record: &'a Record,
}

impl Serialize for ColumnRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in self.columns {
            map.serialize_entry(column, &self.record.get(column))?;
        }
        map.end()
    }
}

/// Serializes `result` as a pretty-printed array of objects.
///
/// Every object carries every column in column order; missing values are
/// `null`.
pub fn export_json(result: &ScrapeResult) -> Result<Vec<u8>, ExportError> {
    let rows: Vec<ColumnRow<'_>> = result
        .records
        .iter()
        .map(|record| ColumnRow {
            columns: &result.columns,
            record,
        })
        .collect();
    Ok(serde_json::to_vec_pretty(&rows)?)
}
