//! Scrape results and their summary.

use serde::Serialize;

use super::record::Record;
use super::request::ScrapeType;

/// Summary attached to every result.
///
/// Vote statistics are only present for non-empty Hacker News results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub scraped_at: String,
    pub total_items: usize,
    pub scrape_type: ScrapeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_votes: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_votes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_votes: Option<i64>,
}

/// Records of one scrape with their column set and summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrapeResult {
    pub scrape_type: ScrapeType,
    pub records: Vec<Record>,
    pub columns: Vec<String>,
    pub summary: Summary,
}

impl ScrapeResult {
    pub fn new(scrape_type: ScrapeType, records: Vec<Record>, scraped_at: String) -> Self {
        let columns = derive_columns(&records);

        let mut summary = Summary {
            scraped_at,
            total_items: records.len(),
            scrape_type,
            avg_votes: None,
            max_votes: None,
            min_votes: None,
        };
        if scrape_type == ScrapeType::HackerNews {
            if let Some(stats) = VoteStats::from_records(&records) {
                summary.avg_votes = Some(stats.avg);
                summary.max_votes = Some(stats.max);
                summary.min_votes = Some(stats.min);
            }
        }

        Self {
            scrape_type,
            records,
            columns,
            summary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Union of all record keys, in first-seen order.
pub fn derive_columns(records: &[Record]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.to_string());
            }
        }
    }
    columns
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct VoteStats {
    avg: f64,
    max: i64,
    min: i64,
}

impl VoteStats {
    fn from_records(records: &[Record]) -> Option<Self> {
        let votes: Vec<i64> = records.iter().map(Record::votes).collect();
        let max = *votes.iter().max()?;
        let min = *votes.iter().min()?;
        let mean = votes.iter().sum::<i64>() as f64 / votes.len() as f64;
        Some(Self {
            avg: (mean * 10.0).round() / 10.0,
            max,
            min,
        })
    }
}
