//! Server state and JSON response bodies.

use std::sync::Arc;

use serde::Serialize;

use super::session::SessionStore;
use crate::models::{Record, ScrapeResult, Summary};
use crate::scrape::Scraper;

/// Shared state for the handlers
#[derive(Clone)]
pub struct AppState {
    pub scraper: Arc<Scraper>,
    pub sessions: Arc<SessionStore>,
}

/// JSON response for a successful `/scrape`
#[derive(Serialize)]
pub struct ScrapeResponse<'a> {
    pub success: bool,
    pub data: &'a [Record],
    pub total_items: usize,
    pub columns: &'a [String],
    pub summary: &'a Summary,
}

impl<'a> From<&'a ScrapeResult> for ScrapeResponse<'a> {
    fn from(result: &'a ScrapeResult) -> Self {
        ScrapeResponse {
            success: true,
            data: &result.records,
            total_items: result.records.len(),
            columns: &result.columns,
            summary: &result.summary,
        }
    }
}

/// JSON response for a failed `/scrape`
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl ToString) -> Self {
        ErrorResponse {
            success: false,
            error: error.to_string(),
        }
    }
}
