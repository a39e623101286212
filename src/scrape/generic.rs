//! Generic site parser: one record per container element.

use std::time::Duration;

use log::info;
use url::Url;

use crate::error_handling::{ParseFault, ScrapeError, ValidationError};
use crate::extract::extract_record;
use crate::fetch::Fetcher;
use crate::models::{Record, SelectorConfig};
use crate::parse::{parse_selector, HtmlDocument};

/// Builds up to `max_items` records from the container blocks of `document`.
///
/// Each record holds `index` (1-based, document order), then the configured
/// fields in configuration order, then `scraped_at`.
pub fn parse_generic(
    document: &HtmlDocument,
    selectors: &SelectorConfig,
    base_url: &Url,
    max_items: usize,
    scraped_at: &str,
) -> Result<Vec<Record>, ValidationError> {
    let container = selectors.container();
    let blocks = document
        .select_all(container)
        .map_err(|fault| invalid_container(container, fault))?;

    info!(
        "Found {} containers matching '{container}', keeping at most {max_items}",
        blocks.len()
    );

    let records = blocks
        .iter()
        .take(max_items)
        .enumerate()
        .map(|(index, block)| {
            let mut record = Record::new();
            record.insert("index", index + 1);
            for (field, value) in extract_record(block, selectors, base_url).iter() {
                record.insert(field, value.clone());
            }
            record.insert("scraped_at", scraped_at);
            record
        })
        .collect();

    Ok(records)
}

fn invalid_container(selector: &str, fault: ParseFault) -> ValidationError {
    let reason = match fault {
        ParseFault::InvalidSelector { reason, .. } => reason,
        other => other.to_string(),
    };
    ValidationError::InvalidContainerSelector {
        selector: selector.to_string(),
        reason,
    }
}

/// Fetches `url` and parses it with [`parse_generic`].
///
/// The container selector is checked before anything is fetched. Unlike a
/// Hacker News page, a failed fetch here fails the whole request.
pub async fn scrape_generic(
    fetcher: &dyn Fetcher,
    url: &str,
    selectors: &SelectorConfig,
    max_items: usize,
    timeout: Duration,
    scraped_at: &str,
) -> Result<Vec<Record>, ScrapeError> {
    let base_url = Url::parse(url).map_err(|e| ValidationError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    let container = selectors.container();
    parse_selector(container).map_err(|fault| invalid_container(container, fault))?;

    let body = fetcher.fetch(url, timeout).await?;

    let document = HtmlDocument::parse(&body);
    Ok(parse_generic(
        &document, selectors, &base_url, max_items, scraped_at,
    )?)
}
