//! Hacker News listing parser.
//!
//! A listing page holds one `.titleline > a` per story and one `.subtext`
//! metadata row per story. The two lists are collected across all fetched
//! pages and paired by position.

use std::time::Duration;

use log::{debug, error, info, warn};
use url::Url;

use crate::config::{
    HN_LISTING_PATH, HN_PAGE_PARAM, HN_SUBTEXT_SELECTOR, HN_TITLE_LINK_SELECTOR,
};
use crate::error_handling::{FetchError, ParseFault};
use crate::extract::{element_text, normalize_hn_link, parse_author, parse_comments, parse_votes};
use crate::fetch::Fetcher;
use crate::models::Record;
use crate::parse::{HtmlDocument, Node};

/// URL of listing page `page` (1-based).
///
/// Page 1 is the bare listing; later pages add `?p=<page>`.
pub fn listing_url(base: &Url, page: u32) -> Result<Url, url::ParseError> {
    let mut url = base.join(HN_LISTING_PATH)?;
    if page > 1 {
        url.query_pairs_mut()
            .append_pair(HN_PAGE_PARAM, &page.to_string());
    }
    Ok(url)
}

/// Fetches listing pages `1..=pages` one after another.
///
/// A page that cannot be fetched is logged and skipped; the bodies of the
/// remaining pages are returned in page order.
pub async fn fetch_listing_pages(
    fetcher: &dyn Fetcher,
    base: &Url,
    pages: u32,
    timeout: Duration,
) -> Vec<String> {
    let mut bodies = Vec::new();
    for page in 1..=pages {
        let url = match listing_url(base, page) {
            Ok(url) => url,
            Err(e) => {
                error!("Error scraping page {page}: cannot build listing URL: {e}");
                continue;
            }
        };

        match fetcher.fetch(url.as_str(), timeout).await {
            Ok(body) => bodies.push(body),
            Err(e) => log_skipped_page(page, &e),
        }
    }
    bodies
}

fn log_skipped_page(page: u32, e: &FetchError) {
    error!("Error scraping page {page} ({}): {e}", e.kind());
}

/// Parses fetched listing pages into story records.
///
/// Returns stories with at least `min_votes` votes, most votes first.
pub fn parse_hacker_news(
    bodies: &[String],
    base: &Url,
    min_votes: i64,
    scraped_at: &str,
) -> Vec<Record> {
    let documents: Vec<HtmlDocument> = bodies.iter().map(|b| HtmlDocument::parse(b)).collect();

    let mut links = Vec::new();
    let mut subtext = Vec::new();
    for (page, document) in documents.iter().enumerate() {
        match collect_page(document) {
            Ok((page_links, page_subtext)) => {
                links.extend(page_links);
                subtext.extend(page_subtext);
            }
            Err(e) => error!("Error parsing page {}: {e}", page + 1),
        }
    }

    create_hn_records(&links, &subtext, base, min_votes, scraped_at)
}

#[allow(clippy::type_complexity)]
fn collect_page(
    document: &HtmlDocument,
) -> Result<(Vec<scraper::ElementRef<'_>>, Vec<scraper::ElementRef<'_>>), ParseFault> {
    Ok((
        document.select_all(HN_TITLE_LINK_SELECTOR)?,
        document.select_all(HN_SUBTEXT_SELECTOR)?,
    ))
}

/// Pairs title links with metadata rows and builds the records.
///
/// Only indices present in both lists are processed; extra trailing elements
/// in the longer list are dropped. An item that fails to parse is skipped.
pub fn create_hn_records<N: Node>(
    links: &[N],
    subtext: &[N],
    base: &Url,
    min_votes: i64,
    scraped_at: &str,
) -> Vec<Record> {
    info!(
        "Processing {} links and {} subtext items",
        links.len(),
        subtext.len()
    );
    if links.len() != subtext.len() {
        debug!(
            "Dropping {} unpaired elements",
            links.len().abs_diff(subtext.len())
        );
    }

    let mut records = Vec::new();
    for (idx, (link, meta)) in links.iter().zip(subtext).enumerate() {
        match build_item(link, meta, base, scraped_at) {
            Ok(record) if record.votes() >= min_votes => records.push(record),
            Ok(_) => {}
            Err(e) => warn!("Error processing item {idx}: {e}"),
        }
    }

    // sort_by is stable: equal scores keep page order
    records.sort_by(|a, b| b.votes().cmp(&a.votes()));
    records
}

fn build_item<N: Node>(
    link: &N,
    meta: &N,
    base: &Url,
    scraped_at: &str,
) -> Result<Record, ParseFault> {
    let title = element_text(link);
    let href = link.attr("href").unwrap_or_default();

    let mut record = Record::new();
    record.insert("title", title);
    record.insert("link", normalize_hn_link(base, &href));
    record.insert("votes", parse_votes(meta)?);
    record.insert("comments", parse_comments(meta)?);
    record.insert("author", parse_author(meta)?);
    record.insert("scraped_at", scraped_at);
    Ok(record)
}
