//! Scrape orchestration.
//!
//! [`Scraper`] turns a validated [`ScrapeRequest`] into a [`ScrapeResult`].
//! Pages are always fetched before any HTML is parsed, so no parsed
//! document is held across an await point.

mod generic;
mod hackernews;

use std::sync::Arc;
use std::time::Duration;

use log::info;
use url::Url;

use crate::config::{Config, TIMESTAMP_FORMAT};
use crate::error_handling::ScrapeError;
use crate::fetch::Fetcher;
use crate::models::{ScrapeRequest, ScrapeResult, SelectorConfig};

pub use generic::{parse_generic, scrape_generic};
pub use hackernews::{create_hn_records, fetch_listing_pages, listing_url, parse_hacker_news};

/// Endpoint and timeout settings for a [`Scraper`].
#[derive(Debug, Clone)]
pub struct ScraperSettings {
    pub hn_base_url: Url,
    pub hn_timeout: Duration,
    pub generic_timeout: Duration,
}

impl ScraperSettings {
    pub fn from_config(config: &Config) -> Result<Self, url::ParseError> {
        Ok(Self {
            hn_base_url: Url::parse(&config.hn_base_url)?,
            hn_timeout: config.hn_timeout(),
            generic_timeout: config.generic_timeout(),
        })
    }
}

/// Runs scrapes through a shared [`Fetcher`].
#[derive(Clone)]
pub struct Scraper {
    fetcher: Arc<dyn Fetcher>,
    settings: ScraperSettings,
}

impl Scraper {
    pub fn new(fetcher: Arc<dyn Fetcher>, settings: ScraperSettings) -> Self {
        Self { fetcher, settings }
    }

    /// Runs `request` and stamps every record with the current local time.
    ///
    /// Hacker News page failures are skipped, so that mode only fails on
    /// validation. A generic scrape fails if its single page cannot be fetched.
    pub async fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeResult, ScrapeError> {
        let scraped_at = now_timestamp();
        let records = match request {
            ScrapeRequest::HackerNews { pages, min_votes } => {
                self.scrape_hacker_news(*pages, *min_votes, &scraped_at)
                    .await
            }
            ScrapeRequest::Generic {
                url,
                selectors,
                max_items,
            } => {
                self.scrape_generic(url, selectors, *max_items, &scraped_at)
                    .await?
            }
        };

        info!(
            "Scrape ({}) finished with {} records",
            request.scrape_type(),
            records.len()
        );
        Ok(ScrapeResult::new(request.scrape_type(), records, scraped_at))
    }

    async fn scrape_hacker_news(
        &self,
        pages: u32,
        min_votes: i64,
        scraped_at: &str,
    ) -> Vec<crate::models::Record> {
        let bodies = fetch_listing_pages(
            self.fetcher.as_ref(),
            &self.settings.hn_base_url,
            pages,
            self.settings.hn_timeout,
        )
        .await;
        info!("Fetched {} of {pages} Hacker News pages", bodies.len());
        parse_hacker_news(&bodies, &self.settings.hn_base_url, min_votes, scraped_at)
    }

    async fn scrape_generic(
        &self,
        url: &str,
        selectors: &SelectorConfig,
        max_items: usize,
        scraped_at: &str,
    ) -> Result<Vec<crate::models::Record>, ScrapeError> {
        scrape_generic(
            self.fetcher.as_ref(),
            url,
            selectors,
            max_items,
            self.settings.generic_timeout,
            scraped_at,
        )
        .await
    }
}

fn now_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::FetchError;
    use crate::models::ScrapeType;
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// Serves canned pages; any other URL is a connection failure.
    struct StaticFetcher {
        pages: HashMap<String, String>,
    }

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch(&self, url: &str, _timeout: Duration) -> Result<String, FetchError> {
            self.pages
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::Connect {
                    url: url.to_string(),
                    reason: "connection refused".to_string(),
                })
        }
    }

    fn scraper(pages: &[(&str, &str)]) -> Scraper {
        let fetcher = StaticFetcher {
            pages: pages
                .iter()
                .map(|(u, b)| (u.to_string(), b.to_string()))
                .collect(),
        };
        let settings = ScraperSettings {
            hn_base_url: Url::parse("https://hn.test/").expect("valid"),
            hn_timeout: Duration::from_secs(1),
            generic_timeout: Duration::from_secs(1),
        };
        Scraper::new(Arc::new(fetcher), settings)
    }

    const HN_PAGE: &str = r#"<table>
        <tr><td><span class="titleline"><a href="item?id=1">Big</a></span></td></tr>
        <tr><td class="subtext"><span class="score">150 points</span></td></tr>
    </table>"#;

    #[tokio::test]
    async fn test_hacker_news_skips_failed_pages() {
        // Only page 1 exists; page 2 fails to fetch
        let scraper = scraper(&[("https://hn.test/news", HN_PAGE)]);
        let result = scraper
            .scrape(&ScrapeRequest::HackerNews {
                pages: 2,
                min_votes: 99,
            })
            .await
            .expect("hacker news scrape never fails on fetch errors");

        assert_eq!(result.scrape_type, ScrapeType::HackerNews);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.summary.max_votes, Some(150));
    }

    #[tokio::test]
    async fn test_all_pages_failing_is_an_empty_result() {
        let scraper = scraper(&[]);
        let result = scraper
            .scrape(&ScrapeRequest::HackerNews {
                pages: 3,
                min_votes: 0,
            })
            .await
            .expect("empty result");
        assert!(result.is_empty());
        assert_eq!(result.summary.total_items, 0);
        assert_eq!(result.summary.avg_votes, None);
    }

    #[tokio::test]
    async fn test_generic_fetch_failure_is_an_error() {
        let scraper = scraper(&[]);
        let err = scraper
            .scrape(&ScrapeRequest::Generic {
                url: "https://down.test/".to_string(),
                selectors: SelectorConfig::new(),
                max_items: 50,
            })
            .await
            .expect_err("generic fetch failure");
        assert!(matches!(err, ScrapeError::Fetch(FetchError::Connect { .. })));
        assert!(err.to_string().contains("https://down.test/"));
    }

    #[tokio::test]
    async fn test_records_share_one_timestamp() {
        let scraper = scraper(&[(
            "https://site.test/",
            "<div class=\"a\">1</div><div class=\"a\">2</div>",
        )]);
        let selectors: SelectorConfig = [("container", ".a")].into_iter().collect();
        let result = scraper
            .scrape(&ScrapeRequest::Generic {
                url: "https://site.test/".to_string(),
                selectors,
                max_items: 50,
            })
            .await
            .expect("scrape succeeds");

        assert_eq!(result.records.len(), 2);
        let stamp = result.summary.scraped_at.clone();
        assert!(result
            .records
            .iter()
            .all(|r| r.get("scraped_at").map(ToString::to_string) == Some(stamp.clone())));
    }
}
