//! Page retrieval.
//!
//! [`Fetcher`] is the seam between the scrapers and the network: the
//! scrapers only ever ask for a page body. [`HttpFetcher`] is the `reqwest`
//! implementation used by the server.

mod request;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::error_handling::{categorize_reqwest_error, FetchError};
use request::RequestHeaders;

/// Retrieves the raw HTML of a page.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url`, failing if it takes longer than `timeout` or the server
    /// answers with an error status.
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError>;
}

/// `reqwest`-backed fetcher.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Arc<reqwest::Client>,
}

impl HttpFetcher {
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        debug!("Fetching {url} (timeout {}s)", timeout.as_secs());

        let request = RequestHeaders::apply_to_request_builder(self.client.get(url)).timeout(timeout);

        let response = request
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| categorize_reqwest_error(url, &e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| categorize_reqwest_error(url, &e))?;

        debug!("Fetched {url}: HTTP {} ({} bytes)", status.as_u16(), body.len());
        Ok(body)
    }
}
