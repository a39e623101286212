//! scrape_service library: Hacker News and CSS-selector web scraping
//!
//! This library fetches pages, turns them into ordered records (either the
//! Hacker News front-page listing or any page described by CSS selectors),
//! and serves the results over HTTP with CSV and JSON export.
//!
//! # Example
//!
//! ```no_run
//! use scrape_service::{Config, start_server};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     port: 8080,
//!     ..Default::default()
//! };
//!
//! start_server(&config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Scrapes can also be run without the server:
//!
//! ```no_run
//! use std::sync::Arc;
//! use scrape_service::{Config, HttpFetcher, ScrapeParams, Scraper, ScraperSettings};
//! use scrape_service::initialization::init_client;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let fetcher = HttpFetcher::new(init_client(&config)?);
//! let scraper = Scraper::new(Arc::new(fetcher), ScraperSettings::from_config(&config)?);
//!
//! let request = ScrapeParams::default().into_request()?;
//! let result = scraper.scrape(&request).await?;
//! println!("{} stories", result.summary.total_items);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

pub mod config;
pub mod error_handling;
pub mod export;
mod extract;
mod fetch;
pub mod initialization;
pub mod models;
mod parse;
mod scrape;
mod server;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use extract::extract_record;
pub use fetch::{Fetcher, HttpFetcher};
pub use models::{
    FieldValue, Record, ScrapeParams, ScrapeRequest, ScrapeResult, ScrapeType, SelectorConfig,
    Summary,
};
pub use parse::{HtmlDocument, Node};
pub use scrape::{
    create_hn_records, listing_url, parse_generic, parse_hacker_news, Scraper, ScraperSettings,
};
pub use server::{build_router, start_server, AppState, SessionStore};
