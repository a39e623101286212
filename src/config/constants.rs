//! Configuration constants.
//!
//! This module defines the defaults used throughout the application: request
//! parameter defaults, timeouts, the Hacker News layout and the session cookie.

use std::time::Duration;

// Request parameter defaults
/// Number of Hacker News listing pages fetched when `pages` is not supplied
pub const DEFAULT_HN_PAGES: u32 = 2;
/// Largest `pages` value a Hacker News scrape accepts
pub const MAX_HN_PAGES: u32 = 20;
/// Minimum score a Hacker News story needs when `min_votes` is not supplied
pub const DEFAULT_MIN_VOTES: i64 = 99;
/// Maximum number of containers extracted by a generic scrape when `max_items` is not supplied
pub const DEFAULT_MAX_ITEMS: usize = 50;

// Network operation timeouts
/// Per-page deadline for Hacker News listing fetches
pub const HN_TIMEOUT_SECS: u64 = 10;
/// Deadline for the single page fetched by a generic scrape
pub const GENERIC_TIMEOUT_SECS: u64 = 15;

/// Default User-Agent string for outbound requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Hacker News layout
/// Site root; item links (`item?id=...`) and relative links are resolved against it
pub const HN_BASE_URL: &str = "https://news.ycombinator.com/";
/// Listing path relative to the site root
pub const HN_LISTING_PATH: &str = "news";
/// Query parameter selecting listing pages after the first
pub const HN_PAGE_PARAM: &str = "p";
/// Title links, one per story
pub const HN_TITLE_LINK_SELECTOR: &str = ".titleline > a";
/// Metadata row (score, author, comment count), one per story
pub const HN_SUBTEXT_SELECTOR: &str = ".subtext";
pub const HN_SCORE_SELECTOR: &str = ".score";
pub const HN_AUTHOR_SELECTOR: &str = ".hnuser";
/// Links to the item page; the last one in a metadata row is the comment count
pub const HN_ITEM_LINK_SELECTOR: &str = "a[href*=\"item?id=\"]";
/// Author recorded when a story has no `.hnuser` element (job postings)
pub const HN_UNKNOWN_AUTHOR: &str = "Unknown";

// Generic scrape
/// Reserved selector key naming the repeatable element block
pub const CONTAINER_KEY: &str = "container";
/// Container used when the request does not name one
pub const DEFAULT_CONTAINER_SELECTOR: &str = "body";
/// Field-name suffix marking a field whose `href` is resolved instead of its text
pub const HREF_FIELD_SUFFIX: &str = "_href";
/// Prefix of form fields carrying per-field selectors (`selector_title=h2`)
pub const FORM_SELECTOR_PREFIX: &str = "selector_";

// Sessions
/// Cookie carrying the caller's session id
pub const SESSION_COOKIE_NAME: &str = "scrape_session";
/// How long a cached result stays available for export
pub const SESSION_TTL: Duration = Duration::from_secs(30 * 60);

// Timestamps
/// Format of `scraped_at` values and the summary timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Format of the timestamp embedded in export file names
pub const EXPORT_FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

// Server
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
