//! Scrape requests and their validation.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::selectors::SelectorConfig;
use crate::config::{DEFAULT_HN_PAGES, DEFAULT_MAX_ITEMS, DEFAULT_MIN_VOTES, MAX_HN_PAGES};
use crate::error_handling::ValidationError;

/// Which parser handles a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ScrapeType {
    HackerNews,
    Generic,
}

/// A validated scrape request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeRequest {
    HackerNews {
        pages: u32,
        min_votes: i64,
    },
    Generic {
        url: String,
        selectors: SelectorConfig,
        max_items: usize,
    },
}

impl ScrapeRequest {
    pub fn scrape_type(&self) -> ScrapeType {
        match self {
            ScrapeRequest::HackerNews { .. } => ScrapeType::HackerNews,
            ScrapeRequest::Generic { .. } => ScrapeType::Generic,
        }
    }
}

/// Integer parameter as sent by a client: a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntParam {
    Int(i64),
    Text(String),
}

/// Raw `/scrape` parameters, from either a JSON body or a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScrapeParams {
    pub scrape_type: Option<String>,
    pub pages: Option<IntParam>,
    pub min_votes: Option<IntParam>,
    pub url: Option<String>,
    pub css_selectors: Option<SelectorConfig>,
    pub max_items: Option<IntParam>,
}

impl ScrapeParams {
    /// Collects form fields; selectors come from `selector_<field>` entries.
    pub fn from_form(fields: &[(String, String)]) -> Self {
        let lookup = |name: &str| {
            fields
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        };

        let selectors =
            SelectorConfig::from_form_fields(fields.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        Self {
            scrape_type: lookup("scrape_type"),
            pages: lookup("pages").map(IntParam::Text),
            min_votes: lookup("min_votes").map(IntParam::Text),
            url: lookup("url"),
            css_selectors: (!selectors.is_empty()).then_some(selectors),
            max_items: lookup("max_items").map(IntParam::Text),
        }
    }

    /// Validates the parameters and applies defaults.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for an unknown scrape type, a missing or
    /// unusable URL, or an integer parameter that is not a number or outside its
    /// allowed range.
    pub fn into_request(self) -> Result<ScrapeRequest, ValidationError> {
        let scrape_type = match self.scrape_type.as_deref().map(str::trim) {
            None | Some("") => ScrapeType::HackerNews,
            Some(raw) => raw
                .parse::<ScrapeType>()
                .map_err(|_| ValidationError::InvalidScrapeType(raw.to_string()))?,
        };

        match scrape_type {
            ScrapeType::HackerNews => {
                let pages = int_param(
                    "pages",
                    self.pages.as_ref(),
                    DEFAULT_HN_PAGES.into(),
                    1..=MAX_HN_PAGES.into(),
                )?;
                let min_votes = int_param(
                    "min_votes",
                    self.min_votes.as_ref(),
                    DEFAULT_MIN_VOTES,
                    0..=i64::MAX,
                )?;
                Ok(ScrapeRequest::HackerNews {
                    pages: u32::try_from(pages).unwrap_or(MAX_HN_PAGES),
                    min_votes,
                })
            }
            ScrapeType::Generic => {
                let url = match self.url.as_deref().map(str::trim) {
                    None | Some("") => return Err(ValidationError::MissingUrl),
                    Some(url) => normalize_url(url)?,
                };
                let max_items = int_param(
                    "max_items",
                    self.max_items.as_ref(),
                    i64::try_from(DEFAULT_MAX_ITEMS).unwrap_or(i64::MAX),
                    1..=i64::MAX,
                )?;
                Ok(ScrapeRequest::Generic {
                    url,
                    selectors: self.css_selectors.unwrap_or_default(),
                    max_items: usize::try_from(max_items).unwrap_or(usize::MAX),
                })
            }
        }
    }
}

/// Reads an integer parameter that must fall in `range`; absent or blank
/// means `default`.
fn int_param(
    name: &str,
    value: Option<&IntParam>,
    default: i64,
    range: RangeInclusive<i64>,
) -> Result<i64, ValidationError> {
    let value = match value {
        None => default,
        Some(IntParam::Int(n)) => *n,
        Some(IntParam::Text(s)) if s.trim().is_empty() => default,
        Some(IntParam::Text(s)) => {
            s.trim()
                .parse::<i64>()
                .map_err(|_| ValidationError::InvalidInteger {
                    name: name.to_string(),
                    value: s.clone(),
                })?
        }
    };

    if !range.contains(&value) {
        return Err(ValidationError::OutOfRange {
            name: name.to_string(),
            min: *range.start(),
            max: *range.end(),
            value,
        });
    }
    Ok(value)
}

/// Adds `https://` when no scheme is given and checks the result is an
/// http(s) URL.
fn normalize_url(url: &str) -> Result<String, ValidationError> {
    let normalized = if !url.starts_with("http://") && !url.starts_with("https://") {
        format!("https://{url}")
    } else {
        url.to_string()
    };

    let parsed = url::Url::parse(&normalized).map_err(|e| ValidationError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(normalized),
        other => Err(ValidationError::InvalidUrl {
            url: url.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}
