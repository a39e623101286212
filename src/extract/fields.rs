//! Per-field value derivation.
//!
//! Text and link extraction for the selector engine, plus the Hacker News
//! specific derivations (votes, comment count, author, item links).

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::config::{
    HN_AUTHOR_SELECTOR, HN_ITEM_LINK_SELECTOR, HN_SCORE_SELECTOR, HN_UNKNOWN_AUTHOR,
};
use crate::error_handling::ParseFault;
use crate::parse::Node;

const DIGIT_RUN_PATTERN: &str = r"[0-9]+";

/// Helper function to safely compile a regex pattern, panicking with a detailed error message
/// if compilation fails. Used for static regex patterns that are compile-time constants.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static DIGIT_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(DIGIT_RUN_PATTERN, "DIGIT_RUN_RE"));

/// First run of ASCII digits in `text` as an integer.
///
/// `None` when there is no digit run. A run too long for an `i64`
/// saturates to `i64::MAX`.
pub fn first_digit_run(text: &str) -> Option<i64> {
    DIGIT_RUN_RE
        .find(text)
        .map(|m| m.as_str().parse::<i64>().unwrap_or(i64::MAX))
}

/// Trimmed text content of an element.
pub fn element_text<N: Node>(node: &N) -> String {
    node.text().trim().to_string()
}

/// Resolves `href` against `base` into an absolute URL.
///
/// Absolute hrefs come back unchanged (modulo URL normalization).
pub fn resolve_href(base: &Url, href: &str) -> Result<String, ParseFault> {
    base.join(href)
        .map(String::from)
        .map_err(|e| ParseFault::InvalidUrl {
            href: href.to_string(),
            reason: e.to_string(),
        })
}

/// Normalizes a Hacker News title link.
///
/// - `item?...` → appended to the site root
/// - other relative links → resolved against the site root
/// - absolute (`http...`) or empty links → unchanged
pub fn normalize_hn_link(base: &Url, href: &str) -> String {
    if href.starts_with("item?") {
        return format!("{}{}", base.as_str(), href);
    }
    if href.is_empty() || href.starts_with("http") {
        return href.to_string();
    }
    match resolve_href(base, href) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::debug!("Keeping unresolvable HN link as-is: {e}");
            href.to_string()
        }
    }
}

/// Score of a story from its metadata block; 0 when the block has no score
/// (job postings) or the score has no number.
pub fn parse_votes<N: Node>(meta: &N) -> Result<i64, ParseFault> {
    let votes = meta
        .select_first(HN_SCORE_SELECTOR)?
        .and_then(|score| first_digit_run(&score.text()))
        .unwrap_or(0);
    Ok(votes)
}

/// Comment count from the last item link in a metadata block.
///
/// Only counts when the link text mentions comments; "discuss" yields 0.
pub fn parse_comments<N: Node>(meta: &N) -> Result<i64, ParseFault> {
    let links = meta.select_all(HN_ITEM_LINK_SELECTOR)?;
    let comments = links
        .last()
        .map(Node::text)
        .filter(|text| text.contains("comment"))
        .and_then(|text| first_digit_run(&text))
        .unwrap_or(0);
    Ok(comments)
}

pub fn parse_author<N: Node>(meta: &N) -> Result<String, ParseFault> {
    let author = meta
        .select_first(HN_AUTHOR_SELECTOR)?
        .map(|user| element_text(&user))
        .unwrap_or_else(|| HN_UNKNOWN_AUTHOR.to_string());
    Ok(author)
}
