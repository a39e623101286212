//! CSS selector parsing utilities.

use scraper::Selector;

use crate::error_handling::ParseFault;

/// Parses a caller-supplied CSS selector.
///
/// # Errors
///
/// Returns `ParseFault::InvalidSelector` carrying the selector text and the
/// parser's reason.
pub fn parse_selector(selector_str: &str) -> Result<Selector, ParseFault> {
    Selector::parse(selector_str).map_err(|e| ParseFault::InvalidSelector {
        selector: selector_str.to_string(),
        reason: e.to_string(),
    })
}
