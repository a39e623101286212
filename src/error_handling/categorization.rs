//! Error categorization.
//!
//! Maps `reqwest` failures onto [`FetchError`] so callers can tell a slow
//! site from a refused connection or an error status.

use super::types::FetchError;

/// Categorizes a `reqwest::Error` raised while fetching `url`.
///
/// Status errors are checked first (they come from `error_for_status()`),
/// then the transport-level categories.
pub fn categorize_reqwest_error(url: &str, error: &reqwest::Error) -> FetchError {
    let url = url.to_string();

    if let Some(status) = error.status() {
        return FetchError::Status {
            url,
            status: status.as_u16(),
        };
    }

    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_connect() {
        FetchError::Connect {
            url,
            reason: error.to_string(),
        }
    } else if error.is_body() || error.is_decode() {
        FetchError::Body {
            url,
            reason: error.to_string(),
        }
    } else {
        FetchError::Request {
            url,
            reason: error.to_string(),
        }
    }
}
