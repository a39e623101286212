//! Error handling.
//!
//! This module provides:
//! - Error type definitions for every layer (fetch, parse, validation, export)
//! - Categorization of `reqwest` errors into fetch failures

mod categorization;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use types::{
    ExportError, FetchError, FetchErrorKind, InitializationError, ParseFault, ScrapeError,
    ValidationError,
};
