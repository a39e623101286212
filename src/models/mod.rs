//! Data model shared by the parsers, the web layer and the exporters.

mod record;
mod request;
mod result;
mod selectors;

pub use record::{FieldValue, Record};
pub use request::{IntParam, ScrapeParams, ScrapeRequest, ScrapeType};
pub use result::{derive_columns, ScrapeResult, Summary};
pub use selectors::{is_href_field, SelectorConfig};
