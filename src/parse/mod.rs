//! HTML parsing: the queryable element capability and selector helpers.

mod node;
mod selector;

pub use node::{HtmlDocument, Node};
pub use selector::parse_selector;
