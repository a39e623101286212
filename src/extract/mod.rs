//! Record extraction: the selector engine and field derivations.

mod engine;
mod fields;

pub use engine::extract_record;
pub use fields::{element_text, normalize_hn_link, parse_author, parse_comments, parse_votes};
