//! HTTP handlers.

mod export;
mod index;
mod scrape;

pub use export::export_handler;
pub use index::index_handler;
pub use scrape::scrape_handler;
