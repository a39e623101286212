//! Queryable element capability.
//!
//! Extraction code is written against [`Node`] rather than a concrete HTML
//! parser; the `scraper` implementation lives here.

use scraper::{ElementRef, Html};

use super::selector::parse_selector;
use crate::error_handling::ParseFault;

/// An element that can be searched with CSS selectors.
pub trait Node: Sized {
    /// All descendants matching `selector`, in document order.
    fn select_all(&self, selector: &str) -> Result<Vec<Self>, ParseFault>;

    /// First descendant matching `selector`.
    fn select_first(&self, selector: &str) -> Result<Option<Self>, ParseFault> {
        Ok(self.select_all(selector)?.into_iter().next())
    }

    /// Concatenated text content of the element and its descendants.
    fn text(&self) -> String;

    fn attr(&self, name: &str) -> Option<String>;
}

impl<'a> Node for ElementRef<'a> {
    fn select_all(&self, selector: &str) -> Result<Vec<Self>, ParseFault> {
        let selector = parse_selector(selector)?;
        Ok(self.select(&selector).collect())
    }

    fn select_first(&self, selector: &str) -> Result<Option<Self>, ParseFault> {
        let selector = parse_selector(selector)?;
        Ok(self.select(&selector).next())
    }

    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(String::from)
    }
}

/// A parsed HTML page.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parses a full HTML document. html5ever recovers from malformed markup,
    /// so this never fails.
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// All elements in the document matching `selector`, in document order.
    pub fn select_all(&self, selector: &str) -> Result<Vec<ElementRef<'_>>, ParseFault> {
        let selector = parse_selector(selector)?;
        Ok(self.html.select(&selector).collect())
    }
}
