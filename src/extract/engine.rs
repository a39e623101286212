//! Selector engine: applies a [`SelectorConfig`] to one element block.

use url::Url;

use super::fields::{element_text, resolve_href};
use crate::error_handling::ParseFault;
use crate::models::{is_href_field, Record, SelectorConfig};
use crate::parse::Node;

/// Extracts every configured field (except `container`) from `block`.
///
/// Missing elements yield empty strings. A fault in one field (bad selector,
/// unresolvable link) becomes `"Error: ..."` for that field alone; the
/// remaining fields are still extracted.
pub fn extract_record<N: Node>(block: &N, selectors: &SelectorConfig, base_url: &Url) -> Record {
    let mut record = Record::new();
    for (field, selector) in selectors.fields() {
        let value = extract_field(block, field, selector, base_url).unwrap_or_else(|fault| {
            log::warn!("Error extracting {field} with selector '{selector}': {fault}");
            format!("Error: {fault}")
        });
        record.insert(field, value);
    }
    record
}

fn extract_field<N: Node>(
    block: &N,
    field: &str,
    selector: &str,
    base_url: &Url,
) -> Result<String, ParseFault> {
    let Some(element) = block.select_first(selector)? else {
        return Ok(String::new());
    };

    if is_href_field(field) {
        match element.attr("href") {
            Some(href) if !href.is_empty() => resolve_href(base_url, &href),
            _ => Ok(String::new()),
        }
    } else {
        Ok(element_text(&element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldValue;
    use crate::parse::HtmlDocument;

    const POST: &str = r#"
        <div class="post">
            <h2>  Hello world  </h2>
            <a class="more" href="/posts/hello">Read more</a>
            <a class="anchor">no href</a>
            <span class="author">ana</span>
        </div>
    "#;

    fn base() -> Url {
        Url::parse("https://blog.example.com/index.html").expect("valid base")
    }

    fn text(record: &Record, key: &str) -> String {
        match record.get(key) {
            Some(FieldValue::Text(s)) => s.clone(),
            other => panic!("expected text for {key}, got {other:?}"),
        }
    }

    #[test]
    fn test_extracts_text_and_resolved_links() {
        let doc = HtmlDocument::parse(POST);
        let block = &doc.select_all(".post").expect("valid")[0];
        let selectors: SelectorConfig = [
            ("container", ".post"),
            ("title", "h2"),
            ("link_href", "a.more"),
        ]
        .into_iter()
        .collect();

        let record = extract_record(block, &selectors, &base());
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["title", "link_href"]);
        assert_eq!(text(&record, "title"), "Hello world");
        assert_eq!(
            text(&record, "link_href"),
            "https://blog.example.com/posts/hello"
        );
    }

    #[test]
    fn test_missing_element_and_missing_href_are_empty() {
        let doc = HtmlDocument::parse(POST);
        let block = &doc.select_all(".post").expect("valid")[0];
        let selectors: SelectorConfig = [
            ("summary", "p.summary"),
            ("anchor_href", "a.anchor"),
            ("missing_href", "a.nowhere"),
        ]
        .into_iter()
        .collect();

        let record = extract_record(block, &selectors, &base());
        assert_eq!(text(&record, "summary"), "");
        assert_eq!(text(&record, "anchor_href"), "");
        assert_eq!(text(&record, "missing_href"), "");
    }

    #[test]
    fn test_bad_selector_only_affects_its_field() {
        let doc = HtmlDocument::parse(POST);
        let block = &doc.select_all(".post").expect("valid")[0];
        let selectors: SelectorConfig = [("broken", "h2["), ("author", ".author")]
            .into_iter()
            .collect();

        let record = extract_record(block, &selectors, &base());
        assert!(text(&record, "broken").starts_with("Error: invalid selector 'h2['"));
        assert_eq!(text(&record, "author"), "ana");
    }

    #[test]
    fn test_href_field_text_is_not_used() {
        let doc = HtmlDocument::parse(POST);
        let block = &doc.select_all(".post").expect("valid")[0];
        let selectors: SelectorConfig = [("author_href", ".author")].into_iter().collect();

        // The span has text but no href
        let record = extract_record(block, &selectors, &base());
        assert_eq!(text(&record, "author_href"), "");
    }
}
