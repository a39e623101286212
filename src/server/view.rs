//! Plain HTML pages: the input form, the results table, error pages.

use std::fmt::Write;

use crate::models::{ScrapeResult, ScrapeType, Summary};

/// Escapes text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const FORM: &str = r#"<form method="post" action="/scrape">
<fieldset>
<legend>Scrape</legend>
<label>Type <select name="scrape_type">
<option value="hackernews">Hacker News</option>
<option value="generic">Generic site</option>
</select></label>
<label>Pages <input type="number" name="pages" value="2" min="1"></label>
<label>Minimum votes <input type="number" name="min_votes" value="99" min="0"></label>
<label>URL <input type="text" name="url" placeholder="https://example.com"></label>
<label>Container <input type="text" name="selector_container" placeholder="body"></label>
<label>Title <input type="text" name="selector_title"></label>
<label>Link <input type="text" name="selector_link_href"></label>
<label>Description <input type="text" name="selector_description"></label>
<label>Max items <input type="number" name="max_items" value="50" min="1"></label>
<button type="submit">Scrape</button>
</fieldset>
</form>"#;

fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Web Scraper</title></head>\n<body>\n<h1>Web Scraper</h1>\n{body}\n</body>\n</html>\n"
    )
}

/// The main page: form, optional inline error, optional results.
pub fn render_index(result: Option<&ScrapeResult>, error: Option<&str>) -> String {
    let mut body = String::new();
    if let Some(error) = error {
        let _ = writeln!(body, "<p class=\"error\">{}</p>", escape_html(error));
    }
    body.push_str(FORM);
    body.push('\n');
    if let Some(result) = result {
        body.push_str(&render_results(result));
    }
    page(&body)
}

/// A standalone error page with a link back to the form.
pub fn render_error_page(message: &str) -> String {
    page(&format!(
        "<p class=\"error\">{}</p>\n<p><a href=\"/\">Back</a></p>",
        escape_html(message)
    ))
}

fn render_results(result: &ScrapeResult) -> String {
    let mut out = String::new();
    out.push_str("<section class=\"results\">\n");
    out.push_str(&render_summary(&result.summary));

    if result.is_empty() {
        out.push_str("<p>No items found.</p>\n</section>\n");
        return out;
    }

    out.push_str("<p><a href=\"/export/csv\">Export CSV</a> | <a href=\"/export/json\">Export JSON</a></p>\n");
    out.push_str("<table>\n<thead><tr>");
    for column in &result.columns {
        let _ = write!(out, "<th>{}</th>", escape_html(column));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for record in &result.records {
        out.push_str("<tr>");
        for column in &result.columns {
            let value = record.get(column).map(ToString::to_string).unwrap_or_default();
            let _ = write!(out, "<td>{}</td>", escape_html(&value));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n</section>\n");
    out
}

fn render_summary(summary: &Summary) -> String {
    let mut out = String::from("<ul class=\"summary\">\n");
    let _ = writeln!(out, "<li>Scraped at: {}</li>", escape_html(&summary.scraped_at));
    let _ = writeln!(out, "<li>Total items: {}</li>", summary.total_items);
    let _ = writeln!(out, "<li>Type: {}</li>", summary.scrape_type);
    if summary.scrape_type == ScrapeType::HackerNews {
        if let (Some(avg), Some(max), Some(min)) =
            (summary.avg_votes, summary.max_votes, summary.min_votes)
        {
            let _ = writeln!(out, "<li>Votes: avg {avg}, max {max}, min {min}</li>");
        }
    }
    out.push_str("</ul>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_index_without_results_has_form_only() {
        let html = render_index(None, None);
        assert!(html.contains("action=\"/scrape\""));
        assert!(html.contains("name=\"selector_container\""));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_results_table_escapes_values() {
        let mut record = Record::new();
        record.insert("title", "<script>alert(1)</script>");
        record.insert("votes", 150i64);
        let result = ScrapeResult::new(
            ScrapeType::HackerNews,
            vec![record],
            "2024-05-01 12:00:00".to_string(),
        );

        let html = render_index(Some(&result), None);
        assert!(html.contains("<th>title</th><th>votes</th>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("Votes: avg 150, max 150, min 150"));
        assert!(html.contains("/export/csv"));
    }

    #[test]
    fn test_inline_error() {
        let html = render_index(None, Some("URL is required for generic scraping"));
        assert!(html.contains("<p class=\"error\">URL is required for generic scraping</p>"));
    }
}
