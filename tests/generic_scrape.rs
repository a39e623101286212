//! Generic CSS-selector scraping against a mock site.

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use scrape_service::error_handling::{FetchError, ScrapeError};
use scrape_service::initialization::init_client;
use scrape_service::{
    FieldValue, HttpFetcher, ScrapeParams, ScrapeRequest, Scraper, ScraperSettings, SelectorConfig,
};

use helpers::{fixture, mount_page, test_config};

fn scraper() -> Scraper {
    let config = test_config("https://news.ycombinator.com/");
    let client = init_client(&config).expect("Failed to build client");
    let settings = ScraperSettings::from_config(&config).expect("valid base URL");
    Scraper::new(Arc::new(HttpFetcher::new(client)), settings)
}

fn blog_selectors() -> SelectorConfig {
    [
        ("container", ".post"),
        ("title", "h2"),
        ("link_href", "a.permalink"),
        ("summary", "p.summary"),
    ]
    .into_iter()
    .collect()
}

#[tokio::test]
async fn test_max_items_limits_records_in_document_order() {
    let server = MockServer::start().await;
    mount_page(&server, "/blog/", fixture("blog.html")).await;

    let result = scraper()
        .scrape(&ScrapeRequest::Generic {
            url: format!("{}/blog/", server.uri()),
            selectors: blog_selectors(),
            max_items: 2,
        })
        .await
        .expect("scrape succeeds");

    assert_eq!(result.records.len(), 2);
    assert_eq!(
        result.columns,
        vec!["index", "title", "link_href", "summary", "scraped_at"]
    );

    let first = &result.records[0];
    assert_eq!(first.get("index"), Some(&FieldValue::Integer(1)));
    assert_eq!(first.get("title"), Some(&FieldValue::from("Parsing HTML in Rust")));
    assert_eq!(
        first.get("link_href"),
        Some(&FieldValue::from(format!("{}/posts/parsing-html", server.uri())))
    );

    let second = &result.records[1];
    assert_eq!(second.get("index"), Some(&FieldValue::Integer(2)));
    assert_eq!(
        second.get("link_href"),
        Some(&FieldValue::from(format!("{}/blog/posts/async-fetching", server.uri())))
    );
    assert_eq!(result.summary.avg_votes, None);
}

#[tokio::test]
async fn test_missing_field_is_empty_and_absolute_link_kept() {
    let server = MockServer::start().await;
    mount_page(&server, "/blog/", fixture("blog.html")).await;

    let result = scraper()
        .scrape(&ScrapeRequest::Generic {
            url: format!("{}/blog/", server.uri()),
            selectors: blog_selectors(),
            max_items: 50,
        })
        .await
        .expect("scrape succeeds");

    let third = &result.records[2];
    assert_eq!(third.get("index"), Some(&FieldValue::Integer(3)));
    assert_eq!(third.get("summary"), Some(&FieldValue::from("")));
    assert_eq!(
        third.get("link_href"),
        Some(&FieldValue::from("https://elsewhere.example.org/csv"))
    );
}

#[tokio::test]
async fn test_request_built_from_json_params() {
    let server = MockServer::start().await;
    mount_page(&server, "/blog/", fixture("blog.html")).await;

    let params: ScrapeParams = serde_json::from_str(&format!(
        r#"{{
            "scrape_type": "generic",
            "url": "{}/blog/",
            "css_selectors": {{"title": "h2", "container": "article"}},
            "max_items": "1"
        }}"#,
        server.uri()
    ))
    .expect("valid params");
    let request = params.into_request().expect("valid request");

    let result = scraper().scrape(&request).await.expect("scrape succeeds");
    assert_eq!(result.columns, vec!["index", "title", "scraped_at"]);
    assert_eq!(result.records.len(), 1);
}

#[tokio::test]
async fn test_upstream_error_status_fails_the_scrape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/gone", server.uri());
    let err = scraper()
        .scrape(&ScrapeRequest::Generic {
            url: url.clone(),
            selectors: blog_selectors(),
            max_items: 50,
        })
        .await
        .expect_err("404 fails the scrape");

    assert!(matches!(
        err,
        ScrapeError::Fetch(FetchError::Status { status: 404, .. })
    ));
    assert!(err.to_string().contains(&url));
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(fixture("blog.html"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let err = scraper()
        .scrape(&ScrapeRequest::Generic {
            url: server.uri(),
            selectors: blog_selectors(),
            max_items: 50,
        })
        .await
        .expect_err("slow page times out");

    assert!(matches!(err, ScrapeError::Fetch(FetchError::Timeout { .. })));
}
