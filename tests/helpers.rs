// Shared test helpers: fixtures, mock upstream pages, an in-process server.
//
// Included by the integration test files with `mod helpers;`.

use std::path::PathBuf;

use tokio::net::TcpListener;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scrape_service::{build_router, AppState, Config};

/// Reads `tests/fixtures/<name>`.
#[allow(dead_code)] // Used by other test files
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Serves `hn_page1.html` at `/news` and `hn_page2.html` at `/news?p=2`.
#[allow(dead_code)]
pub async fn mount_hn_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/news"))
        .and(query_param_is_missing("p"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("hn_page1.html")))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/news"))
        .and(query_param("p", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture("hn_page2.html")))
        .mount(server)
        .await;
}

/// Serves `body` at `page_path`.
#[allow(dead_code)]
pub async fn mount_page(server: &MockServer, page_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Configuration pointing the Hacker News scraper at `hn_base_url` with short
/// timeouts.
#[allow(dead_code)]
pub fn test_config(hn_base_url: &str) -> Config {
    Config {
        hn_base_url: hn_base_url.to_string(),
        hn_timeout_secs: 2,
        generic_timeout_secs: 2,
        ..Config::default()
    }
}

/// Starts the router on an ephemeral port; returns its base URL.
#[allow(dead_code)]
pub async fn spawn_app(config: &Config) -> String {
    let state = AppState::from_config(config).expect("Failed to build app state");
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move { axum::serve(listener, build_router(state)).await });

    format!("http://{}", addr)
}
