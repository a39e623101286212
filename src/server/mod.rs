//! HTTP front end.
//!
//! Provides three endpoints:
//! - `/` - input form, with the caller's last results
//! - `/scrape` - runs a scrape (JSON API or form submission)
//! - `/export/{format}` - downloads the caller's last results as CSV or JSON

mod handlers;
mod session;
mod types;
mod view;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::config::Config;
use crate::error_handling::InitializationError;
use crate::fetch::HttpFetcher;
use crate::initialization::init_client;
use crate::scrape::{Scraper, ScraperSettings};
use handlers::{export_handler, index_handler, scrape_handler};

pub use session::SessionStore;
pub use types::AppState;

impl AppState {
    /// Builds the HTTP client, scraper and session store from `config`.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        let settings = ScraperSettings::from_config(config)?;
        let scraper = Scraper::new(Arc::new(HttpFetcher::new(client)), settings);

        Ok(AppState {
            scraper: Arc::new(scraper),
            sessions: Arc::new(SessionStore::new(config.session_ttl())),
        })
    }
}

/// Routes for all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/scrape", post(scrape_handler))
        .route("/export/{format}", get(export_handler))
        .with_state(state)
}

/// Creates and starts the server; runs until the listener fails
pub async fn start_server(config: &Config) -> Result<(), anyhow::Error> {
    let state = AppState::from_config(config)?;
    let app = build_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}: {}", address, e))?;

    log::info!("Scraper listening on http://{}/", address);
    log::info!("  - Form: http://{}/", address);
    log::info!("  - Export: http://{}/export/{{csv|json}}", address);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_default_config() {
        let state = AppState::from_config(&Config::default());
        assert!(state.is_ok());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = Config {
            hn_base_url: "not a url".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            AppState::from_config(&config),
            Err(InitializationError::BaseUrlError(_))
        ));
    }

    #[tokio::test]
    async fn test_bind_failure_is_an_error() {
        let taken = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let port = taken.local_addr().expect("local addr").port();
        let config = Config {
            port,
            ..Config::default()
        };

        let err = start_server(&config).await.expect_err("port in use");
        assert!(err.to_string().contains("Failed to bind server"));
    }
}
