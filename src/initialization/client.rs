//! HTTP client initialization.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the shared HTTP client.
///
/// Creates a `reqwest::Client` configured with the User-Agent from the
/// configuration. Timeouts are applied per request because Hacker News pages
/// and generic pages have different deadlines.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_default_config() {
        let client = init_client(&Config::default());
        assert!(client.is_ok());
    }
}
