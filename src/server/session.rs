//! Per-client cache of the last scrape result.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use tokio::sync::Mutex;

use crate::config::SESSION_COOKIE_NAME;
use crate::models::ScrapeResult;

struct SessionEntry {
    result: Arc<ScrapeResult>,
    stored_at: Instant,
}

/// One result slot per session id.
///
/// Storing overwrites the slot. Entries older than the TTL are invisible and
/// are purged on the next store.
pub struct SessionStore {
    entries: Mutex<HashMap<String, SessionEntry>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        SessionStore {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Creates a fresh random session id (32 hex characters).
    pub fn new_session_id() -> String {
        format!("{:032x}", rand::random::<u128>())
    }

    /// Replaces the session's cached result.
    pub async fn store(&self, session_id: &str, result: ScrapeResult) {
        let mut entries = self.entries.lock().await;
        let now = Instant::now();

        // Remove expired sessions
        entries.retain(|_, entry| now.duration_since(entry.stored_at) <= self.ttl);

        entries.insert(
            session_id.to_string(),
            SessionEntry {
                result: Arc::new(result),
                stored_at: now,
            },
        );
    }

    /// The session's cached result, if any and not expired.
    pub async fn get(&self, session_id: &str) -> Option<Arc<ScrapeResult>> {
        let entries = self.entries.lock().await;
        let now = Instant::now();

        entries
            .get(session_id)
            .filter(|entry| now.duration_since(entry.stored_at) <= self.ttl)
            .map(|entry| Arc::clone(&entry.result))
    }

    /// Number of slots currently held, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }
}

/// Reads the session id from the request's `Cookie` headers.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE_NAME && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

/// `Set-Cookie` value binding the client to `session_id`.
pub fn session_cookie(session_id: &str) -> String {
    format!("{SESSION_COOKIE_NAME}={session_id}; Path=/; HttpOnly; SameSite=Lax")
}
