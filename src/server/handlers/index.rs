//! Form page handler.

use axum::{extract::State, http::HeaderMap, response::Html};

use super::super::session::session_id_from_headers;
use super::super::types::AppState;
use super::super::view::render_index;

/// Input form, plus the caller's cached results if there are any
pub async fn index_handler(State(state): State<AppState>, headers: HeaderMap) -> Html<String> {
    let cached = match session_id_from_headers(&headers) {
        Some(id) => state.sessions.get(&id).await,
        None => None,
    };
    Html(render_index(cached.as_deref(), None))
}
