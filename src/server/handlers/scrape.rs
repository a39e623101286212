//! Scrape handler for JSON API calls and form submissions.

use axum::{
    extract::{FromRequest, Request, State},
    http::{
        header::{CONTENT_TYPE, SET_COOKIE},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::{Html, IntoResponse, Response},
    Form, Json,
};

use super::super::session::{session_cookie, session_id_from_headers, SessionStore};
use super::super::types::{AppState, ErrorResponse, ScrapeResponse};
use super::super::view::render_index;
use crate::error_handling::{ScrapeError, ValidationError};
use crate::models::{ScrapeParams, ScrapeResult};

/// How the caller wants the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reply {
    Json,
    Html,
}

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim_start().starts_with("application/json"))
}

/// Runs a scrape and caches the result in the caller's session
pub async fn scrape_handler(State(state): State<AppState>, request: Request) -> Response {
    let session_id = session_id_from_headers(request.headers());
    let reply = if wants_json(request.headers()) {
        Reply::Json
    } else {
        Reply::Html
    };

    let params = read_params(request, reply).await;
    match run_scrape(&state, params).await {
        Ok(result) => respond_success(&state.sessions, session_id, result, reply).await,
        Err(e) => respond_error(&e, reply),
    }
}

async fn read_params(request: Request, reply: Reply) -> Result<ScrapeParams, ValidationError> {
    match reply {
        Reply::Json => Json::<ScrapeParams>::from_request(request, &())
            .await
            .map(|Json(params)| params)
            .map_err(|rejection| ValidationError::MalformedBody(rejection.body_text())),
        Reply::Html => Form::<Vec<(String, String)>>::from_request(request, &())
            .await
            .map(|Form(fields)| ScrapeParams::from_form(&fields))
            .map_err(|rejection| ValidationError::MalformedBody(rejection.body_text())),
    }
}

async fn run_scrape(
    state: &AppState,
    params: Result<ScrapeParams, ValidationError>,
) -> Result<ScrapeResult, ScrapeError> {
    let request = params?.into_request()?;
    log::info!("Scrape requested: {:?}", request);
    state.scraper.scrape(&request).await
}

async fn respond_success(
    sessions: &SessionStore,
    session_id: Option<String>,
    result: ScrapeResult,
    reply: Reply,
) -> Response {
    let mut response = match reply {
        Reply::Json => (StatusCode::OK, Json(ScrapeResponse::from(&result))).into_response(),
        Reply::Html => (StatusCode::OK, Html(render_index(Some(&result), None))).into_response(),
    };

    let session_id = match session_id {
        Some(id) => id,
        None => {
            let id = SessionStore::new_session_id();
            if let Ok(cookie) = HeaderValue::from_str(&session_cookie(&id)) {
                response.headers_mut().insert(SET_COOKIE, cookie);
            }
            id
        }
    };
    sessions.store(&session_id, result).await;

    response
}

fn respond_error(error: &ScrapeError, reply: Reply) -> Response {
    let status = match error {
        ScrapeError::Validation(e) => {
            log::warn!("Rejected scrape request: {e}");
            StatusCode::BAD_REQUEST
        }
        ScrapeError::Fetch(e) => {
            log::error!("Scrape failed ({}): {error}", e.kind());
            StatusCode::BAD_GATEWAY
        }
    };

    match reply {
        Reply::Json => (status, Json(ErrorResponse::new(error))).into_response(),
        Reply::Html => (status, Html(render_index(None, Some(&error.to_string())))).into_response(),
    }
}
