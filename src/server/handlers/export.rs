//! Export download handler.

use axum::{
    extract::{Path, State},
    http::{
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
        HeaderMap, StatusCode,
    },
    response::{Html, IntoResponse, Response},
};

use super::super::session::session_id_from_headers;
use super::super::types::AppState;
use super::super::view::render_error_page;
use crate::error_handling::ExportError;
use crate::export::{export, parse_format, ExportFile};

/// Sends the session's cached result as a CSV or JSON attachment
pub async fn export_handler(
    State(state): State<AppState>,
    Path(format): Path<String>,
    headers: HeaderMap,
) -> Response {
    match export_for_session(&state, &format, &headers).await {
        Ok(file) => (
            StatusCode::OK,
            [
                (CONTENT_TYPE, file.content_type.to_string()),
                (
                    CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", file.file_name),
                ),
            ],
            file.body,
        )
            .into_response(),
        Err(e) => {
            let status = match e {
                ExportError::NoResults => StatusCode::NOT_FOUND,
                ExportError::UnsupportedFormat(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            log::warn!("Export failed: {e}");
            (status, Html(render_error_page(&e.to_string()))).into_response()
        }
    }
}

async fn export_for_session(
    state: &AppState,
    format: &str,
    headers: &HeaderMap,
) -> Result<ExportFile, ExportError> {
    let session_id = session_id_from_headers(headers).ok_or(ExportError::NoResults)?;
    let result = state
        .sessions
        .get(&session_id)
        .await
        .ok_or(ExportError::NoResults)?;

    let format = parse_format(format)?;
    export(&result, format, &chrono::Local::now())
}
