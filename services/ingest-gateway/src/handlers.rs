use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::info;

use crate::error::ApiError;
use crate::models::IngestResponse;
use crate::service;
use crate::state::AppState;

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

pub async fn readyz() -> StatusCode {
    StatusCode::OK
}

/// CORS preflight. Never authenticated.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Authorization, Content-Type"),
        ],
    )
}

pub async fn ingest(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Body,
) -> Result<Json<IngestResponse>, ApiError> {
    // The token is checked before a single body byte is read.
    service::authorize(&headers, &state.api_key)?;
    let body = service::read_body(body, state.max_body_bytes).await?;
    let request = service::decode_batch(&body)?;

    let received = request.data.len();
    let submitted = service::submit_events(&state.publisher, request.data);
    info!(events = received, submitted, "ingest batch accepted");

    Ok(Json(IngestResponse { status: "ok" }))
}
