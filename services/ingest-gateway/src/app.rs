use axum::{
    http::{header, HeaderValue},
    routing::{get, options, MethodRouter},
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::handlers::{healthz, ingest, preflight, readyz};
use crate::state::AppState;

/// `OPTIONS` is the preflight; every other method ingests.
fn ingest_route() -> MethodRouter<AppState> {
    options(preflight).fallback(ingest)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/", ingest_route())
        .route("/v1/events", ingest_route())
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .with_state(state)
}
