use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use gateway_common::EnvError;

use crate::publisher::PublisherError;

/// Request failures; each maps to a fixed status and plain-text body.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Invalid JSON")]
    InvalidJson,
    #[error("Payload Too Large")]
    PayloadTooLarge,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::InvalidJson => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

/// Anything that keeps the gateway from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] EnvError),
    #[error("publisher: {0}")]
    Publisher(#[from] PublisherError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
