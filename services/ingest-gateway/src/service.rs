use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header, HeaderMap},
};
use chrono::Utc;
use http_body_util::LengthLimitError;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::models::{EventEnvelope, IngestRequest, RawEvent};
use crate::publisher::EventPublisher;

const BEARER_PREFIX: &str = "Bearer ";

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
}

/// Exact match against the shared secret. No per-caller state is kept.
///
/// The `Bearer ` prefix is mandatory: a header carrying the bare secret is
/// rejected, which is stricter than trimming an optional prefix.
pub fn authorize(headers: &HeaderMap, api_key: &str) -> Result<(), ApiError> {
    match bearer_token(headers) {
        Some(token) if token == api_key => Ok(()),
        Some(_) => {
            warn!("rejected request: bearer token mismatch");
            Err(ApiError::Unauthorized)
        }
        None => {
            warn!("rejected request: missing bearer token");
            Err(ApiError::Unauthorized)
        }
    }
}

/// Buffers the body up to `limit` bytes. Call only after `authorize`.
pub async fn read_body(body: Body, limit: usize) -> Result<Bytes, ApiError> {
    to_bytes(body, limit).await.map_err(|err| {
        let err = err.into_inner();
        if err.downcast_ref::<LengthLimitError>().is_some() {
            debug!(limit, "ingest body over limit");
            ApiError::PayloadTooLarge
        } else {
            debug!(error = %err, "ingest body read failed");
            ApiError::InvalidJson
        }
    })
}

/// Expects `{"data": [ {..}, .. ]}`; other top-level fields are ignored.
pub fn decode_batch(body: &[u8]) -> Result<IngestRequest, ApiError> {
    serde_json::from_slice(body).map_err(|err| {
        debug!(error = %err, "undecodable ingest body");
        ApiError::InvalidJson
    })
}

/// Stamps each event and hands it to the publisher in input order.
///
/// Returns the number of messages submitted. The publishes are detached:
/// nothing here waits for broker acknowledgement and a failed publish
/// never reaches the caller. This is a known delivery gap; failures are
/// only visible in the logs.
pub fn submit_events(publisher: &Arc<dyn EventPublisher>, events: Vec<RawEvent>) -> usize {
    let mut submitted = 0;
    for event in events {
        let envelope = EventEnvelope::stamp(event, Utc::now());
        let data = match serde_json::to_vec(&envelope) {
            Ok(data) => data,
            Err(err) => {
                warn!(error = %err, "envelope serialization failed");
                continue;
            }
        };

        let publisher = Arc::clone(publisher);
        tokio::spawn(async move {
            if let Err(err) = publisher.publish(data).await {
                warn!(error = %err, "event publish failed");
            }
        });
        submitted += 1;
    }
    submitted
}
