use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single client event, kept as an opaque JSON object.
pub type RawEvent = Map<String, Value>;

#[derive(Deserialize)]
pub struct IngestRequest {
    pub data: Vec<RawEvent>,
}

/// What gets published for every accepted event.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct EventEnvelope {
    pub ingested_at: String,
    pub payload: RawEvent,
}

impl EventEnvelope {
    pub fn stamp(payload: RawEvent, at: DateTime<Utc>) -> Self {
        Self {
            ingested_at: format_timestamp(at),
            payload,
        }
    }
}

#[derive(Serialize)]
pub struct IngestResponse {
    pub status: &'static str,
}

/// RFC 3339, UTC, whole seconds, `Z` suffix.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
