use std::sync::Arc;

use crate::publisher::EventPublisher;

#[derive(Clone)]
pub struct AppState {
    pub api_key: Arc<str>,
    pub publisher: Arc<dyn EventPublisher>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(
        api_key: impl Into<Arc<str>>,
        publisher: Arc<dyn EventPublisher>,
        max_body_bytes: usize,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            publisher,
            max_body_bytes,
        }
    }
}
