use async_trait::async_trait;
use google_cloud_googleapis::pubsub::v1::PubsubMessage;
use google_cloud_pubsub::{
    client::{Client, ClientConfig},
    publisher::Publisher,
};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum PublisherError {
    #[error("pubsub credentials unavailable: {0}")]
    Auth(String),
    #[error("pubsub client init failed: {0}")]
    Connect(String),
}

#[derive(Debug, thiserror::Error)]
#[error("publish to {topic} failed: {reason}")]
pub struct PublishError {
    pub topic: String,
    pub reason: String,
}

/// Sink for serialized envelopes. Implementations must tolerate
/// concurrent calls from many requests at once.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Resolves with the broker message id once the message is acknowledged.
    async fn publish(&self, data: Vec<u8>) -> Result<String, PublishError>;

    /// Flushes anything still queued. No publishes may follow.
    async fn shutdown(&self);
}

/// Google Cloud Pub/Sub publisher bound to one topic.
///
/// Batching and flushing happen on the client's background workers;
/// `PUBSUB_EMULATOR_HOST` is honoured by the client config.
pub struct PubSubPublisher {
    publisher: Publisher,
    topic: String,
}

impl PubSubPublisher {
    pub async fn connect(project_id: &str, topic_name: &str) -> Result<Self, PublisherError> {
        let mut config = ClientConfig::default()
            .with_auth()
            .await
            .map_err(|err| PublisherError::Auth(err.to_string()))?;
        // Credential discovery may fill in its own project; the configured one wins.
        config.project_id = Some(project_id.to_string());

        let client = Client::new(config)
            .await
            .map_err(|err| PublisherError::Connect(err.to_string()))?;
        let publisher = client.topic(topic_name).new_publisher(None);

        info!(project = %project_id, topic = %topic_name, "pubsub publisher ready");
        Ok(Self {
            publisher,
            topic: topic_name.to_string(),
        })
    }
}

#[async_trait]
impl EventPublisher for PubSubPublisher {
    async fn publish(&self, data: Vec<u8>) -> Result<String, PublishError> {
        let message = PubsubMessage {
            data,
            ..Default::default()
        };
        self.publisher
            .publish(message)
            .await
            .get()
            .await
            .map_err(|status| PublishError {
                topic: self.topic.clone(),
                reason: status.to_string(),
            })
    }

    async fn shutdown(&self) {
        // Clones share the worker channel, so closing one drains them all.
        let mut publisher = self.publisher.clone();
        publisher.shutdown().await;
        info!(topic = %self.topic, "pubsub publisher flushed");
    }
}
