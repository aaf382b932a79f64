mod app;
mod config;
mod error;
mod handlers;
mod models;
mod publisher;
mod service;
mod state;

use std::{process::ExitCode, sync::Arc};

use gateway_common::{bind_listener, init_tracing, shutdown_signal};

use crate::config::GatewayConfig;
use crate::error::StartupError;
use crate::publisher::{EventPublisher, PubSubPublisher};
use crate::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    let _guards = init_tracing("ingest-gateway");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "ingest gateway stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = GatewayConfig::from_env()?;
    tracing::info!(?config, "configuration loaded");

    // A publisher that cannot be created is fatal; no partial service is offered.
    let publisher: Arc<dyn EventPublisher> =
        Arc::new(PubSubPublisher::connect(&config.project_id, &config.topic_name).await?);

    let state = AppState::new(
        config.api_key.as_str(),
        Arc::clone(&publisher),
        config.max_body_bytes,
    );
    let app = app::build_router(state);
    let listener = bind_listener(config.port).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    publisher.shutdown().await;
    Ok(())
}
