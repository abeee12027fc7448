//! Scribe Server
//!
//! HTTP surface of the document-store / generator bridge. Wires the
//! configured collaborators into a `ContentPipeline` and serves the
//! processing endpoint with axum.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ServerConfig;
use handlers::{create_router, AppState};
use scribe_llm::OpenAiGenerator;
use scribe_pipeline::ContentPipeline;
use scribe_store::NotionStore;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the bridge HTTP server
///
/// Validates configuration (credentials must be present — the pipeline is
/// unreachable otherwise), builds the store and generator clients, and
/// serves until shutdown.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    config.validate()?;

    info!("Starting Scribe server");
    info!("Bind address: {}", config.bind_addr());
    info!("Store endpoint: {}", config.store.endpoint);
    info!("Generator model: {}", config.generator.model);

    let store = Arc::new(NotionStore::with_endpoint(
        &config.store.endpoint,
        &config.store.token,
    ));

    let generator = Arc::new(
        OpenAiGenerator::with_endpoint(&config.generator.endpoint, &config.generator.api_key)
            .with_model(&config.generator.model),
    );

    let pipeline = Arc::new(ContentPipeline::new(
        store,
        generator,
        config.pipeline.clone(),
    ));

    let state = AppState { pipeline };
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
