mod config;
mod errors;
mod handlers;
mod linkedin_client;
mod payload;
mod reaction_handler;
mod reaction_models;
mod signature;
mod webhook_handler;

use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::handlers::AppState;
use crate::linkedin_client::LinkedInApiClient;

/// Main entry point for the application.
///
/// Initializes logging and tracing, loads configuration, constructs the
/// LinkedIn API client, and starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_linkedin_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize LinkedIn API client
    let api_client = LinkedInApiClient::new(
        config.linkedin_base_url.clone(),
        config.linkedin_api_version.clone(),
    );
    tracing::info!(
        "✓ LinkedIn API client initialized: {} (version {})",
        config.linkedin_base_url,
        config.linkedin_api_version
    );

    // Build application state
    let app_state = Arc::new(AppState {
        config: config.clone(),
        api_client,
    });

    let app = handlers::build_router(app_state)
        .layer(
            // Request size limit: 1MB max payload (lead payloads are small)
            ServiceBuilder::new().layer(RequestBodyLimitLayer::new(1024 * 1024)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
