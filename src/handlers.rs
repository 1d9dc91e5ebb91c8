use crate::config::Config;
use crate::linkedin_client::LinkedInApiClient;
use crate::{reaction_handler, webhook_handler};
use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
/// Read-only after startup; handlers hold no other cross-request state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Client for the LinkedIn REST API.
    pub api_client: LinkedInApiClient,
}

/// Health check endpoint.
///
/// Returns the service status, version, and health information.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "rust-linkedin-api",
            "version": "0.1.0"
        })),
    )
}

/// Builds the application router. Kept separate from `main` so integration
/// tests can drive the real routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        // Inbound lead capture webhook from LinkedIn
        .route("/api/leads/linkedin", post(webhook_handler::capture_lead))
        // Outbound reaction on behalf of a caller
        .route("/api/linkedin/likes", post(reaction_handler::react))
        .with_state(state)
}
