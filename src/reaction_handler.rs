use crate::errors::AppError;
use crate::handlers::AppState;
use crate::reaction_models::{ReactionBody, ReactionRequest, ReactionResponse};
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

/// Reaction endpoint handler.
///
/// Flow:
/// 1. Resolve access token: X-LinkedIn-Access-Token header, else configured
///    default.
/// 2. Resolve `object` (target URN) from the body.
/// 3. Resolve `actor` from the body, else configured default.
/// 4. Resolve `reactionType`, defaulting to LIKE.
/// 5. Call the LinkedIn Reactions API; provider failures surface as 502.
pub async fn react(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<ReactionBody>,
) -> Result<(StatusCode, Json<ReactionResponse>), AppError> {
    // Step 1: Token - header override wins, configured default is the fallback
    let header_token = headers
        .get("X-LinkedIn-Access-Token")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let token = header_token
        .or_else(|| state.config.default_access_token.clone())
        .ok_or_else(|| {
            AppError::Unauthorized("Missing LinkedIn access token".to_string())
        })?;

    // Step 2: Target URN is mandatory
    let object = body
        .object
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::BadRequest("Field 'object' (post URN) is required".to_string())
        })?;

    // Step 3: Actor falls back to the configured default
    let actor = body
        .actor
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| state.config.default_actor_urn.clone())
        .ok_or_else(|| {
            AppError::BadRequest(
                "Field 'actor' (person URN) is required when LINKEDIN_ACTOR_URN is not configured"
                    .to_string(),
            )
        })?;

    // Step 4: Reaction type defaults to LIKE
    let reaction_type = body
        .reaction_type
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    // Step 5: Build the outbound request and call LinkedIn
    let request = ReactionRequest::new(actor, object, reaction_type);
    let reaction_type = request.reaction_type.clone();

    state.api_client.create_reaction(&token, &request).await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(ReactionResponse {
            status: "accepted".to_string(),
            reaction_type,
        }),
    ))
}
