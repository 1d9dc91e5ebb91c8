use crate::errors::AppError;
use crate::handlers::AppState;
use crate::payload;
use crate::signature;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use serde_json::Value;
use std::sync::Arc;

/// LinkedIn Lead Sync webhook handler.
///
/// Receives lead capture notifications pushed by LinkedIn, authenticates them
/// against the shared app secret, and extracts common fields from the payload.
///
/// Expected payload: arbitrary JSON object (LinkedIn does not publish a fixed
/// schema, so extraction is best-effort)
/// Authentication: X-LI-Signature header must carry the base64 HMAC-SHA256 of
/// the raw body, keyed with LINKEDIN_APP_SECRET
pub async fn capture_lead(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let event_type = headers
        .get("X-LI-Event-Type")
        .and_then(|v| v.to_str().ok());

    // 1. Validate signature (if a secret is configured)
    if let Some(secret) = state.config.webhook_secret.as_deref() {
        let signature_header = headers
            .get("X-LI-Signature")
            .and_then(|v| v.to_str().ok())
            .filter(|s| !s.trim().is_empty());

        let Some(signature_header) = signature_header else {
            tracing::warn!("LinkedIn webhook missing signature header");
            return Err(AppError::Unauthorized("Missing signature".to_string()));
        };

        if !signature::verify(&body, Some(signature_header), secret) {
            tracing::warn!(
                "Invalid LinkedIn signature. event_type={:?}, body_prefix={}...",
                event_type,
                body_prefix(&body)
            );
            return Err(AppError::Unauthorized("Invalid signature".to_string()));
        }
    } else {
        tracing::warn!(
            "LINKEDIN_APP_SECRET not configured; skipping signature validation \
             (NOT recommended for production)"
        );
    }

    // 2. Parse body as a JSON object
    let parsed: Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!("Invalid JSON payload from LinkedIn: {}", e);
        AppError::BadRequest("Invalid JSON".to_string())
    })?;
    if !parsed.is_object() {
        tracing::warn!("LinkedIn webhook payload is not a JSON object");
        return Err(AppError::BadRequest("Invalid JSON".to_string()));
    }

    // 3. Extract a few common fields if present (best-effort)
    let lead_id = payload::find_first(&parsed, "leadId");
    let form_id = payload::find_first(&parsed, "formId");
    let created_at = payload::find_first(&parsed, "createdAt");
    tracing::info!(
        "Received LinkedIn lead: lead_id={:?}, form_id={:?}, created_at={:?}, event_type={:?}",
        lead_id,
        form_id,
        created_at,
        event_type
    );
    tracing::debug!("Full payload: {}", parsed);

    // TODO: persist the lead to a queue/datastore for processing

    // 4. Acknowledge immediately; nothing else happens in-band
    Ok(StatusCode::ACCEPTED)
}

/// Short, newline-stripped prefix of the raw body for diagnostics.
/// Never log the full body or the secret.
fn body_prefix(body: &[u8]) -> String {
    String::from_utf8_lossy(body)
        .chars()
        .take(16)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_prefix_caps_at_16_chars() {
        let body = b"0123456789abcdefEXTRA";
        assert_eq!(body_prefix(body), "0123456789abcdef");
    }

    #[test]
    fn test_body_prefix_strips_newlines() {
        let body = b"ab\ncd\nef";
        assert_eq!(body_prefix(body), "ab cd ef");
    }

    #[test]
    fn test_body_prefix_handles_short_and_empty_bodies() {
        assert_eq!(body_prefix(b"hi"), "hi");
        assert_eq!(body_prefix(b""), "");
    }
}
