/// Integration tests for the reaction endpoint with a mocked LinkedIn API.
/// Drives the real router end to end without hitting the real provider.
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rust_linkedin_api::config::Config;
use rust_linkedin_api::handlers::{build_router, AppState};
use rust_linkedin_api::linkedin_client::LinkedInApiClient;
use rust_linkedin_api::reaction_models::ReactionResponse;

/// Helper function to create test config
fn create_test_config(linkedin_base_url: String) -> Config {
    Config {
        port: 8080,
        linkedin_base_url,
        linkedin_api_version: "202405".to_string(),
        webhook_secret: None,
        default_access_token: None,
        default_actor_urn: Some("urn:li:person:TEST_ACTOR".to_string()),
    }
}

fn test_app(config: Config) -> axum::Router {
    let api_client = LinkedInApiClient::new(
        config.linkedin_base_url.clone(),
        config.linkedin_api_version.clone(),
    );
    build_router(Arc::new(AppState { config, api_client }))
}

fn reaction_request(token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/linkedin/likes")
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("X-LinkedIn-Access-Token", token);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_accepts_like_with_default_actor_and_reaction_type() {
    let mock_server = MockServer::start().await;

    // The outbound call must carry the configured defaults and all the
    // provider's required headers
    Mock::given(method("POST"))
        .and(path("/rest/reactions"))
        .and(query_param("action", "create"))
        .and(header("Authorization", "Bearer token-123"))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "application/json"))
        .and(header("LinkedIn-Version", "202405"))
        .and(header("X-Restli-Protocol-Version", "2.0.0"))
        .and(body_json(serde_json::json!({
            "actor": "urn:li:person:TEST_ACTOR",
            "object": "urn:li:ugcPost:123",
            "reactionType": "LIKE"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = test_app(create_test_config(mock_server.uri()));
    let response = app
        .oneshot(reaction_request(
            Some("token-123"),
            r#"{"object":"urn:li:ugcPost:123"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let body: ReactionResponse = serde_json::from_value(response_json(response).await).unwrap();
    assert_eq!(body.status, "accepted");
    assert_eq!(body.reaction_type, "LIKE");
}

#[tokio::test]
async fn test_explicit_actor_and_reaction_type_override_defaults() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/reactions"))
        .and(body_json(serde_json::json!({
            "actor": "urn:li:person:EXPLICIT",
            "object": "urn:li:activity:987",
            "reactionType": "CELEBRATE"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = test_app(create_test_config(mock_server.uri()));
    let response = app
        .oneshot(reaction_request(
            Some("token-123"),
            r#"{"object":"urn:li:activity:987","actor":"urn:li:person:EXPLICIT","reactionType":"CELEBRATE"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let body: ReactionResponse = serde_json::from_value(response_json(response).await).unwrap();
    assert_eq!(body.reaction_type, "CELEBRATE");
}

#[tokio::test]
async fn test_missing_object_returns_400_without_calling_linkedin() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let app = test_app(create_test_config(mock_server.uri()));
    let response = app
        .oneshot(reaction_request(
            Some("token-123"),
            r#"{"reactionType":"LIKE"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("object"));
}

#[tokio::test]
async fn test_blank_object_returns_400() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let app = test_app(create_test_config(mock_server.uri()));
    let response = app
        .oneshot(reaction_request(Some("token-123"), r#"{"object":"   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_actor_with_no_default_returns_400() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(mock_server.uri());
    config.default_actor_urn = None;

    let app = test_app(config);
    let response = app
        .oneshot(reaction_request(
            Some("token-123"),
            r#"{"object":"urn:li:ugcPost:123"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    // Distinct message from the missing-object case
    assert!(body["error"].as_str().unwrap().contains("actor"));
}

#[tokio::test]
async fn test_missing_token_with_no_default_returns_401() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let app = test_app(create_test_config(mock_server.uri()));
    let response = app
        .oneshot(reaction_request(None, r#"{"object":"urn:li:ugcPost:123"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_configured_default_token_is_used() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/reactions"))
        .and(header("Authorization", "Bearer default-token"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(mock_server.uri());
    config.default_access_token = Some("default-token".to_string());

    let app = test_app(config);
    let response = app
        .oneshot(reaction_request(None, r#"{"object":"urn:li:ugcPost:123"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn test_provider_rejection_maps_to_502_with_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/reactions"))
        .respond_with(
            ResponseTemplate::new(429).set_body_string(r#"{"message":"rate limited"}"#),
        )
        .mount(&mock_server)
        .await;

    let app = test_app(create_test_config(mock_server.uri()));
    let response = app
        .oneshot(reaction_request(
            Some("token-123"),
            r#"{"object":"urn:li:ugcPost:123"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = response_json(response).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("429"));
    assert!(message.contains("rate limited"));
}

#[tokio::test]
async fn test_provider_5xx_maps_to_502() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/reactions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&mock_server)
        .await;

    let app = test_app(create_test_config(mock_server.uri()));
    let response = app
        .oneshot(reaction_request(
            Some("token-123"),
            r#"{"object":"urn:li:ugcPost:123"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = response_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = test_app(create_test_config("https://api.linkedin.com".to_string()));
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "rust-linkedin-api");
}
