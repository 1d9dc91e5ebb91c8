use crate::reaction_models::ReactionRequest;
use std::fmt;

/// Error returned for any failed call to the LinkedIn REST API.
///
/// Exactly one error type surfaces to callers regardless of whether the
/// failure was a provider rejection (status + body populated) or a transport
/// problem (source populated).
#[derive(Debug)]
pub struct LinkedInApiError {
    /// Provider HTTP status, when LinkedIn answered at all.
    pub status: Option<u16>,
    /// Provider response body, when LinkedIn answered at all.
    pub body: Option<String>,
    message: String,
    source: Option<reqwest::Error>,
}

impl LinkedInApiError {
    fn provider(status: u16, body: String) -> Self {
        Self {
            status: Some(status),
            message: format!("LinkedIn returned status: {} body={}", status, body),
            body: Some(body),
            source: None,
        }
    }

    fn transport(err: reqwest::Error) -> Self {
        Self {
            status: None,
            body: None,
            message: format!("Error calling LinkedIn API: {}", err),
            source: Some(err),
        }
    }
}

impl fmt::Display for LinkedInApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for LinkedInApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Client for the LinkedIn Reactions API.
#[derive(Clone)]
pub struct LinkedInApiClient {
    client: reqwest::Client,
    base_url: String,
    api_version: String,
}

impl LinkedInApiClient {
    /// Creates a new `LinkedInApiClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the LinkedIn REST API.
    /// * `api_version` - The `LinkedIn-Version` header value, e.g. "202405".
    pub fn new(base_url: String, api_version: String) -> Self {
        // Transport defaults only: no timeout override, no retry. A caller
        // wanting resilience wraps this client.
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_version,
        }
    }

    /// Creates a reaction on behalf of the token holder.
    ///
    /// Any 2xx from LinkedIn is success. Everything else, including transport
    /// failures, comes back as a single `LinkedInApiError`.
    pub async fn create_reaction(
        &self,
        access_token: &str,
        request: &ReactionRequest,
    ) -> Result<(), LinkedInApiError> {
        let url = format!("{}/rest/reactions?action=create", self.base_url);
        tracing::info!(
            "Creating {} reaction on {} via LinkedIn API",
            request.reaction_type,
            request.object
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(access_token)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("LinkedIn-Version", &self.api_version)
            .header("X-Restli-Protocol-Version", "2.0.0")
            .json(request)
            .send()
            .await
            .map_err(LinkedInApiError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(
                "LinkedIn API error: status={} body={}",
                status,
                error_text
            );
            return Err(LinkedInApiError::provider(status.as_u16(), error_text));
        }

        tracing::info!("✓ Reaction created successfully on {}", request.object);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_carries_status_and_body() {
        let err = LinkedInApiError::provider(429, r#"{"message":"rate limited"}"#.to_string());
        assert_eq!(err.status, Some(429));
        assert_eq!(err.body.as_deref(), Some(r#"{"message":"rate limited"}"#));
        let message = err.to_string();
        assert!(message.contains("429"));
        assert!(message.contains("rate limited"));
    }

    #[test]
    fn test_provider_error_has_no_source() {
        use std::error::Error;
        let err = LinkedInApiError::provider(500, "oops".to_string());
        assert!(err.source().is_none());
    }
}
