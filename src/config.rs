use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub linkedin_base_url: String,
    pub linkedin_api_version: String,
    /// Shared secret for webhook signature verification.
    /// `None` disables verification entirely (startup logs a warning).
    pub webhook_secret: Option<String>,
    /// Fallback bearer token used when a request carries no token header.
    pub default_access_token: Option<String>,
    /// Fallback actor URN used when a request body carries no actor.
    pub default_actor_urn: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let linkedin_base_url = std::env::var("LINKEDIN_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.linkedin.com".to_string());
        if linkedin_base_url.trim().is_empty() {
            anyhow::bail!("LINKEDIN_API_BASE_URL cannot be empty");
        }
        if !linkedin_base_url.starts_with("http://") && !linkedin_base_url.starts_with("https://")
        {
            anyhow::bail!("LINKEDIN_API_BASE_URL must start with http:// or https://");
        }

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            linkedin_base_url,
            linkedin_api_version: std::env::var("LINKEDIN_API_VERSION")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "202405".to_string()),
            webhook_secret: std::env::var("LINKEDIN_APP_SECRET")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            default_access_token: std::env::var("LINKEDIN_ACCESS_TOKEN")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            default_actor_urn: std::env::var("LINKEDIN_ACTOR_URN")
                .ok()
                .filter(|s| !s.trim().is_empty()),
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("LinkedIn Base URL: {}", config.linkedin_base_url);
        tracing::debug!("LinkedIn API Version: {}", config.linkedin_api_version);
        tracing::debug!("Server Port: {}", config.port);
        if config.webhook_secret.is_none() {
            tracing::warn!(
                "LINKEDIN_APP_SECRET not set; webhook signature validation is disabled \
                 (NOT recommended for production)"
            );
        }
        if let Some(ref actor) = config.default_actor_urn {
            tracing::info!("Default actor URN configured: {}", actor);
        }

        Ok(config)
    }
}
