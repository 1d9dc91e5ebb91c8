use serde::{Deserialize, Serialize};

/// Reaction kind applied when the caller does not supply one.
pub const DEFAULT_REACTION_TYPE: &str = "LIKE";

/// Payload for creating a reaction (like, celebrate, etc) via the LinkedIn
/// Reactions API. Fields must be valid URNs, e.g.
/// actor = "urn:li:person:XXXXXXXX",
/// object = "urn:li:ugcPost:YYYYYYYY" or "urn:li:activity:ZZZZZZZZ".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionRequest {
    /// URN of the member reacting.
    pub actor: String,
    /// URN of the post/activity/comment being reacted to.
    pub object: String,
    /// LIKE, CELEBRATE, SUPPORT, LOVE, INSIGHTFUL, CURIOUS
    pub reaction_type: String,
}

impl ReactionRequest {
    pub fn new(actor: String, object: String, reaction_type: Option<String>) -> Self {
        Self {
            actor,
            object,
            reaction_type: reaction_type.unwrap_or_else(|| DEFAULT_REACTION_TYPE.to_string()),
        }
    }
}

/// Inbound body for POST /api/linkedin/likes.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionBody {
    #[serde(default)]
    pub object: Option<String>,

    #[serde(default)]
    pub actor: Option<String>,

    #[serde(default)]
    pub reaction_type: Option<String>,
}

/// Response echoed back once the reaction was accepted by LinkedIn.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionResponse {
    pub status: String,
    pub reaction_type: String,
}
