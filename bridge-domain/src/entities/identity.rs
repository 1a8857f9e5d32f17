// Identity link entity
// Roblox user id mapped to a Discord user id for one request

use serde::Serialize;

use crate::value_objects::LinkSource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityLink {
    pub roblox_id: String,
    pub discord_id: Option<String>,
    pub source: LinkSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_details: Option<String>,
}

impl IdentityLink {
    pub fn found(roblox_id: &str, discord_id: String, source: LinkSource) -> Self {
        Self {
            roblox_id: roblox_id.to_string(),
            discord_id: Some(discord_id),
            source,
            error: None,
            error_details: None,
        }
    }

    pub fn missing(
        roblox_id: &str,
        source: LinkSource,
        error: impl Into<String>,
        error_details: Option<String>,
    ) -> Self {
        Self {
            roblox_id: roblox_id.to_string(),
            discord_id: None,
            source,
            error: Some(error.into()),
            error_details,
        }
    }
}
