// Response bodies shaped for the game server and operators

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use bridge_domain::{
    GuildRole, IdentityLink, LinkSource, MemberInfo, NotificationFormat, RoleLookup, UpstreamError,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleLookupResponse {
    pub verified: bool,
    pub discord_id: Option<String>,
    pub roles: Vec<GuildRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<LinkSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_info: Option<MemberInfo>,
}

impl From<RoleLookup> for RoleLookupResponse {
    fn from(lookup: RoleLookup) -> Self {
        match lookup {
            RoleLookup::Verified {
                discord_id,
                roles,
                source,
                member_info,
            } => Self {
                verified: true,
                discord_id: Some(discord_id),
                roles,
                reason: None,
                error: None,
                source: Some(source),
                member_info: Some(member_info),
            },
            RoleLookup::Unverified {
                reason,
                discord_id,
                source,
                error,
            } => Self {
                verified: false,
                discord_id,
                roles: Vec::new(),
                reason: Some(reason.code()),
                error,
                source,
                member_info: None,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub ok: bool,
    pub logged: bool,
    #[serde(rename = "as")]
    pub format: NotificationFormat,
    pub delivered: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    /// Unix seconds.
    pub timestamp: i64,
}

/// One upstream call as seen by the diagnostics endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamProbe {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_shape: Option<&'static str>,
}

impl UpstreamProbe {
    pub fn from_result(result: &Result<Value, UpstreamError>) -> Self {
        match result {
            Ok(body) => Self {
                ok: true,
                status: None,
                body: Some(body.clone()),
                error: None,
                matched_shape: None,
            },
            Err(UpstreamError::Status { status, body }) => Self {
                ok: false,
                status: Some(*status),
                body: Some(
                    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.clone())),
                ),
                error: Some(format!("HTTP {}", status)),
                matched_shape: None,
            },
            Err(UpstreamError::Transport(message)) => Self {
                ok: false,
                status: None,
                body: None,
                error: Some(message.clone()),
                matched_shape: None,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigReport {
    pub keys: BTreeMap<&'static str, bool>,
    pub secret_header: String,
    pub notification_format: NotificationFormat,
    pub discord_api_base: String,
    pub bloxlink_api_base: String,
    pub timestamp: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscordReport {
    pub bot_user: UpstreamProbe,
    pub guild: UpstreamProbe,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BloxlinkReport {
    pub roblox_id: String,
    pub guild: UpstreamProbe,
    pub global: UpstreamProbe,
    pub resolved: IdentityLink,
}
