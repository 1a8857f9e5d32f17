// Role lookup result
// Outcome of resolving a Roblox player to a Discord member and guild roles

use serde::Serialize;

use crate::entities::GuildRole;
use crate::value_objects::LinkSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnverifiedReason {
    /// Neither the guild-scoped nor the global lookup produced an identity.
    NoLink(LinkSource),
    /// Linked, but Discord does not know the user as a member of the guild.
    NotInGuild,
    /// Linked, but the member fetch failed; carries the HTTP status if any.
    DiscordApiError(Option<u16>),
}

impl UnverifiedReason {
    pub fn code(&self) -> String {
        match self {
            UnverifiedReason::NoLink(source) => format!("no_link_{}", source),
            UnverifiedReason::NotInGuild => "not_in_guild".to_string(),
            UnverifiedReason::DiscordApiError(Some(status)) => {
                format!("discord_api_error_{}", status)
            }
            UnverifiedReason::DiscordApiError(None) => "discord_api_error_unknown".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberInfo {
    pub nick: Option<String>,
    pub joined_at: Option<String>,
    pub total_roles: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleLookup {
    Verified {
        discord_id: String,
        roles: Vec<GuildRole>,
        source: LinkSource,
        member_info: MemberInfo,
    },
    Unverified {
        reason: UnverifiedReason,
        discord_id: Option<String>,
        source: Option<LinkSource>,
        error: Option<String>,
    },
}

impl RoleLookup {
    pub fn is_verified(&self) -> bool {
        matches!(self, RoleLookup::Verified { .. })
    }

    pub fn role_names(&self) -> Vec<&str> {
        match self {
            RoleLookup::Verified { roles, .. } => roles.iter().map(|r| r.name.as_str()).collect(),
            RoleLookup::Unverified { .. } => Vec::new(),
        }
    }

    /// Roles line shown in join/left notifications.
    pub fn roles_text(&self) -> String {
        let names = self.role_names();
        if !names.is_empty() {
            names.join(", ")
        } else if self.is_verified() {
            "(no roles)".to_string()
        } else {
            "unverified".to_string()
        }
    }
}
