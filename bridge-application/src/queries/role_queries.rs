use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use bridge_domain::ports::{DiscordApi, LinkingService};
use bridge_domain::{
    extract_discord_id, unknown_role_name, GuildRole, IdentityLink, LinkSource, LookupScope,
    MemberInfo, RoleLookup, UnverifiedReason, UpstreamError,
};

use crate::AppState;

/// Discord JSON error code for "Unknown Member".
const UNKNOWN_MEMBER_CODE: i64 = 10007;

/// Resolve a Roblox user to the guild member behind it and that member's roles.
///
/// Never fails: every upstream problem becomes an unverified result tagged
/// with the stage that broke.
pub async fn lookup_roles(state: &AppState, roblox_id: &str) -> RoleLookup {
    let lookup = resolve_roles(state, roblox_id).await;
    state.metrics.record_role_lookup(lookup.is_verified());
    lookup
}

async fn resolve_roles(state: &AppState, roblox_id: &str) -> RoleLookup {
    let link = resolve_link(state.linking.as_ref(), roblox_id).await;
    let Some(discord_id) = link.discord_id.clone() else {
        warn!(
            "no discord link for roblox user {} ({}): {}",
            roblox_id,
            link.source,
            link.error.as_deref().unwrap_or("-")
        );
        return RoleLookup::Unverified {
            reason: UnverifiedReason::NoLink(link.source),
            discord_id: None,
            source: None,
            error: link.error,
        };
    };

    let member = match state.discord.guild_member(&discord_id).await {
        Ok(member) => member,
        Err(err) => {
            let reason = member_failure_reason(&err);
            warn!(
                "guild member fetch for discord user {} failed: {} ({})",
                discord_id,
                err,
                reason.code()
            );
            return RoleLookup::Unverified {
                reason,
                discord_id: Some(discord_id),
                source: Some(link.source),
                error: Some(err.to_string()),
            };
        }
    };

    let roles = resolve_role_names(state.discord.as_ref(), &member.roles).await;
    RoleLookup::Verified {
        discord_id,
        member_info: MemberInfo {
            nick: member.nick,
            joined_at: member.joined_at,
            total_roles: member.roles.len(),
        },
        roles,
        source: link.source,
    }
}

/// Guild-scoped lookup first, then global; the first response carrying an
/// identity in any known shape wins.
pub async fn resolve_link(linking: &dyn LinkingService, roblox_id: &str) -> IdentityLink {
    let guild = linking
        .roblox_to_discord(LookupScope::Guild, roblox_id)
        .await;
    if let Some(link) = link_from_guild(roblox_id, &guild) {
        return link;
    }

    let global = linking
        .roblox_to_discord(LookupScope::Global, roblox_id)
        .await;
    link_from_global(roblox_id, &global)
}

pub fn link_from_guild(
    roblox_id: &str,
    result: &Result<Value, UpstreamError>,
) -> Option<IdentityLink> {
    match result {
        Ok(body) => match extract_discord_id(body) {
            Some(found) => {
                debug!("guild link for {} matched {}", roblox_id, found.shape);
                Some(IdentityLink::found(roblox_id, found.discord_id, LinkSource::Guild))
            }
            None => {
                debug!("guild lookup for {} returned no usable identity", roblox_id);
                None
            }
        },
        Err(err) => {
            debug!("guild lookup for {} failed: {}", roblox_id, err);
            None
        }
    }
}

pub fn link_from_global(roblox_id: &str, result: &Result<Value, UpstreamError>) -> IdentityLink {
    match result {
        Ok(body) => match extract_discord_id(body) {
            Some(found) => {
                debug!("global link for {} matched {}", roblox_id, found.shape);
                IdentityLink::found(roblox_id, found.discord_id, LinkSource::Global)
            }
            None => IdentityLink::missing(roblox_id, LinkSource::None, "No Discord ID found", None),
        },
        Err(UpstreamError::Status { status, body }) => IdentityLink::missing(
            roblox_id,
            LinkSource::None,
            format!("HTTP {}", status),
            Some(body.clone()),
        ),
        Err(UpstreamError::Transport(message)) => {
            IdentityLink::missing(roblox_id, LinkSource::Error, message.clone(), None)
        }
    }
}

/// Map held role ids to names in the member's order. Ids missing from the
/// guild role list (deleted after assignment) get a placeholder name.
pub async fn resolve_role_names(discord: &dyn DiscordApi, role_ids: &[String]) -> Vec<GuildRole> {
    if role_ids.is_empty() {
        return Vec::new();
    }
    let names: HashMap<String, String> = match discord.guild_roles().await {
        Ok(roles) => roles.into_iter().map(|role| (role.id, role.name)).collect(),
        Err(err) => {
            warn!("guild role list fetch failed: {}", err);
            HashMap::new()
        }
    };
    role_ids
        .iter()
        .map(|id| GuildRole {
            id: id.clone(),
            name: names
                .get(id)
                .cloned()
                .unwrap_or_else(|| unknown_role_name(id)),
        })
        .collect()
}

fn member_failure_reason(err: &UpstreamError) -> UnverifiedReason {
    match err {
        UpstreamError::Status { status: 404, body } if is_unknown_member(body) => {
            UnverifiedReason::NotInGuild
        }
        other => UnverifiedReason::DiscordApiError(other.status()),
    }
}

fn is_unknown_member(body: &str) -> bool {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("code").and_then(Value::as_i64))
        == Some(UNKNOWN_MEMBER_CODE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{configured, FakeDiscord, FakeLinking, Harness};
    use bridge_domain::GuildMember;
    use serde_json::json;

    fn status(status: u16, body: &str) -> UpstreamError {
        UpstreamError::Status {
            status,
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn guild_primary_account_short_circuits_global_lookup() {
        let linking = FakeLinking::new(
            Ok(json!({"primaryAccount": {"discordId": "X"}})),
            Ok(json!({"discordId": "other"})),
        );
        let link = resolve_link(&linking, "555").await;
        assert_eq!(link.discord_id.as_deref(), Some("X"));
        assert_eq!(link.source, LinkSource::Guild);
        assert_eq!(linking.guild_calls(), 1);
        assert_eq!(linking.global_calls(), 0);
    }

    #[tokio::test]
    async fn empty_guild_success_falls_back_to_global() {
        let linking = FakeLinking::new(
            Ok(json!({"resolved": {}})),
            Ok(json!({"data": {"discordIDs": ["G"]}})),
        );
        let link = resolve_link(&linking, "555").await;
        assert_eq!(link.discord_id.as_deref(), Some("G"));
        assert_eq!(link.source, LinkSource::Global);
        assert_eq!(linking.global_calls(), 1);
    }

    #[tokio::test]
    async fn guild_failure_falls_back_to_global() {
        let linking = FakeLinking::new(
            Err(UpstreamError::Transport("connection reset".to_string())),
            Ok(json!({"discordId": "G"})),
        );
        let link = resolve_link(&linking, "555").await;
        assert_eq!(link.source, LinkSource::Global);
    }

    #[tokio::test]
    async fn no_identity_anywhere_reports_the_last_stage() {
        let none = resolve_link(&FakeLinking::unlinked(), "1").await;
        assert_eq!(none.discord_id, None);
        assert_eq!(none.source, LinkSource::None);
        assert_eq!(none.error.as_deref(), Some("No Discord ID found"));

        let http = resolve_link(
            &FakeLinking::new(Ok(json!({})), Err(status(404, "not linked"))),
            "1",
        )
        .await;
        assert_eq!(http.source, LinkSource::None);
        assert_eq!(http.error.as_deref(), Some("HTTP 404"));
        assert_eq!(http.error_details.as_deref(), Some("not linked"));

        let transport = resolve_link(
            &FakeLinking::new(
                Ok(json!({})),
                Err(UpstreamError::Transport("timed out".to_string())),
            ),
            "1",
        )
        .await;
        assert_eq!(transport.source, LinkSource::Error);
    }

    #[tokio::test]
    async fn verified_lookup_maps_roles_with_placeholders() {
        let harness = Harness::new(
            configured(),
            FakeLinking::new(Ok(json!({"discordId": "42"})), Ok(json!({}))),
            FakeDiscord::member_with_roles(&["r1", "gone", "r2"], &[("r1", "Climber"), ("r2", "VIP")]),
        );
        let lookup = lookup_roles(&harness.state, "555").await;
        let RoleLookup::Verified {
            discord_id,
            roles,
            source,
            member_info,
        } = lookup
        else {
            panic!("expected verified lookup");
        };
        assert_eq!(discord_id, "42");
        assert_eq!(source, LinkSource::Guild);
        let names: Vec<&str> = roles.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Climber", "Unknown Role (gone)", "VIP"]);
        assert_eq!(member_info.total_roles, 3);
        assert_eq!(member_info.nick.as_deref(), Some("nick"));
    }

    #[tokio::test]
    async fn role_list_failure_degrades_to_placeholders() {
        let member = GuildMember {
            roles: vec!["r1".to_string()],
            ..GuildMember::default()
        };
        let harness = Harness::new(
            configured(),
            FakeLinking::new(Ok(json!({"discordId": "42"})), Ok(json!({}))),
            FakeDiscord::new(Ok(member), Err(status(500, "boom"))),
        );
        let lookup = lookup_roles(&harness.state, "555").await;
        assert!(lookup.is_verified());
        assert_eq!(lookup.role_names(), vec!["Unknown Role (r1)"]);
    }

    #[tokio::test]
    async fn member_failures_are_classified() {
        let unknown_member = Harness::new(
            configured(),
            FakeLinking::new(Ok(json!({"discordId": "42"})), Ok(json!({}))),
            FakeDiscord::new(
                Err(status(404, r#"{"message":"Unknown Member","code":10007}"#)),
                Ok(Vec::new()),
            ),
        );
        let lookup = lookup_roles(&unknown_member.state, "555").await;
        let RoleLookup::Unverified {
            reason,
            discord_id,
            source,
            ..
        } = lookup
        else {
            panic!("expected unverified lookup");
        };
        assert_eq!(reason, UnverifiedReason::NotInGuild);
        assert_eq!(discord_id.as_deref(), Some("42"));
        assert_eq!(source, Some(LinkSource::Guild));

        let forbidden = Harness::new(
            configured(),
            FakeLinking::new(Ok(json!({"discordId": "42"})), Ok(json!({}))),
            FakeDiscord::new(Err(status(403, "Missing Access")), Ok(Vec::new())),
        );
        let lookup = lookup_roles(&forbidden.state, "555").await;
        assert!(matches!(
            lookup,
            RoleLookup::Unverified {
                reason: UnverifiedReason::DiscordApiError(Some(403)),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn unlinked_player_never_reaches_discord() {
        let harness = Harness::new(
            configured(),
            FakeLinking::unlinked(),
            FakeDiscord::member_with_roles(&[], &[]),
        );
        let lookup = lookup_roles(&harness.state, "555").await;
        assert!(matches!(
            lookup,
            RoleLookup::Unverified {
                reason: UnverifiedReason::NoLink(LinkSource::None),
                ..
            }
        ));
        assert_eq!(harness.discord.calls(), 0);
    }
}
