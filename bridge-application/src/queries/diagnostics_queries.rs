use chrono::Utc;
use serde_json::Value;

use bridge_domain::{extract_discord_id, ConfigKey, LookupScope, UpstreamError};

use crate::dtos::{BloxlinkReport, ConfigReport, DiscordReport, UpstreamProbe};
use crate::queries::role_queries::{link_from_global, link_from_guild};
use crate::AppState;

/// Which keys are configured; values are never echoed.
pub fn config_report(state: &AppState) -> ConfigReport {
    let keys = ConfigKey::ALL
        .iter()
        .map(|key| (key.env_name(), state.config.value(*key).is_some()))
        .collect();
    ConfigReport {
        keys,
        secret_header: state.config.secret_header.clone(),
        notification_format: state.config.notification_format,
        discord_api_base: state.config.discord_api_base.clone(),
        bloxlink_api_base: state.config.bloxlink_api_base.clone(),
        timestamp: Utc::now().timestamp(),
    }
}

pub async fn discord_report(state: &AppState) -> DiscordReport {
    let bot_user = state.discord.current_user().await;
    let guild = state.discord.guild().await;
    DiscordReport {
        bot_user: UpstreamProbe::from_result(&bot_user),
        guild: UpstreamProbe::from_result(&guild),
    }
}

/// Query both linking scopes unconditionally and show how the resolver
/// would settle on them.
pub async fn bloxlink_report(state: &AppState, roblox_id: &str) -> BloxlinkReport {
    let guild = state
        .linking
        .roblox_to_discord(LookupScope::Guild, roblox_id)
        .await;
    let global = state
        .linking
        .roblox_to_discord(LookupScope::Global, roblox_id)
        .await;

    let resolved = link_from_guild(roblox_id, &guild)
        .unwrap_or_else(|| link_from_global(roblox_id, &global));

    BloxlinkReport {
        roblox_id: roblox_id.to_string(),
        guild: probe_with_shape(&guild),
        global: probe_with_shape(&global),
        resolved,
    }
}

fn probe_with_shape(result: &Result<Value, UpstreamError>) -> UpstreamProbe {
    let mut probe = UpstreamProbe::from_result(result);
    if let Ok(body) = result {
        probe.matched_shape = extract_discord_id(body).map(|found| found.shape);
    }
    probe
}
