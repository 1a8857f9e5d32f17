use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;

use bridge_application::dtos::{BloxlinkReport, ConfigReport, DiscordReport};
use bridge_application::queries::diagnostics_queries;
use bridge_application::AppState;
use bridge_domain::{BLOXLINK_KEYS, DISCORD_KEYS};

use crate::error::HttpError;
use crate::handlers::role_handlers::roblox_id_param;
use crate::middleware::authorize;

pub async fn debug_config(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ConfigReport>, HttpError> {
    authorize(&state.config, &headers)?;
    Ok(Json(diagnostics_queries::config_report(&state)))
}

pub async fn debug_discord(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DiscordReport>, HttpError> {
    authorize(&state.config, &headers)?;
    state.require(&DISCORD_KEYS)?;
    Ok(Json(diagnostics_queries::discord_report(&state).await))
}

pub async fn debug_bloxlink(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<BloxlinkReport>, HttpError> {
    authorize(&state.config, &headers)?;
    state.require(&BLOXLINK_KEYS)?;
    let roblox_id = roblox_id_param(&params)?;
    Ok(Json(
        diagnostics_queries::bloxlink_report(&state, &roblox_id).await,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{body_json, secret_headers, wrong_secret_headers};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use bridge_application::testing::{configured, FakeDiscord, FakeLinking, Harness};
    use bridge_domain::RuntimeConfig;
    use serde_json::json;

    fn harness(config: RuntimeConfig) -> Harness {
        Harness::new(
            config,
            FakeLinking::new(Ok(json!({"resolved": {}})), Ok(json!({"discordIDs": ["77"]}))),
            FakeDiscord::member_with_roles(&[], &[]),
        )
    }

    #[tokio::test]
    async fn config_report_never_echoes_values() {
        let harness = harness(configured());
        let response = debug_config(State(harness.state.clone()), secret_headers())
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["keys"]["SHARED_SECRET"], true);
        assert!(!body.to_string().contains("s3cret"));
        assert!(!body.to_string().contains("bot-token"));
    }

    #[tokio::test]
    async fn debug_routes_require_the_secret() {
        let harness = harness(configured());
        let response = debug_discord(State(harness.state.clone()), wrong_secret_headers())
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(harness.upstream_calls(), 0);
    }

    #[tokio::test]
    async fn discord_report_probes_bot_and_guild() {
        let harness = harness(configured());
        let response = debug_discord(State(harness.state.clone()), secret_headers())
            .await
            .into_response();
        let body = body_json(response).await;
        assert_eq!(body["botUser"]["ok"], true);
        assert_eq!(body["guild"]["body"]["name"], "Summit Guild");
    }

    #[tokio::test]
    async fn bloxlink_report_shows_both_scopes_and_resolution() {
        let harness = harness(configured());
        let params = HashMap::from([("robloxId".to_string(), "555".to_string())]);
        let response = debug_bloxlink(State(harness.state.clone()), secret_headers(), Query(params))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["guild"]["ok"], true);
        assert_eq!(body["global"]["matchedShape"], "discordIDs[0]");
        assert_eq!(body["resolved"]["discordId"], "77");
        assert_eq!(body["resolved"]["source"], "global");
        assert_eq!(harness.linking.guild_calls(), 1);
        assert_eq!(harness.linking.global_calls(), 1);
    }
}
