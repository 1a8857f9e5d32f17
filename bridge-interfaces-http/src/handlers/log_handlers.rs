use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use tracing::error;

use bridge_application::commands::log_commands;
use bridge_application::dtos::LogResponse;
use bridge_application::AppState;
use bridge_domain::LOG_KEYS;

use crate::error::HttpError;
use crate::middleware::{authorize, parse_event_payload};

pub async fn log_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<LogResponse>, HttpError> {
    authorize(&state.config, &headers)?;
    state.require(&LOG_KEYS)?;

    let payload = parse_event_payload(&headers, &body, state.config.max_body_bytes)
        .map_err(|err| {
            error!("failed to parse log body: {}", err);
            HttpError::BadRequest {
                error: "invalid json".to_string(),
                details: Some(err.to_string()),
            }
        })?;

    let receipt = log_commands::process_log_event(&state, payload).await?;
    Ok(Json(receipt.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{body_json, secret_headers, wrong_secret_headers};
    use axum::http::{header, HeaderValue, StatusCode};
    use axum::response::IntoResponse;
    use bridge_application::testing::{configured, FakeDiscord, FakeLinking, Harness};
    use bridge_domain::RuntimeConfig;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use serde_json::json;
    use std::io::Write;

    fn harness(config: RuntimeConfig) -> Harness {
        Harness::new(
            config,
            FakeLinking::new(Ok(json!({"discordId": "42"})), Ok(json!({}))),
            FakeDiscord::member_with_roles(&["r1"], &[("r1", "Climber")]),
        )
    }

    async fn call(harness: &Harness, headers: HeaderMap, body: &'static str) -> axum::response::Response {
        log_event(State(harness.state.clone()), headers, Bytes::from_static(body.as_bytes()))
            .await
            .into_response()
    }

    #[tokio::test]
    async fn wrong_secret_is_rejected_before_any_work() {
        let harness = harness(configured());
        let response = call(&harness, wrong_secret_headers(), r#"{"type":"join","playerId":1}"#).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await, json!({"error": "unauthorized"}));
        assert_eq!(harness.upstream_calls(), 0);
        assert!(harness.sink.sent().is_empty());
    }

    #[tokio::test]
    async fn missing_webhook_is_a_misconfiguration() {
        let config = RuntimeConfig {
            discord_log_webhook_url: None,
            ..configured()
        };
        let harness = harness(config);
        let response = call(&harness, secret_headers(), r#"{"type":"join","playerId":1}"#).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({"error": "misconfig", "missing": ["DISCORD_LOG_WEBHOOK_URL"]})
        );
    }

    #[tokio::test]
    async fn invalid_json_reports_details() {
        let harness = harness(configured());
        let response = call(&harness, secret_headers(), "{oops").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "invalid json");
        assert!(body["details"].is_string());
    }

    #[tokio::test]
    async fn whitespace_only_body_is_invalid_json() {
        let harness = harness(configured());
        let response = call(&harness, secret_headers(), "   ").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "invalid json");
    }

    #[tokio::test]
    async fn gzip_body_inflating_past_the_limit_is_refused() {
        let config = RuntimeConfig {
            max_body_bytes: 2048,
            ..configured()
        };
        let harness = harness(config);
        let body = format!(
            r#"{{"type":"dump","playerId":1,"data":"{}"}}"#,
            "z".repeat(64 * 1024)
        );
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(body.as_bytes()).expect("write");
        let compressed = encoder.finish().expect("finish");
        assert!(compressed.len() < 2048);

        let mut headers = secret_headers();
        headers.insert(header::CONTENT_ENCODING, HeaderValue::from_static("gzip"));
        let response = log_event(State(harness.state.clone()), headers, Bytes::from(compressed))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "invalid json");
        assert!(body["details"]
            .as_str()
            .unwrap_or_default()
            .contains("exceeds 2048 bytes"));
        assert!(harness.sink.sent().is_empty());
    }

    #[tokio::test]
    async fn missing_fields_send_nothing() {
        let harness = harness(configured());
        let response = call(&harness, secret_headers(), "").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "bad payload", "required": ["type", "playerId"]})
        );
        assert!(harness.sink.sent().is_empty());
    }

    #[tokio::test]
    async fn valid_event_is_forwarded() {
        let harness = harness(configured());
        let response = call(
            &harness,
            secret_headers(),
            r#"{"type":"join","playerId":8,"playerName":"ann"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"ok": true, "logged": true, "as": "embed", "delivered": true})
        );
        assert_eq!(harness.sink.sent().len(), 1);
    }
}
