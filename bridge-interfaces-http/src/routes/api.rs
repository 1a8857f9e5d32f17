use axum::routing::{get, post, MethodRouter};
use axum::Router;

use bridge_application::AppState;

use crate::handlers::{debug_handlers, health_handlers, log_handlers, ops_handlers, role_handlers};

/// Every endpoint answers both bare and under the serverless `/api` prefix.
const PREFIXES: [&str; 2] = ["", "/api"];

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new();
    for prefix in PREFIXES {
        router = router
            .route(
                &format!("{}/", prefix),
                endpoint(get(health_handlers::health)),
            )
            .route(
                &format!("{}/health", prefix),
                endpoint(get(health_handlers::health)),
            )
            .route(
                &format!("{}/log", prefix),
                endpoint(post(log_handlers::log_event)),
            )
            .route(
                &format!("{}/roles-by-roblox", prefix),
                endpoint(get(role_handlers::roles_by_roblox)),
            )
            .route(
                &format!("{}/metrics", prefix),
                endpoint(get(ops_handlers::metrics_prometheus)),
            );
        if state.config.debug_endpoints {
            router = router
                .route(
                    &format!("{}/debug/config", prefix),
                    endpoint(get(debug_handlers::debug_config)),
                )
                .route(
                    &format!("{}/debug/discord", prefix),
                    endpoint(get(debug_handlers::debug_discord)),
                )
                .route(
                    &format!("{}/debug/bloxlink", prefix),
                    endpoint(get(debug_handlers::debug_bloxlink)),
                );
        }
    }
    router
        .route("/api", endpoint(get(health_handlers::health)))
        .fallback(ops_handlers::not_found)
        .with_state(state)
}

/// A known path hit with the wrong method is still "endpoint not found".
fn endpoint(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.fallback(ops_handlers::not_found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::body_json;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use bridge_application::testing::{configured, FakeDiscord, FakeLinking, Harness};
    use bridge_domain::RuntimeConfig;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router(debug_endpoints: bool) -> Router {
        let config = RuntimeConfig {
            debug_endpoints,
            ..configured()
        };
        let harness = Harness::new(
            config,
            FakeLinking::new(Ok(json!({"discordId": "42"})), Ok(json!({}))),
            FakeDiscord::member_with_roles(&["r1"], &[("r1", "Climber")]),
        );
        build_router(harness.state)
    }

    async fn send(router: &Router, method: Method, uri: &str, secret: bool) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if secret {
            request = request.header("x-game-secret", "s3cret");
        }
        let request = request.body(Body::empty()).expect("request");
        let response = router.clone().oneshot(request).await.expect("infallible");
        let status = response.status();
        (status, body_json(response).await)
    }

    #[tokio::test]
    async fn debug_routes_are_absent_unless_enabled() {
        let disabled = router(false);
        for (uri, path) in [
            ("/debug/config", "/debug/config"),
            ("/api/debug/discord", "/debug/discord"),
            ("/api/debug/bloxlink?robloxId=1", "/debug/bloxlink"),
        ] {
            let (status, body) = send(&disabled, Method::GET, uri, true).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert_eq!(body, json!({"error": "endpoint not found", "path": path}));
        }

        let enabled = router(true);
        let (status, body) = send(&enabled, Method::GET, "/api/debug/config", true).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["keys"]["GUILD_ID"], true);
    }

    #[tokio::test]
    async fn wrong_method_on_known_path_is_not_found() {
        let router = router(false);
        let (status, body) = send(&router, Method::POST, "/api/health", false).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "endpoint not found", "path": "/health"}));

        let (status, body) = send(&router, Method::GET, "/api/log", true).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["path"], "/log");

        let (status, body) = send(&router, Method::GET, "/api/nowhere", false).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["path"], "/nowhere");
    }

    #[tokio::test]
    async fn bare_and_prefixed_paths_reach_the_same_handler() {
        let router = router(false);
        let (bare_status, bare) =
            send(&router, Method::GET, "/roles-by-roblox?robloxId=555", true).await;
        let (prefixed_status, prefixed) =
            send(&router, Method::GET, "/api/roles-by-roblox?robloxId=555", true).await;
        assert_eq!(bare_status, StatusCode::OK);
        assert_eq!(prefixed_status, StatusCode::OK);
        assert_eq!(bare, prefixed);
        assert_eq!(bare["verified"], true);

        let (status, body) = send(&router, Method::GET, "/api/roles-by-roblox?robloxId=555", false).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({"error": "unauthorized"}));
    }

    #[tokio::test]
    async fn health_answers_on_every_root() {
        let router = router(false);
        for uri in ["/", "/health", "/api", "/api/", "/api/health"] {
            let (status, body) = send(&router, Method::GET, uri, false).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(body["ok"], true, "{}", uri);
        }
    }
}
