use std::collections::HashMap;

use axum::extract::Query;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, SecondsFormat, Utc};

use bridge_application::dtos::HealthResponse;

/// Liveness; never authenticated. `?format=html` serves a status page for
/// a browser.
pub async fn health(Query(params): Query<HashMap<String, String>>) -> Response {
    let now = Utc::now();
    if params.get("format").map(String::as_str) == Some("html") {
        return Html(status_page(now)).into_response();
    }
    Json(HealthResponse {
        ok: true,
        timestamp: now.timestamp(),
    })
    .into_response()
}

fn status_page(now: DateTime<Utc>) -> String {
    format!(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>bloxbridge</title></head>\n\
         <body>\n<h1>Bridge OK</h1>\n<p>Version {}</p>\n<p>Checked at {}</p>\n</body>\n</html>\n",
        env!("CARGO_PKG_VERSION"),
        now.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}
