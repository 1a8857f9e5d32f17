use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, Uri};
use axum::response::{IntoResponse, Response};

use bridge_application::AppState;

use crate::error::HttpError;
use crate::middleware::authorize;

const API_PREFIX: &str = "/api";

pub async fn metrics_prometheus(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, HttpError> {
    authorize(&state.config, &headers)?;
    let body = state.metrics.render_prometheus();
    let mut response = body.into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; version=0.0.4"),
    );
    Ok(response)
}

/// Catch-all for unknown paths and unsupported methods.
pub async fn not_found(uri: Uri) -> HttpError {
    HttpError::NotFound {
        path: normalize_path(uri.path()),
    }
}

/// `/api/log` and `/log` are the same endpoint; an empty remainder is `/`.
pub fn normalize_path(path: &str) -> String {
    let stripped = match path.strip_prefix(API_PREFIX) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    };
    if stripped.is_empty() {
        "/".to_string()
    } else {
        stripped.to_string()
    }
}
