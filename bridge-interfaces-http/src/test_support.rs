use axum::body::to_bytes;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;
use serde_json::Value;

pub fn secret_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("x-game-secret", HeaderValue::from_static("s3cret"));
    headers
}

pub fn wrong_secret_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("x-game-secret", HeaderValue::from_static("guess"));
    headers
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
