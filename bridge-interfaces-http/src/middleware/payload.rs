use std::io::Read;

use anyhow::{anyhow, Result};
use axum::http::{header, HeaderMap};
use flate2::read::GzDecoder;
use serde_json::Value;

use bridge_domain::GameEventPayload;

/// Decode a `/log` body. Roblox may gzip it; the inflated text is held to
/// `max_bytes` like the raw body. Only a zero-length body reads as `{}`.
pub fn parse_event_payload(
    headers: &HeaderMap,
    body: &[u8],
    max_bytes: u64,
) -> Result<GameEventPayload> {
    let content = maybe_gunzip(headers, body, max_bytes)?;
    if content.is_empty() {
        return Ok(GameEventPayload::default());
    }
    let value: Value = serde_json::from_str(&content)?;
    Ok(GameEventPayload::from_json(value))
}

fn maybe_gunzip(headers: &HeaderMap, body: &[u8], max_bytes: u64) -> Result<String> {
    if let Some(encoding) = headers.get(header::CONTENT_ENCODING) {
        if encoding.to_str().unwrap_or("").eq_ignore_ascii_case("gzip") {
            let mut decoder = GzDecoder::new(body).take(max_bytes.saturating_add(1));
            let mut out = Vec::new();
            decoder.read_to_end(&mut out)?;
            if out.len() as u64 > max_bytes {
                return Err(anyhow!("inflated body exceeds {} bytes", max_bytes));
            }
            return Ok(String::from_utf8(out)?);
        }
    }
    Ok(String::from_utf8(body.to_vec())?)
}
