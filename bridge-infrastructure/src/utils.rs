use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use bridge_domain::UpstreamError;

pub fn build_http_client(timeout_seconds: u64) -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_seconds.max(1)))
        .user_agent(concat!("bloxbridge/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Append path segments to an API base, percent-encoding each one.
pub fn endpoint(base: &str, segments: &[&str]) -> Result<Url, UpstreamError> {
    let mut url = Url::parse(base).map_err(|err| UpstreamError::Transport(err.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| UpstreamError::Transport(format!("base url '{}' cannot take a path", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub fn transport_error(err: reqwest::Error) -> UpstreamError {
    UpstreamError::Transport(err.to_string())
}

/// Decode a success body, or capture status and body text of a failure.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, UpstreamError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(UpstreamError::Status {
            status: status.as_u16(),
            body,
        });
    }
    response.json::<T>().await.map_err(transport_error)
}
