use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde_json::Value;

use bridge_domain::ports::LinkingService;
use bridge_domain::{LookupScope, RuntimeConfig, UpstreamError};

use crate::utils::{endpoint, read_json, transport_error};

/// Bloxlink v4 public API: `Authorization: <api key>`.
pub struct BloxlinkClient {
    http: Client,
    base_url: String,
    api_key: String,
    guild_id: String,
}

impl BloxlinkClient {
    pub fn new(http: Client, config: &RuntimeConfig) -> Self {
        Self {
            http,
            base_url: config.bloxlink_api_base.clone(),
            api_key: config.bloxlink_key.clone().unwrap_or_default(),
            guild_id: config.guild_id.clone().unwrap_or_default(),
        }
    }

    pub fn lookup_url(&self, scope: LookupScope, roblox_id: &str) -> Result<reqwest::Url, UpstreamError> {
        match scope {
            LookupScope::Guild => endpoint(
                &self.base_url,
                &["guilds", &self.guild_id, "roblox-to-discord", roblox_id],
            ),
            LookupScope::Global => endpoint(&self.base_url, &["roblox-to-discord", roblox_id]),
        }
    }
}

#[async_trait]
impl LinkingService for BloxlinkClient {
    async fn roblox_to_discord(
        &self,
        scope: LookupScope,
        roblox_id: &str,
    ) -> Result<Value, UpstreamError> {
        let url = self.lookup_url(scope, roblox_id)?;
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, &self.api_key)
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_urls_follow_scope() {
        let config = RuntimeConfig {
            guild_id: Some("900".to_string()),
            bloxlink_key: Some("key".to_string()),
            ..RuntimeConfig::default()
        };
        let client = BloxlinkClient::new(Client::new(), &config);
        assert_eq!(
            client.lookup_url(LookupScope::Guild, "77").expect("url").as_str(),
            "https://api.blox.link/v4/public/guilds/900/roblox-to-discord/77"
        );
        assert_eq!(
            client.lookup_url(LookupScope::Global, "77").expect("url").as_str(),
            "https://api.blox.link/v4/public/roblox-to-discord/77"
        );
    }
}
