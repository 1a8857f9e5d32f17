use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use bridge_domain::ports::DiscordApi;
use bridge_domain::{GuildMember, GuildRole, RuntimeConfig, UpstreamError};

use crate::utils::{endpoint, read_json, transport_error};

/// Discord REST v10, authenticated as the bot and bound to the configured guild.
pub struct DiscordClient {
    http: Client,
    base_url: String,
    bot_token: String,
    guild_id: String,
}

impl DiscordClient {
    pub fn new(http: Client, config: &RuntimeConfig) -> Self {
        Self {
            http,
            base_url: config.discord_api_base.clone(),
            bot_token: config.discord_bot_token.clone().unwrap_or_default(),
            guild_id: config.guild_id.clone().unwrap_or_default(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, UpstreamError> {
        let url = endpoint(&self.base_url, segments)?;
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("Bot {}", self.bot_token))
            .send()
            .await
            .map_err(transport_error)?;
        read_json(response).await
    }
}

#[async_trait]
impl DiscordApi for DiscordClient {
    async fn guild_member(&self, user_id: &str) -> Result<GuildMember, UpstreamError> {
        self.get(&["guilds", &self.guild_id, "members", user_id]).await
    }

    async fn guild_roles(&self) -> Result<Vec<GuildRole>, UpstreamError> {
        self.get(&["guilds", &self.guild_id, "roles"]).await
    }

    async fn current_user(&self) -> Result<Value, UpstreamError> {
        self.get(&["users", "@me"]).await
    }

    async fn guild(&self) -> Result<Value, UpstreamError> {
        self.get(&["guilds", &self.guild_id]).await
    }
}
