// Runtime configuration entity
// Built once at startup and shared read-only with every handler

use crate::value_objects::{ConfigKey, NotificationFormat};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_SECRET_HEADER: &str = "x-game-secret";
pub const DEFAULT_DISCORD_API_BASE: &str = "https://discord.com/api/v10";
pub const DEFAULT_BLOXLINK_API_BASE: &str = "https://api.blox.link/v4/public";
pub const DEFAULT_MAX_BODY_BYTES: u64 = 1024 * 1024;
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 15;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub guild_id: Option<String>,
    pub discord_bot_token: Option<String>,
    pub discord_log_webhook_url: Option<String>,
    pub bloxlink_key: Option<String>,
    pub shared_secret: Option<String>,
    pub secret_header: String,
    pub discord_api_base: String,
    pub bloxlink_api_base: String,
    pub notification_format: NotificationFormat,
    pub debug_endpoints: bool,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            guild_id: None,
            discord_bot_token: None,
            discord_log_webhook_url: None,
            bloxlink_key: None,
            shared_secret: None,
            secret_header: DEFAULT_SECRET_HEADER.to_string(),
            discord_api_base: DEFAULT_DISCORD_API_BASE.to_string(),
            bloxlink_api_base: DEFAULT_BLOXLINK_API_BASE.to_string(),
            notification_format: NotificationFormat::Embed,
            debug_endpoints: false,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECONDS,
        }
    }
}

impl RuntimeConfig {
    pub fn value(&self, key: ConfigKey) -> Option<&str> {
        let value = match key {
            ConfigKey::GuildId => &self.guild_id,
            ConfigKey::DiscordBotToken => &self.discord_bot_token,
            ConfigKey::DiscordLogWebhookUrl => &self.discord_log_webhook_url,
            ConfigKey::BloxlinkKey => &self.bloxlink_key,
            ConfigKey::SharedSecret => &self.shared_secret,
        };
        value.as_deref().filter(|v| !v.trim().is_empty())
    }

    /// Names of the given keys that are not configured, in the order asked.
    pub fn missing_keys(&self, keys: &[ConfigKey]) -> Vec<String> {
        keys.iter()
            .filter(|key| self.value(**key).is_none())
            .map(|key| key.env_name().to_string())
            .collect()
    }

    pub fn has_all(&self, keys: &[ConfigKey]) -> bool {
        keys.iter().all(|key| self.value(*key).is_some())
    }
}
