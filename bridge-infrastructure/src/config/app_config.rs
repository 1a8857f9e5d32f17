use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use bridge_domain::{
    NotificationFormat, RuntimeConfig, DEFAULT_BIND_ADDR, DEFAULT_BLOXLINK_API_BASE,
    DEFAULT_DISCORD_API_BASE, DEFAULT_MAX_BODY_BYTES, DEFAULT_REQUEST_TIMEOUT_SECONDS,
    DEFAULT_SECRET_HEADER,
};

use crate::config::validation::{validate_header_name, validate_http_url};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
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

impl Default for AppConfig {
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

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("BRIDGE_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            toml::from_str::<AppConfig>(&content)?
        } else {
            warn!("{} not found, using defaults and environment", path);
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        for value in [
            &mut self.guild_id,
            &mut self.discord_bot_token,
            &mut self.discord_log_webhook_url,
            &mut self.bloxlink_key,
            &mut self.shared_secret,
        ] {
            *value = value
                .take()
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty());
        }
        self.secret_header = self.secret_header.trim().to_lowercase();
        self.discord_api_base = self.discord_api_base.trim().to_string();
        self.bloxlink_api_base = self.bloxlink_api_base.trim().to_string();
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        validate_header_name(&self.secret_header)?;
        validate_http_url("discord_api_base", &self.discord_api_base)?;
        validate_http_url("bloxlink_api_base", &self.bloxlink_api_base)?;
        if let Some(url) = &self.discord_log_webhook_url {
            validate_http_url("discord_log_webhook_url", url)?;
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            guild_id: self.guild_id.clone(),
            discord_bot_token: self.discord_bot_token.clone(),
            discord_log_webhook_url: self.discord_log_webhook_url.clone(),
            bloxlink_key: self.bloxlink_key.clone(),
            shared_secret: self.shared_secret.clone(),
            secret_header: self.secret_header.clone(),
            discord_api_base: self.discord_api_base.clone(),
            bloxlink_api_base: self.bloxlink_api_base.clone(),
            notification_format: self.notification_format,
            debug_endpoints: self.debug_endpoints,
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// The five deployment keys keep their bare names; the rest are `BRIDGE_*`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(port) = lookup("PORT") {
            if let Ok(port) = port.trim().parse::<u16>() {
                self.bind_addr = format!("0.0.0.0:{}", port);
            }
        }
        if let Some(value) = lookup("BRIDGE_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = lookup("GUILD_ID") {
            self.guild_id = Some(value);
        }
        if let Some(value) = lookup("DISCORD_BOT_TOKEN") {
            self.discord_bot_token = Some(value);
        }
        if let Some(value) = lookup("DISCORD_LOG_WEBHOOK_URL") {
            self.discord_log_webhook_url = Some(value);
        }
        if let Some(value) = lookup("BLOXLINK_KEY") {
            self.bloxlink_key = Some(value);
        }
        if let Some(value) = lookup("SHARED_SECRET") {
            self.shared_secret = Some(value);
        }
        if let Some(value) = lookup("BRIDGE_SECRET_HEADER") {
            self.secret_header = value;
        }
        if let Some(value) = lookup("BRIDGE_DISCORD_API_BASE") {
            self.discord_api_base = value;
        }
        if let Some(value) = lookup("BRIDGE_BLOXLINK_API_BASE") {
            self.bloxlink_api_base = value;
        }
        if let Some(value) = lookup("BRIDGE_NOTIFICATION_FORMAT") {
            self.notification_format = NotificationFormat::from(value.as_str());
        }
        if let Some(value) = lookup("BRIDGE_DEBUG_ENDPOINTS") {
            self.debug_endpoints = value.parse().unwrap_or(self.debug_endpoints);
        }
        if let Some(value) = lookup("BRIDGE_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Some(value) = lookup("BRIDGE_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}
