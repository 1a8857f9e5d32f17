use async_trait::async_trait;
use serde_json::Value;

use crate::entities::{DeliveryOutcome, GuildMember, GuildRole, OutboundMessage, UpstreamError};
use crate::value_objects::LookupScope;

/// Bloxlink-style Roblox → Discord identifier mapping.
///
/// The raw JSON body is returned because the response shape differs between
/// deployments; see [`crate::services::extract_discord_id`].
#[async_trait]
pub trait LinkingService: Send + Sync {
    async fn roblox_to_discord(
        &self,
        scope: LookupScope,
        roblox_id: &str,
    ) -> Result<Value, UpstreamError>;
}

/// The subset of the Discord REST API the bridge reads, bound to one guild.
#[async_trait]
pub trait DiscordApi: Send + Sync {
    async fn guild_member(&self, user_id: &str) -> Result<GuildMember, UpstreamError>;
    async fn guild_roles(&self) -> Result<Vec<GuildRole>, UpstreamError>;
    async fn current_user(&self) -> Result<Value, UpstreamError>;
    async fn guild(&self) -> Result<Value, UpstreamError>;
}

/// Outbound notification channel. Never fails the caller; the outcome says
/// whether the message landed.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn deliver(&self, message: &OutboundMessage) -> DeliveryOutcome;
}
