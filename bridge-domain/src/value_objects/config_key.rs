// Configuration key value object

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    GuildId,
    DiscordBotToken,
    DiscordLogWebhookUrl,
    BloxlinkKey,
    SharedSecret,
}

/// Keys `/roles-by-roblox` (and role lookups during event logging) depend on.
pub const ROLE_LOOKUP_KEYS: [ConfigKey; 3] = [
    ConfigKey::BloxlinkKey,
    ConfigKey::GuildId,
    ConfigKey::DiscordBotToken,
];

pub const LOG_KEYS: [ConfigKey; 1] = [ConfigKey::DiscordLogWebhookUrl];

pub const DISCORD_KEYS: [ConfigKey; 2] = [ConfigKey::GuildId, ConfigKey::DiscordBotToken];

pub const BLOXLINK_KEYS: [ConfigKey; 2] = [ConfigKey::BloxlinkKey, ConfigKey::GuildId];

impl ConfigKey {
    pub const ALL: [ConfigKey; 5] = [
        ConfigKey::GuildId,
        ConfigKey::DiscordBotToken,
        ConfigKey::DiscordLogWebhookUrl,
        ConfigKey::BloxlinkKey,
        ConfigKey::SharedSecret,
    ];

    /// Environment variable name, also used when reporting missing keys.
    pub fn env_name(&self) -> &'static str {
        match self {
            ConfigKey::GuildId => "GUILD_ID",
            ConfigKey::DiscordBotToken => "DISCORD_BOT_TOKEN",
            ConfigKey::DiscordLogWebhookUrl => "DISCORD_LOG_WEBHOOK_URL",
            ConfigKey::BloxlinkKey => "BLOXLINK_KEY",
            ConfigKey::SharedSecret => "SHARED_SECRET",
        }
    }
}
