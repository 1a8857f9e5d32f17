// In-memory port fakes
// Count every upstream call so tests can assert which ones happened

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use bridge_domain::ports::{DiscordApi, LinkingService, NotificationSink};
use bridge_domain::{
    DeliveryOutcome, GuildMember, GuildRole, LookupScope, OutboundMessage, RuntimeConfig,
    UpstreamError,
};

use crate::{AppState, Metrics};

pub struct FakeLinking {
    guild: Result<Value, UpstreamError>,
    global: Result<Value, UpstreamError>,
    guild_calls: AtomicUsize,
    global_calls: AtomicUsize,
}

impl FakeLinking {
    pub fn new(guild: Result<Value, UpstreamError>, global: Result<Value, UpstreamError>) -> Self {
        Self {
            guild,
            global,
            guild_calls: AtomicUsize::new(0),
            global_calls: AtomicUsize::new(0),
        }
    }

    /// Both scopes answer successfully without any identity.
    pub fn unlinked() -> Self {
        Self::new(Ok(json!({})), Ok(json!({})))
    }

    pub fn guild_calls(&self) -> usize {
        self.guild_calls.load(Ordering::SeqCst)
    }

    pub fn global_calls(&self) -> usize {
        self.global_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LinkingService for FakeLinking {
    async fn roblox_to_discord(
        &self,
        scope: LookupScope,
        _roblox_id: &str,
    ) -> Result<Value, UpstreamError> {
        match scope {
            LookupScope::Guild => {
                self.guild_calls.fetch_add(1, Ordering::SeqCst);
                self.guild.clone()
            }
            LookupScope::Global => {
                self.global_calls.fetch_add(1, Ordering::SeqCst);
                self.global.clone()
            }
        }
    }
}

pub struct FakeDiscord {
    member: Result<GuildMember, UpstreamError>,
    roles: Result<Vec<GuildRole>, UpstreamError>,
    calls: AtomicUsize,
}

impl FakeDiscord {
    pub fn new(
        member: Result<GuildMember, UpstreamError>,
        roles: Result<Vec<GuildRole>, UpstreamError>,
    ) -> Self {
        Self {
            member,
            roles,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn member_with_roles(role_ids: &[&str], roles: &[(&str, &str)]) -> Self {
        let member = GuildMember {
            roles: role_ids.iter().map(|id| id.to_string()).collect(),
            nick: Some("nick".to_string()),
            joined_at: Some("2024-05-01T10:00:00.000000+00:00".to_string()),
        };
        let roles = roles
            .iter()
            .map(|(id, name)| GuildRole {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect();
        Self::new(Ok(member), Ok(roles))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DiscordApi for FakeDiscord {
    async fn guild_member(&self, _user_id: &str) -> Result<GuildMember, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.member.clone()
    }

    async fn guild_roles(&self) -> Result<Vec<GuildRole>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.roles.clone()
    }

    async fn current_user(&self) -> Result<Value, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!({"id": "1", "username": "bridge-bot", "bot": true}))
    }

    async fn guild(&self) -> Result<Value, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(json!({"id": "100", "name": "Summit Guild"}))
    }
}

pub struct RecordingSink {
    outcome: DeliveryOutcome,
    sent: Mutex<Vec<OutboundMessage>>,
}

impl RecordingSink {
    pub fn new(outcome: DeliveryOutcome) -> Self {
        Self {
            outcome,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn deliver(&self, message: &OutboundMessage) -> DeliveryOutcome {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(message.clone());
        }
        self.outcome.clone()
    }
}

/// Every key set, embed format, debug routes on.
pub fn configured() -> RuntimeConfig {
    RuntimeConfig {
        guild_id: Some("100".to_string()),
        discord_bot_token: Some("bot-token".to_string()),
        discord_log_webhook_url: Some("https://discord.test/api/webhooks/1/x".to_string()),
        bloxlink_key: Some("blox-key".to_string()),
        shared_secret: Some("s3cret".to_string()),
        debug_endpoints: true,
        ..RuntimeConfig::default()
    }
}

pub struct Harness {
    pub state: AppState,
    pub linking: Arc<FakeLinking>,
    pub discord: Arc<FakeDiscord>,
    pub sink: Arc<RecordingSink>,
}

impl Harness {
    pub fn new(config: RuntimeConfig, linking: FakeLinking, discord: FakeDiscord) -> Self {
        let linking = Arc::new(linking);
        let discord = Arc::new(discord);
        let sink = Arc::new(RecordingSink::new(DeliveryOutcome::Delivered));
        let state = AppState {
            config,
            linking: linking.clone(),
            discord: discord.clone(),
            notifier: sink.clone(),
            metrics: Arc::new(Metrics::default()),
        };
        Self {
            state,
            linking,
            discord,
            sink,
        }
    }

    pub fn with_sink(mut self, sink: RecordingSink) -> Self {
        let sink = Arc::new(sink);
        self.state.notifier = sink.clone();
        self.sink = sink;
        self
    }

    /// Total upstream calls of any kind, notifications included.
    pub fn upstream_calls(&self) -> usize {
        self.linking.guild_calls()
            + self.linking.global_calls()
            + self.discord.calls()
            + self.sink.sent().len()
    }
}
