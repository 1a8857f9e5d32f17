use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use bridge_application::{AppState, Metrics};
use bridge_domain::{ConfigKey, RuntimeConfig};
use bridge_infrastructure::{
    build_http_client, AppConfig, BloxlinkClient, DiscordClient, WebhookService,
};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();
        report_missing_keys(&runtime_config);

        let http = build_http_client(runtime_config.request_timeout_seconds)?;
        let state = AppState {
            linking: Arc::new(BloxlinkClient::new(http.clone(), &runtime_config)),
            discord: Arc::new(DiscordClient::new(http.clone(), &runtime_config)),
            notifier: Arc::new(WebhookService::new(http, &runtime_config)),
            metrics: Arc::new(Metrics::default()),
            config: runtime_config,
        };

        Ok(Self { state })
    }
}

/// Missing keys are not fatal: the endpoints needing them answer with a
/// misconfig error instead.
fn report_missing_keys(config: &RuntimeConfig) {
    let missing = config.missing_keys(&ConfigKey::ALL);
    if missing.is_empty() {
        info!("all bridge keys configured");
    } else {
        warn!("bridge keys not configured: {}", missing.join(", "));
    }
}
