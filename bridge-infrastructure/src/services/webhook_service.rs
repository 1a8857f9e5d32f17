use async_trait::async_trait;
use reqwest::Client;

use bridge_domain::ports::NotificationSink;
use bridge_domain::{DeliveryOutcome, OutboundMessage, RuntimeConfig};

/// Posts rendered notifications to the Discord log webhook.
pub struct WebhookService {
    http: Client,
    url: Option<String>,
}

impl WebhookService {
    pub fn new(http: Client, config: &RuntimeConfig) -> Self {
        Self {
            http,
            url: config.discord_log_webhook_url.clone(),
        }
    }
}

#[async_trait]
impl NotificationSink for WebhookService {
    async fn deliver(&self, message: &OutboundMessage) -> DeliveryOutcome {
        let Some(url) = self.url.as_deref() else {
            return DeliveryOutcome::Failed("webhook url not configured".to_string());
        };
        let sent = self.http.post(url).json(message).send().await;
        match sent {
            Ok(response) if response.status().is_success() => DeliveryOutcome::Delivered,
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                DeliveryOutcome::Failed(format!("webhook responded {}: {}", status, body))
            }
            Err(err) => DeliveryOutcome::Failed(err.to_string()),
        }
    }
}
