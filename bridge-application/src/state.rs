use std::sync::Arc;

use bridge_domain::ports::{DiscordApi, LinkingService, NotificationSink};
use bridge_domain::{ConfigKey, RuntimeConfig};

use crate::{AppError, Metrics};

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub linking: Arc<dyn LinkingService>,
    pub discord: Arc<dyn DiscordApi>,
    pub notifier: Arc<dyn NotificationSink>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    /// Fails with the names of any of `keys` that are not configured.
    pub fn require(&self, keys: &[ConfigKey]) -> Result<(), AppError> {
        let missing = self.config.missing_keys(keys);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Misconfigured(missing))
        }
    }
}
