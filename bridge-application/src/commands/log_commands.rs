use chrono::Utc;
use tracing::{debug, info, warn};

use bridge_domain::{
    render_notification, DeliveryOutcome, GameEvent, GameEventPayload, NotificationFormat,
    REQUIRED_EVENT_FIELDS, ROLE_LOOKUP_KEYS,
};

use crate::dtos::LogResponse;
use crate::queries::role_queries;
use crate::{AppError, AppState};

#[derive(Debug, Clone)]
pub struct LogReceipt {
    pub format: NotificationFormat,
    pub outcome: DeliveryOutcome,
}

impl From<LogReceipt> for LogResponse {
    fn from(receipt: LogReceipt) -> Self {
        LogResponse {
            ok: true,
            logged: true,
            format: receipt.format,
            delivered: receipt.outcome.is_delivered(),
        }
    }
}

/// Validate one game event, render it and hand it to the notification sink.
///
/// Delivery failure is logged and reported in the receipt; it never turns
/// into an error for the game server.
pub async fn process_log_event(
    state: &AppState,
    payload: GameEventPayload,
) -> Result<LogReceipt, AppError> {
    let event = GameEvent::from_payload(payload).ok_or_else(|| {
        AppError::MissingFields(REQUIRED_EVENT_FIELDS.iter().map(|f| f.to_string()).collect())
    })?;
    state.metrics.record_event();

    let roles_text = if event.kind.needs_roles() {
        Some(roles_text_for(state, &event.player_id).await)
    } else {
        None
    };

    let format = state.config.notification_format;
    let message = render_notification(&event, roles_text.as_deref(), format, Utc::now());
    let outcome = state.notifier.deliver(&message).await;
    state.metrics.record_delivery(outcome.is_delivered());
    match &outcome {
        DeliveryOutcome::Delivered => info!(
            "forwarded {} event for player {} as {}",
            event.type_tag,
            event.player_id,
            format.as_str()
        ),
        DeliveryOutcome::Failed(reason) => warn!(
            "notification for {} event (player {}) not delivered: {}",
            event.type_tag, event.player_id, reason
        ),
    }

    Ok(LogReceipt { format, outcome })
}

async fn roles_text_for(state: &AppState, player_id: &str) -> String {
    if !state.config.has_all(&ROLE_LOOKUP_KEYS) {
        debug!("role lookup keys not configured, marking {} unverified", player_id);
        return "unverified".to_string();
    }
    role_queries::lookup_roles(state, player_id)
        .await
        .roles_text()
}
