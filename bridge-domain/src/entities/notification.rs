// Notification entities
// Discord webhook message shapes and delivery outcome

use serde::Serialize;

pub const COLOR_BLUE: u32 = 0x2b88ff;
pub const COLOR_GREEN: u32 = 0x22cc66;
pub const COLOR_RED: u32 = 0xff3333;
pub const COLOR_GRAY: u32 = 0x2f3136;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
}

impl EmbedField {
    pub fn inline(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            inline: Some(true),
        }
    }

    pub fn block(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            inline: Some(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub color: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    pub timestamp: String,
}

/// Webhook body: `{"content": ...}` or `{"embeds": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum OutboundMessage {
    #[serde(rename = "content")]
    Text(String),
    #[serde(rename = "embeds")]
    Embeds(Vec<Embed>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    Failed(String),
}

impl DeliveryOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryOutcome::Delivered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn outbound_message_serializes_to_webhook_shapes() {
        let text = serde_json::to_value(OutboundMessage::Text("hi".to_string())).expect("json");
        assert_eq!(text, json!({"content": "hi"}));

        let embeds = serde_json::to_value(OutboundMessage::Embeds(vec![Embed {
            title: "Player Left".to_string(),
            description: None,
            color: COLOR_RED,
            fields: Vec::new(),
            timestamp: "2026-01-01T00:00:00.000Z".to_string(),
        }]))
        .expect("json");
        assert_eq!(
            embeds,
            json!({"embeds": [{
                "title": "Player Left",
                "color": COLOR_RED,
                "timestamp": "2026-01-01T00:00:00.000Z"
            }]})
        );
    }
}
