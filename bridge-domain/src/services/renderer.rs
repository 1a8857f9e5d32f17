// Notification renderer
// Turns a game event into the Discord webhook message for it

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::entities::{
    Embed, EmbedField, GameEvent, OutboundMessage, COLOR_BLUE, COLOR_GRAY, COLOR_GREEN, COLOR_RED,
};
use crate::utils::{non_empty_text, value_text};
use crate::value_objects::{EventKind, NotificationFormat};

/// Discord rejects embed field values longer than this.
const FIELD_VALUE_LIMIT: usize = 1024;
/// Discord rejects message `content` longer than this.
const CONTENT_LIMIT: usize = 2000;

pub fn render_notification(
    event: &GameEvent,
    roles_text: Option<&str>,
    format: NotificationFormat,
    now: DateTime<Utc>,
) -> OutboundMessage {
    match format {
        NotificationFormat::Embed => OutboundMessage::Embeds(vec![render_embed(event, roles_text, now)]),
        NotificationFormat::Text => OutboundMessage::Text(render_text(event, roles_text, now)),
    }
}

pub fn render_embed(event: &GameEvent, roles_text: Option<&str>, now: DateTime<Utc>) -> Embed {
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    match &event.kind {
        EventKind::Status => status_embed(event, timestamp),
        EventKind::Join | EventKind::Left => presence_embed(event, roles_text, timestamp),
        EventKind::Summit => {
            generic_embed("Summit", event, Some(&summit_summary(event)), timestamp)
        }
        EventKind::Other(tag) => generic_embed(tag, event, event.data.as_ref(), timestamp),
    }
}

fn status_embed(event: &GameEvent, timestamp: String) -> Embed {
    let online = event
        .data_field("online")
        .filter(|v| !v.is_null())
        .map(value_text)
        .unwrap_or_else(|| "0".to_string());
    let uptime = event
        .data_field("uptimeMin")
        .filter(|v| !v.is_null())
        .map(value_text)
        .unwrap_or_else(|| "n/a".to_string());
    Embed {
        title: "Server Status Update".to_string(),
        description: None,
        color: COLOR_BLUE,
        fields: vec![
            EmbedField::inline("Players Online", online),
            EmbedField::inline("Server Uptime", format!("{} minutes", uptime)),
        ],
        timestamp,
    }
}

fn presence_embed(event: &GameEvent, roles_text: Option<&str>, timestamp: String) -> Embed {
    let username = event.player_name.clone().unwrap_or_else(|| "-".to_string());
    let roles = roles_text
        .filter(|text| !text.is_empty())
        .unwrap_or("-")
        .to_string();
    let summit_title = non_empty_text(event.data_field("summitTitle")).unwrap_or_else(|| "-".to_string());
    let summit_count = event
        .data_field("summits")
        .filter(|v| !v.is_null())
        .map(value_text)
        .unwrap_or_else(|| "0".to_string());

    let (title, verb, color, detail) = if event.kind == EventKind::Join {
        let display_name =
            non_empty_text(event.data_field("displayName")).unwrap_or_else(|| "-".to_string());
        ("Player Joined", "joined", COLOR_GREEN, EmbedField::inline("Display Name", display_name))
    } else {
        let session = non_empty_text(event.data_field("session"))
            .unwrap_or_else(|| "Calculating...".to_string());
        ("Player Left", "left", COLOR_RED, EmbedField::inline("Session Time", session))
    };

    Embed {
        title: title.to_string(),
        description: Some(format!("{} {} the server", username, verb)),
        color,
        fields: vec![
            EmbedField::inline("User ID", event.player_id.clone()),
            detail,
            EmbedField::block("Roles", roles),
            EmbedField::inline("Summit Title", summit_title),
            EmbedField::inline("Summit Count", summit_count),
        ],
        timestamp,
    }
}

fn generic_embed(tag: &str, event: &GameEvent, data: Option<&Value>, timestamp: String) -> Embed {
    let fields = data
        .map(|data| {
            vec![EmbedField {
                name: "Data".to_string(),
                value: fenced_json(data, FIELD_VALUE_LIMIT),
                inline: None,
            }]
        })
        .unwrap_or_default();
    Embed {
        title: format!("[{}]", tag.to_uppercase()),
        description: Some(player_line(event)),
        color: COLOR_GRAY,
        fields,
        timestamp,
    }
}

/// Plain `content` rendering; the data block is cut so the whole message
/// stays within Discord's content limit.
pub fn render_text(event: &GameEvent, roles_text: Option<&str>, now: DateTime<Utc>) -> String {
    let (tag, data) = if event.kind == EventKind::Summit {
        ("Summit", Some(summit_summary(event)))
    } else {
        (event.type_tag.as_str(), event.data.clone())
    };
    let mut lines = vec![format!("**[{}]**", tag.to_uppercase()), player_line(event)];
    if let Some(roles) = roles_text {
        lines.push(format!("Roles: {}", roles));
    }
    let footer = format!("At: <t:{}:F>", now.timestamp());
    if let Some(data) = data {
        let used: usize = lines
            .iter()
            .chain(std::iter::once(&footer))
            .map(|line| line.chars().count() + 1)
            .sum();
        lines.push(fenced_json(&data, CONTENT_LIMIT.saturating_sub(used)));
    }
    lines.push(footer);
    lines.join("\n")
}

/// Summit notifications only show the title and count.
fn summit_summary(event: &GameEvent) -> Value {
    let mut summary = Map::new();
    for key in ["summitTitle", "summits"] {
        if let Some(value) = event.data_field(key) {
            summary.insert(key.to_string(), value.clone());
        }
    }
    Value::Object(summary)
}

fn player_line(event: &GameEvent) -> String {
    format!(
        "Player: {} ({})",
        event.player_name.as_deref().unwrap_or("unknown"),
        event.player_id
    )
}

fn fenced_json(data: &Value, limit: usize) -> String {
    const OPEN: &str = "```json\n";
    const CLOSE: &str = "\n```";
    let pretty = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
    let budget = limit.saturating_sub(OPEN.len() + CLOSE.len());
    let body = if pretty.chars().count() > budget {
        let mut cut: String = pretty.chars().take(budget.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        pretty
    };
    format!("{}{}{}", OPEN, body, CLOSE)
}
