// Game event entity
// One inbound `/log` submission from the game server

use serde_json::Value;

use crate::utils::{is_truthy, non_empty_text, value_text};
use crate::value_objects::EventKind;

pub const REQUIRED_EVENT_FIELDS: [&str; 2] = ["type", "playerId"];

/// Body as posted by the game; every field is optional until validated.
/// A field sent as `null` is kept as `Some(Value::Null)`, distinct from absent.
#[derive(Debug, Clone, Default)]
pub struct GameEventPayload {
    pub event_type: Option<Value>,
    pub player_id: Option<Value>,
    pub player_name: Option<Value>,
    pub data: Option<Value>,
}

impl GameEventPayload {
    /// Anything that is not a JSON object carries no fields.
    pub fn from_json(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            return Self::default();
        };
        Self {
            event_type: fields.remove("type"),
            player_id: fields.remove("playerId"),
            player_name: fields.remove("playerName"),
            data: fields.remove("data"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameEvent {
    pub kind: EventKind,
    pub type_tag: String,
    pub player_id: String,
    pub player_name: Option<String>,
    pub data: Option<Value>,
}

impl GameEvent {
    /// Returns `None` when `type` is empty or `playerId` is absent. An
    /// explicit `null` player id is kept and shown as `-`.
    pub fn from_payload(payload: GameEventPayload) -> Option<Self> {
        let type_tag = payload.event_type.filter(is_truthy).map(|v| value_text(&v))?;
        let player_id = payload.player_id.map(|v| {
            if v.is_null() {
                "-".to_string()
            } else {
                value_text(&v)
            }
        })?;
        Some(Self {
            kind: EventKind::from(type_tag.as_str()),
            type_tag,
            player_id,
            player_name: non_empty_text(payload.player_name.as_ref()),
            data: payload.data.filter(|v| !v.is_null()),
        })
    }

    pub fn data_field(&self, key: &str) -> Option<&Value> {
        self.data.as_ref().and_then(|data| data.get(key))
    }
}
