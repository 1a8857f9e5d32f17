// Notification format value object

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationFormat {
    #[default]
    Embed,
    Text,
}

impl NotificationFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationFormat::Embed => "embed",
            NotificationFormat::Text => "text",
        }
    }
}

impl From<&str> for NotificationFormat {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "text" | "plain" => NotificationFormat::Text,
            _ => NotificationFormat::Embed,
        }
    }
}
