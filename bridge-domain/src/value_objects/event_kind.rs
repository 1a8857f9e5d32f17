// Game event kind value object

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Status,
    Join,
    Left,
    Summit,
    Other(String),
}

impl EventKind {
    /// Join and left notifications carry the player's guild roles.
    pub fn needs_roles(&self) -> bool {
        matches!(self, EventKind::Join | EventKind::Left)
    }
}

impl From<&str> for EventKind {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "status" | "server_status" => EventKind::Status,
            "join" | "player_join" => EventKind::Join,
            "left" | "player_left" => EventKind::Left,
            "summit" | "summit_update" => EventKind::Summit,
            _ => EventKind::Other(s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_and_case_map_to_the_same_kind() {
        assert_eq!(EventKind::from("STATUS"), EventKind::Status);
        assert_eq!(EventKind::from("server_status"), EventKind::Status);
        assert_eq!(EventKind::from("Player_Join"), EventKind::Join);
        assert_eq!(EventKind::from("left"), EventKind::Left);
        assert_eq!(EventKind::from("summit_update"), EventKind::Summit);
    }

    #[test]
    fn unknown_tags_keep_their_original_spelling() {
        assert_eq!(
            EventKind::from("Checkpoint"),
            EventKind::Other("Checkpoint".to_string())
        );
        assert!(!EventKind::from("Checkpoint").needs_roles());
        assert!(EventKind::from("join").needs_roles());
    }
}
