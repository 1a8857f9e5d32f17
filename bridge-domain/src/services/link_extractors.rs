// Discord id extraction from linking-service responses
//
// Bloxlink has answered with several body shapes over time. Each extractor
// probes one of them; they are tried in order and the first hit wins.

use serde_json::Value;

pub type LinkExtractor = fn(&Value) -> Option<String>;

pub const LINK_EXTRACTORS: [(&str, LinkExtractor); 5] = [
    ("discordId", top_level_id),
    ("primaryAccount.discordId", primary_account_id),
    ("data.primaryAccount.discordId", nested_primary_account_id),
    ("discordIDs[0]", first_listed_id),
    ("data.discordIDs[0]", nested_first_listed_id),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch {
    pub shape: &'static str,
    pub discord_id: String,
}

pub fn extract_discord_id(body: &Value) -> Option<LinkMatch> {
    LINK_EXTRACTORS.iter().find_map(|(shape, extract)| {
        extract(body).map(|discord_id| LinkMatch {
            shape: *shape,
            discord_id,
        })
    })
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn top_level_id(body: &Value) -> Option<String> {
    body.get("discordId").and_then(id_text)
}

fn primary_account_id(body: &Value) -> Option<String> {
    body.get("primaryAccount")
        .and_then(|account| account.get("discordId"))
        .and_then(id_text)
}

fn nested_primary_account_id(body: &Value) -> Option<String> {
    body.get("data").and_then(primary_account_id)
}

fn first_listed_id(body: &Value) -> Option<String> {
    body.get("discordIDs")
        .and_then(Value::as_array)
        .and_then(|ids| ids.first())
        .and_then(id_text)
}

fn nested_first_listed_id(body: &Value) -> Option<String> {
    body.get("data").and_then(first_listed_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_known_shape_is_recognized() {
        let cases = [
            (json!({"discordId": "1"}), "discordId"),
            (json!({"primaryAccount": {"discordId": "1"}}), "primaryAccount.discordId"),
            (
                json!({"data": {"primaryAccount": {"discordId": "1"}}}),
                "data.primaryAccount.discordId",
            ),
            (json!({"discordIDs": ["1", "2"]}), "discordIDs[0]"),
            (json!({"data": {"discordIDs": [1]}}), "data.discordIDs[0]"),
        ];
        for (body, shape) in cases {
            let found = extract_discord_id(&body).expect("shape should match");
            assert_eq!(found.shape, shape);
            assert_eq!(found.discord_id, "1");
        }
    }

    #[test]
    fn earlier_shapes_take_priority() {
        let body = json!({
            "discordIDs": ["from-list"],
            "primaryAccount": {"discordId": "from-primary"},
        });
        let found = extract_discord_id(&body).expect("match");
        assert_eq!(found.discord_id, "from-primary");
    }

    #[test]
    fn empty_values_fall_through_to_later_shapes() {
        let body = json!({
            "discordId": "",
            "primaryAccount": {"discordId": null},
            "discordIDs": [],
            "data": {"discordIDs": ["77"]},
        });
        let found = extract_discord_id(&body).expect("match");
        assert_eq!(found.shape, "data.discordIDs[0]");
        assert_eq!(found.discord_id, "77");
        assert!(extract_discord_id(&json!({"error": "not found"})).is_none());
    }
}
