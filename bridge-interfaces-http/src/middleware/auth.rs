use axum::http::HeaderMap;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use bridge_domain::{ConfigKey, RuntimeConfig};

use crate::error::HttpError;

type HmacSha256 = Hmac<Sha256>;

/// Both sides are tagged under this key before comparison, so timing
/// depends on neither the secret's bytes nor its length.
const COMPARE_KEY: &[u8] = b"bloxbridge/shared-secret";

/// Checks the shared-secret header. A bridge without a configured secret
/// refuses every protected request as misconfigured.
pub fn authorize(config: &RuntimeConfig, headers: &HeaderMap) -> Result<(), HttpError> {
    let Some(expected) = config.value(ConfigKey::SharedSecret) else {
        return Err(HttpError::Misconfigured(vec![
            ConfigKey::SharedSecret.env_name().to_string(),
        ]));
    };
    let provided = headers
        .get(config.secret_header.as_str())
        .and_then(|value| value.to_str().ok());
    match provided {
        Some(provided) if secrets_match(expected, provided) => Ok(()),
        _ => Err(HttpError::Unauthorized),
    }
}

fn secrets_match(expected: &str, provided: &str) -> bool {
    let Ok(mut expected_mac) = HmacSha256::new_from_slice(COMPARE_KEY) else {
        return false;
    };
    expected_mac.update(expected.as_bytes());
    let expected_tag = expected_mac.finalize().into_bytes();

    let Ok(mut provided_mac) = HmacSha256::new_from_slice(COMPARE_KEY) else {
        return false;
    };
    provided_mac.update(provided.as_bytes());
    provided_mac.verify_slice(&expected_tag).is_ok()
}
