use anyhow::{anyhow, Result};

pub fn validate_http_url(field: &str, value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("{} must not be empty", field));
    }
    if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
        return Err(anyhow!("{} must be an http(s) url", field));
    }
    Ok(())
}

pub fn validate_header_name(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(anyhow!("secret_header must not be empty"));
    }
    if !value
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
    {
        return Err(anyhow!("secret_header '{}' is not a valid header name", value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_must_be_http() {
        assert!(validate_http_url("discord_api_base", "https://discord.com/api/v10").is_ok());
        assert!(validate_http_url("discord_api_base", "ftp://x").is_err());
        assert!(validate_http_url("discord_api_base", "  ").is_err());
    }

    #[test]
    fn header_names_are_tokens() {
        assert!(validate_header_name("x-game-secret").is_ok());
        assert!(validate_header_name("x game").is_err());
        assert!(validate_header_name("").is_err());
    }
}
