use crate::utils::error::{ProfileError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_-]{3,16}$").expect("valid username regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+@[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)+$").expect("valid email regex")
});

const STORE_URL_SCHEMES: &[&str] = &["redis", "redis+unix", "unix"];
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Lowercase letters, digits, `_` and `-`, 3 to 16 characters.
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_RE.is_match(username)
}

/// `local@domain.tld` where every part is `[A-Za-z0-9_-]+` and the domain has
/// at least one dot-separated suffix.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_store_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ProfileError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "Store URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) if STORE_URL_SCHEMES.contains(&url.scheme()) => Ok(()),
        Ok(url) => Err(ProfileError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!(
                "Unsupported URL scheme: {}. Supported schemes: {}",
                url.scheme(),
                STORE_URL_SCHEMES.join(", ")
            ),
        }),
        Err(e) => Err(ProfileError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ProfileError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    validate_non_empty_string(field_name, level)?;

    if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        return Err(ProfileError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
        });
    }
    Ok(())
}
