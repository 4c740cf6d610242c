//! Shared field checks used by every section's `validate()`.
//!
//! Each check returns `ConfigError::Validation` carrying the dotted field
//! path it was given, so the first malformed value stops loading with a
//! message that points straight at the offending key.

use super::error::ConfigError;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Scheme, then a host made of labels, then an optional port and path.
static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*(:[0-9]{1,5})?(/[^ \t\r\n]*)?$")
        .expect("url pattern is valid")
});

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex pattern is valid"));

pub fn non_empty(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::invalid(field, "must not be empty"));
    }
    Ok(())
}

pub fn email(field: &str, value: &str) -> Result<(), ConfigError> {
    if !EMAIL.is_match(value) {
        return Err(ConfigError::invalid(
            field,
            format!("`{value}` is not a valid email address"),
        ));
    }
    Ok(())
}

/// Absolute `http://` or `https://` URL.
pub fn url(field: &str, value: &str) -> Result<(), ConfigError> {
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(ConfigError::invalid(
            field,
            "must start with http:// or https://",
        ));
    }
    if !URL.is_match(value) {
        return Err(ConfigError::invalid(
            field,
            format!("`{value}` is not a well-formed URL"),
        ));
    }
    Ok(())
}

pub fn https_url(field: &str, value: &str) -> Result<(), ConfigError> {
    if !value.starts_with("https://") {
        return Err(ConfigError::invalid(field, "must start with https://"));
    }
    url(field, value)
}

/// `#rrggbb`, case-insensitive.
pub fn hex_color(field: &str, value: &str) -> Result<(), ConfigError> {
    if !HEX_COLOR.is_match(value) {
        return Err(ConfigError::invalid(
            field,
            format!("`{value}` is not a 6-digit hex color"),
        ));
    }
    Ok(())
}

/// Non-empty pattern whose `{...}` alternations are balanced.
pub fn glob(field: &str, value: &str) -> Result<(), ConfigError> {
    non_empty(field, value)?;

    let mut depth = 0usize;
    for ch in value.chars() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| ConfigError::invalid(field, "has an unmatched `}`"))?;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(ConfigError::invalid(field, "has an unmatched `{`"));
    }
    Ok(())
}

/// Return the first value that appears twice, if any.
pub fn first_duplicate<T: PartialEq>(items: &[T]) -> Option<(usize, &T)> {
    items
        .iter()
        .enumerate()
        .find(|(i, item)| items[..*i].contains(item))
}
