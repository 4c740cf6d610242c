//! `[[socials]]` section configuration.
//!
//! Ordered list of social profile links; the order in the file is the
//! order they are rendered in.

use super::{error::ConfigError, validate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Platforms a social link can point to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Github,
    Linkedin,
    Twitter,
    Mastodon,
    Bluesky,
    Youtube,
    Email,
    Rss,
}

impl Platform {
    pub const fn as_str(self) -> &'static str {
        match self {
            Platform::Github => "github",
            Platform::Linkedin => "linkedin",
            Platform::Twitter => "twitter",
            Platform::Mastodon => "mastodon",
            Platform::Bluesky => "bluesky",
            Platform::Youtube => "youtube",
            Platform::Email => "email",
            Platform::Rss => "rss",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `[[socials]]` entry.
///
/// # Example
/// ```toml
/// [[socials]]
/// name = "github"
/// href = "https://github.com/alemar99"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub name: Platform,
    pub href: String,
}

/// Validate the whole list: every link is an https URL and no platform is
/// listed twice.
pub fn validate(socials: &[SocialLink]) -> Result<(), ConfigError> {
    for (i, link) in socials.iter().enumerate() {
        validate::https_url(&format!("socials[{i}].href"), &link.href)?;
    }

    let names: Vec<Platform> = socials.iter().map(|link| link.name).collect();
    if let Some((i, name)) = validate::first_duplicate(&names) {
        return Err(ConfigError::invalid(
            format!("socials[{i}].name"),
            format!("platform `{name}` is listed more than once"),
        ));
    }

    Ok(())
}
