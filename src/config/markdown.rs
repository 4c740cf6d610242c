//! `[markdown]` section configuration.
//!
//! Syntax highlighting options handed to the markdown renderer.
//!
//! Only the dual-theme shape (`themes = { light, dark }`) is accepted. The
//! single-theme shape (`theme = "..."`) is rejected with a dedicated message
//! by [`reject_single_theme`], before serde would report it as an unknown
//! field.

use super::{defaults, error::ConfigError, validate};
use serde::{Deserialize, Serialize};

/// `[markdown]` section in folio.toml.
///
/// # Example
/// ```toml
/// [markdown.shiki.themes]
/// light = "kanagawa-wave"
/// dark = "kanagawa-wave"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkdownConfig {
    /// Highlighter options.
    pub shiki: ShikiConfig,
}

/// `[markdown.shiki]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShikiConfig {
    /// Theme used for each color scheme. Required: there is no site-neutral
    /// choice to fall back on.
    pub themes: ThemePair,

    /// Soft-wrap long lines in code blocks.
    #[serde(default = "defaults::r#false")]
    pub wrap: bool,
}

/// `[markdown.shiki.themes]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemePair {
    pub light: String,
    pub dark: String,
}

impl MarkdownConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let themes = &self.shiki.themes;
        validate::non_empty("markdown.shiki.themes.light", &themes.light)?;
        validate::non_empty("markdown.shiki.themes.dark", &themes.dark)?;
        Ok(())
    }
}

/// Reject `[markdown.shiki] theme = "..."` in a raw document.
pub fn reject_single_theme(document: &toml::Table) -> Result<(), ConfigError> {
    let shiki = document
        .get("markdown")
        .and_then(|v| v.get("shiki"))
        .and_then(|v| v.as_table());

    if let Some(shiki) = shiki
        && shiki.contains_key("theme")
    {
        return Err(ConfigError::invalid(
            "markdown.shiki.theme",
            "a single theme is not supported; set both `light` and `dark` under [markdown.shiki.themes]",
        ));
    }
    Ok(())
}
