//! Site configuration management for `folio.toml`.
//!
//! # Sections
//!
//! | Section          | Purpose                                          |
//! |------------------|--------------------------------------------------|
//! | `integrations`   | Build-pipeline extensions, in order              |
//! | `[site]`         | Identity (name, email, url, homepage counts)     |
//! | `[pages.*]`      | Title and description per page                   |
//! | `[[socials]]`    | Social profile links, in display order           |
//! | `[markdown]`     | Syntax highlighting themes                       |
//! | `[style]`        | Design tokens (colors, fonts, plugins, globs)    |
//!
//! # Example
//!
//! ```toml
//! integrations = ["mdx", "sitemap", "tailwind"]
//!
//! [site]
//! name = "Alice"
//! email = "alice@example.com"
//! url = "https://alice.dev"
//!
//! [pages.home]
//! title = "Home"
//! description = "Alice's personal website."
//!
//! [[socials]]
//! name = "github"
//! href = "https://github.com/alice"
//!
//! [markdown.shiki.themes]
//! light = "kanagawa-wave"
//! dark = "kanagawa-wave"
//! ```
//!
//! Loading is eager: [`SiteConfig::from_str`] and [`SiteConfig::from_path`]
//! parse *and* validate, so a malformed value never outlives startup.

pub mod defaults;
mod error;
mod integrations;
mod markdown;
mod pages;
mod site;
mod socials;
mod style;
mod validate;

pub use error::ConfigError;
pub use integrations::Integration;
pub use pages::{Metadata, PageKind};
pub use site::Site;
pub use socials::{Platform, SocialLink};
pub use style::{DarkMode, FontRole, PRIMARY, StylePlugin};

use markdown::MarkdownConfig;
use pages::Pages;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use style::StyleConfig;

/// Default config filename
pub const CONFIG_FILE: &str = "folio.toml";

/// The site's own configuration, compiled into the binary.
pub const BUILTIN: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/folio.toml"));

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Path the config was read from; `None` for the built-in config.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Enabled integrations
    pub integrations: Vec<Integration>,

    /// Site identity
    pub site: Site,

    /// Per-page metadata
    pub pages: Pages,

    /// Social links, in display order
    #[serde(default)]
    pub socials: Vec<SocialLink>,

    /// Markdown rendering options
    pub markdown: MarkdownConfig,

    /// Design tokens
    #[serde(default)]
    pub style: StyleConfig,
}

impl SiteConfig {
    /// Parse and validate configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let document: toml::Table = toml::from_str(content)?;
        markdown::reject_single_theme(&document)?;

        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// The configuration compiled into the binary.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_str(BUILTIN)
    }

    /// Serialize back to `folio.toml` form.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every section; the first violation is returned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        integrations::validate(&self.integrations)?;
        self.site.validate()?;
        self.pages.validate()?;
        socials::validate(&self.socials)?;
        self.markdown.validate()?;
        self.style.validate()?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
