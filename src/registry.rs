//! Process-wide, read-only registry of site constants.
//!
//! The registry is installed once, validated on the way in, and never
//! changes afterwards. Readers get `&'static` references and can share them
//! across threads freely.
//!
//! ```text
//!   folio.toml / built-in ──► SiteConfig::validate ──► REGISTRY (OnceLock)
//!                                                        │
//!             templates, sitemap, theming ◄── get() ─────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use crate::registry;
//!
//! let reg = registry::get()?;
//! println!("{}", reg.site().name);
//! ```

use crate::config::{ConfigError, Metadata, PageKind, Site, SiteConfig, SocialLink};
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Registry is already initialized")]
    AlreadyInitialized,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A validated configuration, exposed by constant name.
#[derive(Debug)]
pub struct Registry {
    config: SiteConfig,
}

/// A named constant, as looked up by [`Registry::constant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Constant<'a> {
    Site(&'a Site),
    Page(&'a Metadata),
    Socials(&'a [SocialLink]),
}

impl Registry {
    /// Names of every exported constant.
    pub const NAMES: [&'static str; 7] =
        ["SITE", "HOME", "BLOG", "WORK", "PROJECTS", "ABOUT", "SOCIALS"];

    /// Validate `config` and wrap it.
    pub fn new(config: SiteConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn site(&self) -> &Site {
        &self.config.site
    }

    pub fn page(&self, kind: PageKind) -> &Metadata {
        self.config.pages.get(kind)
    }

    pub fn home(&self) -> &Metadata {
        self.page(PageKind::Home)
    }

    pub fn blog(&self) -> &Metadata {
        self.page(PageKind::Blog)
    }

    pub fn work(&self) -> &Metadata {
        self.page(PageKind::Work)
    }

    pub fn projects(&self) -> &Metadata {
        self.page(PageKind::Projects)
    }

    pub fn about(&self) -> &Metadata {
        self.page(PageKind::About)
    }

    pub fn socials(&self) -> &[SocialLink] {
        &self.config.socials
    }

    /// Look a constant up by its exported name (`SITE`, `HOME`, ..., `SOCIALS`).
    pub fn constant(&self, name: &str) -> Option<Constant<'_>> {
        match name {
            "SITE" => Some(Constant::Site(self.site())),
            "SOCIALS" => Some(Constant::Socials(self.socials())),
            _ => PageKind::from_constant(name).map(|kind| Constant::Page(self.page(kind))),
        }
    }
}

/// Install `config` as the process-wide registry.
///
/// Fails if the config is invalid or a registry is already installed,
/// including one installed implicitly by [`get`].
pub fn init(config: SiteConfig) -> Result<&'static Registry, RegistryError> {
    let registry = Registry::new(config)?;
    REGISTRY
        .set(registry)
        .map_err(|_| RegistryError::AlreadyInitialized)?;
    REGISTRY.get().ok_or(RegistryError::AlreadyInitialized)
}

/// The installed registry, installing the built-in config on first use.
pub fn get() -> Result<&'static Registry, RegistryError> {
    if let Some(registry) = REGISTRY.get() {
        return Ok(registry);
    }
    let registry = Registry::new(SiteConfig::builtin()?)?;
    Ok(REGISTRY.get_or_init(|| registry))
}
