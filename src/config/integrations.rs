//! Top-level `integrations` list.
//!
//! Build-pipeline extensions to enable, in the order they are registered.

use super::{error::ConfigError, validate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Extension enabled in the external build pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Integration {
    /// MDX content support.
    Mdx,
    /// `sitemap-index.xml` emission; needs `[site] url`.
    Sitemap,
    /// Utility-first styling; reads `[style]`.
    Tailwind,
}

impl Integration {
    pub const fn as_str(self) -> &'static str {
        match self {
            Integration::Mdx => "mdx",
            Integration::Sitemap => "sitemap",
            Integration::Tailwind => "tailwind",
        }
    }

    /// Package providing the integration.
    pub const fn package(self) -> &'static str {
        match self {
            Integration::Mdx => "@astrojs/mdx",
            Integration::Sitemap => "@astrojs/sitemap",
            Integration::Tailwind => "@astrojs/tailwind",
        }
    }
}

impl fmt::Display for Integration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn validate(integrations: &[Integration]) -> Result<(), ConfigError> {
    if let Some((i, integration)) = validate::first_duplicate(integrations) {
        return Err(ConfigError::invalid(
            format!("integrations[{i}]"),
            format!("`{integration}` is enabled more than once"),
        ));
    }
    Ok(())
}
