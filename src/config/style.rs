//! `[style]` section configuration.
//!
//! Design tokens for the styling pipeline: dark-mode strategy, files to scan
//! for class usage, color palettes, font stacks, and plugins.

use super::{defaults, error::ConfigError, validate};
use educe::Educe;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{collections::BTreeMap, fmt};

// ============================================================================
// Enums
// ============================================================================

/// How dark mode is switched on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// Follow `prefers-color-scheme`.
    Media,
    /// Toggle with a `dark` class on the root element (default).
    #[default]
    Class,
}

/// Font roles a stack can be declared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontRole {
    Sans,
    Serif,
    Mono,
}

impl FontRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            FontRole::Sans => "sans",
            FontRole::Serif => "serif",
            FontRole::Mono => "mono",
        }
    }

    /// The framework's built-in stack for this role.
    pub const fn default_stack(self) -> &'static [&'static str] {
        use defaults::style::font_family::{MONO, SANS, SERIF};
        match self {
            FontRole::Sans => SANS,
            FontRole::Serif => SERIF,
            FontRole::Mono => MONO,
        }
    }
}

impl fmt::Display for FontRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Styling plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StylePlugin {
    Typography,
    Forms,
    AspectRatio,
    ContainerQueries,
}

impl StylePlugin {
    pub const fn as_str(self) -> &'static str {
        match self {
            StylePlugin::Typography => "typography",
            StylePlugin::Forms => "forms",
            StylePlugin::AspectRatio => "aspect-ratio",
            StylePlugin::ContainerQueries => "container-queries",
        }
    }

    /// Package the plugin is loaded from.
    pub fn package(self) -> String {
        format!("@tailwindcss/{}", self.as_str())
    }
}

impl fmt::Display for StylePlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Shade steps
// ============================================================================

/// Lightness step of a palette color: one of 50, 100, 200, ..., 900, 950.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShadeStep(u16);

impl ShadeStep {
    pub const ALL: [ShadeStep; 11] = [
        ShadeStep(50),
        ShadeStep(100),
        ShadeStep(200),
        ShadeStep(300),
        ShadeStep(400),
        ShadeStep(500),
        ShadeStep(600),
        ShadeStep(700),
        ShadeStep(800),
        ShadeStep(900),
        ShadeStep(950),
    ];

    pub fn new(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.0 == value)
    }

    #[allow(unused)]
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ShadeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// Map keys arrive as strings from TOML and as integers from other formats.
impl<'de> Deserialize<'de> for ShadeStep {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StepVisitor;

        impl de::Visitor<'_> for StepVisitor {
            type Value = ShadeStep;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a shade step (50, 100, 200, ..., 900, 950)")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ShadeStep, E> {
                u16::try_from(v)
                    .ok()
                    .and_then(ShadeStep::new)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ShadeStep, E> {
                u16::try_from(v)
                    .ok()
                    .and_then(ShadeStep::new)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ShadeStep, E> {
                v.parse::<u16>()
                    .ok()
                    .and_then(ShadeStep::new)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(StepVisitor)
    }
}

impl Serialize for ShadeStep {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

/// Shade step → `#rrggbb`.
pub type Palette = BTreeMap<ShadeStep, String>;

/// Palette that must be present with every shade step.
pub const PRIMARY: &str = "primary";

// ============================================================================
// Main StyleConfig
// ============================================================================

/// `[style]` section in folio.toml - design tokens.
///
/// # Example
/// ```toml
/// [style]
/// dark_mode = "class"
/// content = ["./src/**/*.{astro,md,mdx}"]
/// plugins = ["typography"]
///
/// [style.colors.primary]
/// 50 = "#f5f8f7"
/// # ... every step up to 950
///
/// [style.font_family]
/// sans = ["Inter"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    #[serde(default = "defaults::style::dark_mode")]
    #[educe(Default = defaults::style::dark_mode())]
    pub dark_mode: DarkMode,

    /// Globs of files scanned for class names.
    #[serde(default = "defaults::style::content")]
    #[educe(Default = defaults::style::content())]
    pub content: Vec<String>,

    /// Append the framework's default stack after each declared font.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub extend_default_fonts: bool,

    #[serde(default)]
    pub plugins: Vec<StylePlugin>,

    /// Palette name → shades.
    #[serde(default)]
    pub colors: BTreeMap<String, Palette>,

    /// Font role → family names, most preferred first.
    #[serde(default)]
    pub font_family: BTreeMap<FontRole, Vec<String>>,
}

impl StyleConfig {
    /// Font stack for `role` as the pipeline sees it, with the default stack
    /// appended when `extend_default_fonts` is set.
    pub fn font_stack(&self, role: FontRole) -> Vec<String> {
        let mut stack = self.font_family.get(&role).cloned().unwrap_or_default();
        if self.extend_default_fonts {
            stack.extend(role.default_stack().iter().map(|s| (*s).to_owned()));
        }
        stack
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.content.is_empty() {
            return Err(ConfigError::invalid(
                "style.content",
                "must have at least one glob",
            ));
        }
        for (i, pattern) in self.content.iter().enumerate() {
            validate::glob(&format!("style.content[{i}]"), pattern)?;
        }

        if let Some((i, plugin)) = validate::first_duplicate(&self.plugins) {
            return Err(ConfigError::invalid(
                format!("style.plugins[{i}]"),
                format!("`{plugin}` is enabled more than once"),
            ));
        }

        self.validate_colors()?;

        for (role, families) in &self.font_family {
            let field = format!("style.font_family.{role}");
            if families.is_empty() {
                return Err(ConfigError::invalid(field, "must list at least one family"));
            }
            for (i, family) in families.iter().enumerate() {
                validate::non_empty(&format!("{field}[{i}]"), family)?;
            }
        }

        Ok(())
    }

    fn validate_colors(&self) -> Result<(), ConfigError> {
        let Some(primary) = self.colors.get(PRIMARY) else {
            return Err(ConfigError::invalid(
                "style.colors.primary",
                "palette is required",
            ));
        };

        let missing: Vec<String> = ShadeStep::ALL
            .iter()
            .filter(|step| !primary.contains_key(*step))
            .map(ToString::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::invalid(
                "style.colors.primary",
                format!("missing shade steps: {}", missing.join(", ")),
            ));
        }

        for (name, palette) in &self.colors {
            validate::non_empty("style.colors", name)?;
            if palette.is_empty() {
                return Err(ConfigError::invalid(
                    format!("style.colors.{name}"),
                    "palette has no shades",
                ));
            }
            for (step, color) in palette {
                validate::hex_color(&format!("style.colors.{name}.{step}"), color)?;
            }
        }

        Ok(())
    }
}
