//! JSON handed to the external build pipeline.
//!
//! Each target mirrors the option names the pipeline reads, so the output
//! can be imported directly from its config files:
//!
//! | Target      | Keys                                                      |
//! |-------------|-----------------------------------------------------------|
//! | `astro`     | `site`, `integrations`, `markdown.shikiConfig.themes`     |
//! | `tailwind`  | `darkMode`, `content`, `theme.extend.*`, `plugins`        |
//! | `constants` | `SITE`, `HOME`, `BLOG`, `WORK`, `PROJECTS`, `ABOUT`, `SOCIALS` |

use crate::config::{ConfigError, DarkMode, FontRole, PageKind, SiteConfig};
use clap::ValueEnum;
use serde_json::{Map, Value, json};

/// What to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    /// Framework options
    Astro,
    /// Styling options
    Tailwind,
    /// Site constants for templates
    Constants,
}

pub fn astro(config: &SiteConfig) -> Value {
    let integrations: Vec<&str> = config
        .integrations
        .iter()
        .map(|integration| integration.package())
        .collect();
    let themes = &config.markdown.shiki.themes;

    json!({
        "site": config.site.url,
        "integrations": integrations,
        "markdown": {
            "shikiConfig": {
                "themes": {
                    "light": themes.light,
                    "dark": themes.dark,
                },
                "wrap": config.markdown.shiki.wrap,
            },
        },
    })
}

pub fn tailwind(config: &SiteConfig) -> Value {
    let style = &config.style;

    let dark_mode = match style.dark_mode {
        DarkMode::Media => json!("media"),
        DarkMode::Class => json!(["class"]),
    };

    let colors: Map<String, Value> = style
        .colors
        .iter()
        .map(|(name, palette)| {
            let shades: Map<String, Value> = palette
                .iter()
                .map(|(step, color)| (step.to_string(), json!(color)))
                .collect();
            (name.clone(), Value::Object(shades))
        })
        .collect();

    let font_family: Map<String, Value> = [FontRole::Sans, FontRole::Serif, FontRole::Mono]
        .into_iter()
        .filter(|role| style.font_family.contains_key(role))
        .map(|role| (role.to_string(), json!(style.font_stack(role))))
        .collect();

    let plugins: Vec<String> = style.plugins.iter().map(|p| p.package()).collect();

    json!({
        "darkMode": dark_mode,
        "content": style.content,
        "theme": {
            "extend": {
                "colors": colors,
                "fontFamily": font_family,
            },
        },
        "plugins": plugins,
    })
}

pub fn constants(config: &SiteConfig) -> Value {
    let site = &config.site;

    let mut out = Map::new();
    out.insert(
        "SITE".into(),
        json!({
            "NAME": site.name,
            "EMAIL": site.email,
            "NUM_POSTS_ON_HOMEPAGE": site.num_posts_on_homepage,
            "NUM_WORKS_ON_HOMEPAGE": site.num_works_on_homepage,
            "NUM_PROJECTS_ON_HOMEPAGE": site.num_projects_on_homepage,
        }),
    );
    for kind in PageKind::ALL {
        let meta = config.pages.get(kind);
        out.insert(
            kind.constant().into(),
            json!({ "TITLE": meta.title, "DESCRIPTION": meta.description }),
        );
    }
    let socials: Vec<Value> = config
        .socials
        .iter()
        .map(|link| json!({ "NAME": link.name, "HREF": link.href }))
        .collect();
    out.insert("SOCIALS".into(), Value::Array(socials));

    Value::Object(out)
}

pub fn export(target: Target, config: &SiteConfig) -> Value {
    match target {
        Target::Astro => astro(config),
        Target::Tailwind => tailwind(config),
        Target::Constants => constants(config),
    }
}

/// Render `target` as a JSON string.
pub fn render(target: Target, config: &SiteConfig, pretty: bool) -> Result<String, ConfigError> {
    let value = export(target, config);
    let text = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}
