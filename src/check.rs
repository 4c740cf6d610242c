//! `folio check`: summary of a validated configuration.

use crate::config::PRIMARY;
use crate::registry::Registry;

/// One line per section, describing what was loaded.
pub fn summary(registry: &Registry) -> Vec<String> {
    let config = registry.config();
    let site = registry.site();

    let source = config
        .config_path
        .as_ref()
        .map_or_else(|| "built-in config".to_owned(), |p| p.display().to_string());

    let integrations: Vec<&str> = config.integrations.iter().map(|i| i.as_str()).collect();
    let socials: Vec<&str> = registry.socials().iter().map(|s| s.name.as_str()).collect();
    let palettes: Vec<&str> = config.style.colors.keys().map(String::as_str).collect();
    let themes = &config.markdown.shiki.themes;
    let primary_shades = config.style.colors.get(PRIMARY).map_or(0, |p| p.len());

    vec![
        format!("source: {source}"),
        format!("site: {} <{}> at {}", site.name, site.email, site.url),
        format!(
            "homepage: {} posts, {} works, {} projects",
            site.num_posts_on_homepage, site.num_works_on_homepage, site.num_projects_on_homepage
        ),
        format!("pages: {}", config.pages.iter().count()),
        format!("socials: {}", socials.join(", ")),
        format!("integrations: {}", integrations.join(", ")),
        format!("themes: light={}, dark={}", themes.light, themes.dark),
        format!(
            "palettes: {} ({} shades in primary)",
            palettes.join(", "),
            primary_shades
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_summary_lines() {
        let registry = Registry::new(SiteConfig::builtin().unwrap()).unwrap();
        let lines = summary(&registry);

        assert_eq!(lines[0], "source: built-in config");
        assert_eq!(
            lines[1],
            "site: Alessandro Marcolini <alessandro@marcolini.dev> at https://marcolini.dev"
        );
        assert_eq!(lines[2], "homepage: 3 posts, 1 works, 1 projects");
        assert_eq!(lines[3], "pages: 5");
        assert_eq!(lines[4], "socials: github, linkedin");
        assert_eq!(lines[5], "integrations: mdx, sitemap, tailwind");
        assert_eq!(lines[6], "themes: light=kanagawa-wave, dark=kanagawa-wave");
        assert_eq!(lines[7], "palettes: primary (11 shades in primary)");
    }
}
