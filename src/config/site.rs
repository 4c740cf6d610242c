//! `[site]` section configuration.
//!
//! Site identity: owner name, contact email, origin URL, and how many
//! entries each homepage list shows.

use super::{defaults, error::ConfigError, validate};
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in folio.toml - site identity.
///
/// # Example
/// ```toml
/// [site]
/// name = "Alessandro Marcolini"
/// email = "alessandro@marcolini.dev"
/// url = "https://marcolini.dev"
/// num_posts_on_homepage = 3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct Site {
    /// Owner name shown in headers and the page footer.
    pub name: String,

    /// Contact email linked from the about page.
    pub email: String,

    /// Absolute origin the site is served from; used for canonical links
    /// and the sitemap.
    pub url: String,

    /// Number of latest posts listed on the homepage.
    #[serde(default = "defaults::site::num_posts_on_homepage")]
    #[educe(Default = defaults::site::num_posts_on_homepage())]
    pub num_posts_on_homepage: u32,

    /// Number of work entries listed on the homepage.
    #[serde(default = "defaults::site::num_works_on_homepage")]
    #[educe(Default = defaults::site::num_works_on_homepage())]
    pub num_works_on_homepage: u32,

    /// Number of projects listed on the homepage.
    #[serde(default = "defaults::site::num_projects_on_homepage")]
    #[educe(Default = defaults::site::num_projects_on_homepage())]
    pub num_projects_on_homepage: u32,
}

impl Site {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate::non_empty("site.name", &self.name)?;
        validate::email("site.email", &self.email)?;
        validate::url("site.url", &self.url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use super::Site;

    const PAGES: &str = r##"
        [pages.home]
        title = "Home"
        description = "d"
        [pages.blog]
        title = "Blog"
        description = "d"
        [pages.work]
        title = "Work"
        description = "d"
        [pages.projects]
        title = "Projects"
        description = "d"
        [pages.about]
        title = "About"
        description = "d"
        [markdown.shiki.themes]
        light = "github-light"
        dark = "github-dark"
        [style.colors.primary]
        50 = "#f5f8f7"
        100 = "#ddeae6"
        200 = "#bbd4cd"
        300 = "#91b7ae"
        400 = "#6a978d"
        500 = "#507c73"
        600 = "#466e67"
        700 = "#35504c"
        800 = "#2d423e"
        900 = "#293836"
        950 = "#141f1e"
    "##;

    fn site(section: &str) -> String {
        format!("integrations = [\"mdx\"]\n{section}\n{PAGES}")
    }

    #[test]
    fn test_site_full() {
        let config = SiteConfig::from_str(&site(
            r#"
            [site]
            name = "Alice"
            email = "alice@example.com"
            url = "https://alice.dev"
            num_posts_on_homepage = 5
            num_works_on_homepage = 2
            num_projects_on_homepage = 0
            "#,
        ))
        .unwrap();

        assert_eq!(config.site.name, "Alice");
        assert_eq!(config.site.email, "alice@example.com");
        assert_eq!(config.site.url, "https://alice.dev");
        assert_eq!(config.site.num_posts_on_homepage, 5);
        assert_eq!(config.site.num_works_on_homepage, 2);
        assert_eq!(config.site.num_projects_on_homepage, 0);
    }

    #[test]
    fn test_site_count_defaults() {
        let config = SiteConfig::from_str(&site(
            r#"
            [site]
            name = "Alice"
            email = "alice@example.com"
            url = "https://alice.dev"
            "#,
        ))
        .unwrap();

        assert_eq!(config.site.num_posts_on_homepage, 3);
        assert_eq!(config.site.num_works_on_homepage, 1);
        assert_eq!(config.site.num_projects_on_homepage, 1);
    }

    #[test]
    fn test_negative_count_rejected() {
        let result = SiteConfig::from_str(&site(
            r#"
            [site]
            name = "Alice"
            email = "alice@example.com"
            url = "https://alice.dev"
            num_posts_on_homepage = -1
            "#,
        ));

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_email_rejected() {
        let result = SiteConfig::from_str(&site(
            r#"
            [site]
            name = "Alice"
            url = "https://alice.dev"
            "#,
        ));

        let err = result.unwrap_err().to_string();
        assert!(err.contains("email"));
    }

    #[test]
    fn test_unknown_field_rejection() {
        let result = SiteConfig::from_str(&site(
            r#"
            [site]
            name = "Alice"
            email = "alice@example.com"
            url = "https://alice.dev"
            author = "should_fail"
            "#,
        ));

        assert!(result.is_err());
    }

    #[test]
    fn test_validate_reports_field() {
        let mut site = Site {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            url: "https://alice.dev".into(),
            ..Site::default()
        };
        assert!(site.validate().is_ok());

        site.email = "alice".into();
        assert_eq!(site.validate().unwrap_err().field(), Some("site.email"));

        site.email = "alice@example.com".into();
        site.url = "alice.dev".into();
        assert_eq!(site.validate().unwrap_err().field(), Some("site.url"));

        site.url = "https://alice.dev".into();
        site.name = " ".into();
        assert_eq!(site.validate().unwrap_err().field(), Some("site.name"));
    }
}
