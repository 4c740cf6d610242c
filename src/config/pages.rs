//! `[pages.*]` section configuration.
//!
//! Title and description for every top-level page, used for `<title>`,
//! meta description, and page headings.

use super::{error::ConfigError, validate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Title and description of a single page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Metadata {
    pub title: String,
    pub description: String,
}

impl Metadata {
    pub fn validate(&self, prefix: &str) -> Result<(), ConfigError> {
        validate::non_empty(&format!("{prefix}.title"), &self.title)?;
        validate::non_empty(&format!("{prefix}.description"), &self.description)?;
        Ok(())
    }
}

/// Top-level pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    Blog,
    Work,
    Projects,
    About,
}

impl PageKind {
    /// Every page, in navigation order.
    pub const ALL: [PageKind; 5] = [
        PageKind::Home,
        PageKind::Blog,
        PageKind::Work,
        PageKind::Projects,
        PageKind::About,
    ];

    /// Key used in `[pages.<key>]`.
    pub const fn key(self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::Blog => "blog",
            PageKind::Work => "work",
            PageKind::Projects => "projects",
            PageKind::About => "about",
        }
    }

    /// Name of the exported constant (`HOME`, `BLOG`, ...).
    pub const fn constant(self) -> &'static str {
        match self {
            PageKind::Home => "HOME",
            PageKind::Blog => "BLOG",
            PageKind::Work => "WORK",
            PageKind::Projects => "PROJECTS",
            PageKind::About => "ABOUT",
        }
    }

    pub fn from_constant(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.constant() == name)
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// `[pages]` section in folio.toml. Every page is required.
///
/// # Example
/// ```toml
/// [pages.home]
/// title = "Home"
/// description = "My personal website."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pages {
    pub home: Metadata,
    pub blog: Metadata,
    pub work: Metadata,
    pub projects: Metadata,
    pub about: Metadata,
}

impl Pages {
    pub fn get(&self, kind: PageKind) -> &Metadata {
        match kind {
            PageKind::Home => &self.home,
            PageKind::Blog => &self.blog,
            PageKind::Work => &self.work,
            PageKind::Projects => &self.projects,
            PageKind::About => &self.about,
        }
    }

    /// Pages paired with their kind, in navigation order.
    pub fn iter(&self) -> impl Iterator<Item = (PageKind, &Metadata)> {
        PageKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (kind, meta) in self.iter() {
            meta.validate(&format!("pages.{kind}"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages() -> Pages {
        let meta = |title: &str| Metadata {
            title: title.into(),
            description: format!("{title} page"),
        };
        Pages {
            home: meta("Home"),
            blog: meta("Blog"),
            work: meta("Work"),
            projects: meta("Projects"),
            about: meta("About"),
        }
    }

    #[test]
    fn test_pages_parse() {
        let config = r#"
            [home]
            title = "Home"
            description = "Home page"
            [blog]
            title = "Blog"
            description = "Blog page"
            [work]
            title = "Work"
            description = "Work page"
            [projects]
            title = "Projects"
            description = "Projects page"
            [about]
            title = "About"
            description = "About page"
        "#;
        let parsed: Pages = toml::from_str(config).unwrap();

        assert_eq!(parsed, pages());
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_missing_page_rejected() {
        let config = r#"
            [home]
            title = "Home"
            description = "Home page"
        "#;
        let result: Result<Pages, _> = toml::from_str(config);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("missing field"));
    }

    #[test]
    fn test_unknown_page_rejected() {
        let config = r#"
            [home]
            title = "Home"
            description = "Home page"
            [contact]
            title = "Contact"
            description = "Contact page"
        "#;
        let result: Result<Pages, _> = toml::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_title_reports_page() {
        let mut pages = pages();
        pages.work.title = String::new();

        let err = pages.validate().unwrap_err();
        assert_eq!(err.field(), Some("pages.work.title"));
    }

    #[test]
    fn test_blank_description_reports_page() {
        let mut pages = pages();
        pages.about.description = "  \n".into();

        let err = pages.validate().unwrap_err();
        assert_eq!(err.field(), Some("pages.about.description"));
    }

    #[test]
    fn test_page_kind_lookup() {
        let pages = pages();
        assert_eq!(pages.get(PageKind::Projects).title, "Projects");

        assert_eq!(PageKind::from_constant("BLOG"), Some(PageKind::Blog));
        assert_eq!(PageKind::from_constant("blog"), None);
        assert_eq!(PageKind::from_constant("SITE"), None);

        let keys: Vec<_> = pages.iter().map(|(kind, _)| kind.key()).collect();
        assert_eq!(keys, ["home", "blog", "work", "projects", "about"]);
    }
}
