//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn num_posts_on_homepage() -> u32 {
        3
    }

    pub fn num_works_on_homepage() -> u32 {
        1
    }

    pub fn num_projects_on_homepage() -> u32 {
        1
    }
}

// ============================================================================
// [style] Section Defaults
// ============================================================================

pub mod style {
    use super::super::DarkMode;

    pub fn dark_mode() -> DarkMode {
        DarkMode::default()
    }

    pub fn content() -> Vec<String> {
        vec!["./src/**/*.{astro,html,js,jsx,md,mdx,svelte,ts,tsx,vue}".into()]
    }

    /// Stacks appended after user fonts, matching the styling framework's
    /// `defaultTheme.fontFamily`.
    pub mod font_family {
        pub const SANS: &[&str] = &[
            "ui-sans-serif",
            "system-ui",
            "sans-serif",
            "\"Apple Color Emoji\"",
            "\"Segoe UI Emoji\"",
            "\"Segoe UI Symbol\"",
            "\"Noto Color Emoji\"",
        ];

        pub const SERIF: &[&str] = &[
            "ui-serif",
            "Georgia",
            "Cambria",
            "\"Times New Roman\"",
            "Times",
            "serif",
        ];

        pub const MONO: &[&str] = &[
            "ui-monospace",
            "SFMono-Regular",
            "Menlo",
            "Monaco",
            "Consolas",
            "\"Liberation Mono\"",
            "\"Courier New\"",
            "monospace",
        ];
    }
}
