use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME_NAME: &str = "Modern Blue";

/// Site-wide color roles. Roles missing from a file take the default theme's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
    pub muted: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeFonts {
    pub heading: String,
    pub body: String,
}

/// Named palette and font pairing. Travels next to the tree, never inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
    pub fonts: ThemeFonts,
}

impl Theme {
    #[allow(clippy::too_many_arguments)]
    fn palette(
        name: &str,
        primary: &str,
        secondary: &str,
        accent: &str,
        background: &str,
        text: &str,
        muted: &str,
        heading: &str,
        body: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            colors: ThemeColors {
                primary: primary.to_string(),
                secondary: secondary.to_string(),
                accent: accent.to_string(),
                background: background.to_string(),
                text: text.to_string(),
                muted: muted.to_string(),
            },
            fonts: ThemeFonts {
                heading: heading.to_string(),
                body: body.to_string(),
            },
        }
    }

    pub fn modern_blue() -> Self {
        Self::palette(
            DEFAULT_THEME_NAME,
            "#3B82F6",
            "#64748B",
            "#F59E0B",
            "#FFFFFF",
            "#1F2937",
            "#6B7280",
            "Inter, sans-serif",
            "Inter, sans-serif",
        )
    }

    pub fn business_blue() -> Self {
        Self::palette(
            "Business Blue",
            "#2563EB",
            "#64748B",
            "#F59E0B",
            "#FFFFFF",
            "#1F2937",
            "#6B7280",
            "Inter, sans-serif",
            "Inter, sans-serif",
        )
    }

    pub fn creative_dark() -> Self {
        Self::palette(
            "Creative Dark",
            "#7C3AED",
            "#64748B",
            "#F59E0B",
            "#111827",
            "#F9FAFB",
            "#9CA3AF",
            "Playfair Display, serif",
            "Inter, sans-serif",
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::modern_blue()
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Theme::default().colors
    }
}

impl Default for ThemeFonts {
    fn default() -> Self {
        Theme::default().fonts
    }
}

/// Themes shipped with the builder
pub fn builtin_themes() -> Vec<Theme> {
    vec![
        Theme::modern_blue(),
        Theme::business_blue(),
        Theme::creative_dark(),
    ]
}

/// Look up a built-in theme by name (case-insensitive)
pub fn find_theme(name: &str) -> Option<Theme> {
    builtin_themes()
        .into_iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}
