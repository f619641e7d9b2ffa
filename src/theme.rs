//! Website themes and their CSS custom properties.
//!
//! A theme is a named palette plus font families and shadow presets. The
//! exporter never writes a literal color into section markup; everything goes
//! through the variables generated here:
//!
//! ```text
//! --website-color-primary: #2563eb;
//! --website-color-primary-rgb: 37, 99, 235;
//! --website-color-text-secondary: #64748b;
//! ...
//! --website-font-primary: 'Inter', sans-serif;
//! --website-shadow-md: 0 4px 6px -1px rgb(0 0 0 / 0.1), ...;
//! ```
//!
//! The `-rgb` companions exist so stylesheets can write
//! `rgba(var(--website-color-primary-rgb), 0.1)`.
//!
//! Four themes are built in. More can be declared in `pagesmith.toml` as
//! `[[themes]]` tables; see [`config`](crate::config).

use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME_ID: &str = "modern-blue";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub colors: ThemeColors,
    pub fonts: ThemeFonts,
    /// Optional in config; stock shadows when omitted.
    #[serde(default)]
    pub shadows: ThemeShadows,
}

/// Theme palette. Field order is the order variables are emitted in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_secondary: String,
    pub border: String,
    pub success: String,
    pub warning: String,
    pub error: String,
    pub primary100: String,
    pub primary200: String,
    pub primary300: String,
    pub secondary100: String,
    pub secondary200: String,
    pub accent100: String,
    pub accent200: String,
}

impl ThemeColors {
    /// `(css-name, value)` pairs in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 18] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("background", &self.background),
            ("surface", &self.surface),
            ("text", &self.text),
            ("text-secondary", &self.text_secondary),
            ("border", &self.border),
            ("success", &self.success),
            ("warning", &self.warning),
            ("error", &self.error),
            ("primary100", &self.primary100),
            ("primary200", &self.primary200),
            ("primary300", &self.primary300),
            ("secondary100", &self.secondary100),
            ("secondary200", &self.secondary200),
            ("accent100", &self.accent100),
            ("accent200", &self.accent200),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeFonts {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl ThemeFonts {
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeShadows {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

impl Default for ThemeShadows {
    fn default() -> Self {
        Self {
            sm: "0 1px 2px 0 rgb(0 0 0 / 0.05)".into(),
            md: "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)".into(),
            lg: "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)".into(),
            xl: "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)".into(),
        }
    }
}

impl ThemeShadows {
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("sm", &self.sm),
            ("md", &self.md),
            ("lg", &self.lg),
            ("xl", &self.xl),
        ]
    }
}

// =============================================================================
// Built-in themes
// =============================================================================

struct Palette<'a> {
    primary: &'a str,
    secondary: &'a str,
    accent: &'a str,
    tints: [&'a str; 7],
}

fn built(id: &str, name: &str, palette: Palette<'_>, fonts: [&str; 3]) -> Theme {
    let [p100, p200, p300, s100, s200, a100, a200] = palette.tints;
    Theme {
        id: id.into(),
        name: name.into(),
        colors: ThemeColors {
            primary: palette.primary.into(),
            secondary: palette.secondary.into(),
            accent: palette.accent.into(),
            background: "#ffffff".into(),
            surface: "#f8fafc".into(),
            text: "#1e293b".into(),
            text_secondary: "#64748b".into(),
            border: "#e2e8f0".into(),
            success: "#10b981".into(),
            warning: "#f59e0b".into(),
            error: "#ef4444".into(),
            primary100: p100.into(),
            primary200: p200.into(),
            primary300: p300.into(),
            secondary100: s100.into(),
            secondary200: s200.into(),
            accent100: a100.into(),
            accent200: a200.into(),
        },
        fonts: ThemeFonts {
            primary: fonts[0].into(),
            secondary: fonts[1].into(),
            accent: fonts[2].into(),
        },
        shadows: ThemeShadows::default(),
    }
}

/// The themes shipped with the binary, default first.
pub fn builtin_themes() -> Vec<Theme> {
    vec![
        built(
            DEFAULT_THEME_ID,
            "Modern Blue",
            Palette {
                primary: "#2563eb",
                secondary: "#7c3aed",
                accent: "#06b6d4",
                tints: ["#dbeafe", "#bfdbfe", "#93c5fd", "#ede9fe", "#ddd6fe", "#cffafe", "#a5f3fc"],
            },
            ["Inter", "Poppins", "Playfair Display"],
        ),
        built(
            "forest-green",
            "Forest Green",
            Palette {
                primary: "#059669",
                secondary: "#65a30d",
                accent: "#d97706",
                tints: ["#d1fae5", "#a7f3d0", "#6ee7b7", "#ecfccb", "#d9f99d", "#fef3c7", "#fde68a"],
            },
            ["Nunito", "Merriweather", "Lora"],
        ),
        built(
            "sunset-orange",
            "Sunset Orange",
            Palette {
                primary: "#ea580c",
                secondary: "#db2777",
                accent: "#facc15",
                tints: ["#ffedd5", "#fed7aa", "#fdba74", "#fce7f3", "#fbcfe8", "#fef9c3", "#fef08a"],
            },
            ["Montserrat", "Open Sans", "Pacifico"],
        ),
        built(
            "midnight-purple",
            "Midnight Purple",
            Palette {
                primary: "#7c3aed",
                secondary: "#4f46e5",
                accent: "#ec4899",
                tints: ["#ede9fe", "#ddd6fe", "#c4b5fd", "#e0e7ff", "#c7d2fe", "#fce7f3", "#fbcfe8"],
            },
            ["Space Grotesk", "DM Sans", "Playfair Display"],
        ),
    ]
}

pub fn find_builtin(theme_id: &str) -> Option<Theme> {
    builtin_themes().into_iter().find(|t| t.id == theme_id)
}

// =============================================================================
// CSS generation
// =============================================================================

fn parse_hex6(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// True for `#rrggbb` or `rrggbb`, either case.
pub fn is_hex_color(value: &str) -> bool {
    parse_hex6(value).is_some()
}

/// True when `value` can sit inside a quoted font family or a shadow
/// declaration without ending it or the enclosing `<style>` element.
pub fn is_safe_css_value(value: &str) -> bool {
    !value.trim().is_empty()
        && !value
            .chars()
            .any(|c| matches!(c, '<' | '>' | '\'' | '"' | '\\' | ';' | '{' | '}') || c.is_control())
}

/// `"#1a2b3c"` → `"26, 43, 60"`. Anything that is not six hex digits
/// (optionally `#`-prefixed) gives `"0, 0, 0"`.
pub fn hex_to_rgb(hex: &str) -> String {
    let (r, g, b) = parse_hex6(hex).unwrap_or((0, 0, 0));
    format!("{r}, {g}, {b}")
}

/// The declarations that go inside the exported page's `:root { }` block.
pub fn generate_css_variables(theme: &Theme) -> String {
    let mut lines = Vec::with_capacity(18 * 2 + 3 + 4);
    for (name, value) in theme.colors.entries() {
        lines.push(format!("--website-color-{name}: {value};"));
        lines.push(format!("--website-color-{name}-rgb: {};", hex_to_rgb(value)));
    }
    for (name, family) in theme.fonts.entries() {
        lines.push(format!("--website-font-{name}: '{family}', sans-serif;"));
    }
    for (name, value) in theme.shadows.entries() {
        lines.push(format!("--website-shadow-{name}: {value};"));
    }
    lines.join("\n")
}

/// Google Fonts stylesheet URL loading every theme font at weights 300-900.
pub fn google_fonts_url(theme: &Theme) -> String {
    let families: Vec<String> = theme
        .fonts
        .entries()
        .iter()
        .map(|(_, family)| {
            format!(
                "family={}:wght@300;400;500;600;700;800;900",
                family.replace(' ', "+")
            )
        })
        .collect();
    format!(
        "https://fonts.googleapis.com/css2?{}&display=swap",
        families.join("&")
    )
}
