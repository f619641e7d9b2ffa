//! Tool configuration.
//!
//! Handles loading, validating, and merging `pagesmith.toml`. Stock defaults
//! are the base layer; the user's file only needs the keys it changes.
//!
//! ## Config File Location
//!
//! `pagesmith.toml` in the working directory, or any path given with
//! `--config`:
//!
//! ```text
//! my-sites/
//! ├── pagesmith.toml
//! ├── .pagesmith/          # data_dir: stored projects and templates
//! │   ├── projects/
//! │   └── templates/
//! └── dist/                # export.output_dir
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! data_dir = ".pagesmith"        # Where projects are stored
//!
//! [projects]
//! default_category = "business"  # Category for new and migrated projects
//! default_theme = "modern-blue"  # Theme for new and migrated projects
//!
//! [export]
//! output_dir = "dist"            # Where `export` writes HTML
//!
//! [[themes]]                     # Extra themes, zero or more
//! id = "brand"
//! name = "Brand"
//! [themes.colors]
//! primary = "#0f766e"
//! # ... all 18 colors
//! [themes.fonts]
//! primary = "Inter"
//! secondary = "Inter"
//! accent = "Lora"
//! ```
//!
//! A configured theme whose id matches a built-in one replaces it.
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::store::StoreSettings;
use crate::theme::{self, DEFAULT_THEME_ID, Theme};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "pagesmith.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `pagesmith.toml`.
///
/// All fields have defaults. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagesmithConfig {
    /// Directory holding stored projects and templates.
    pub data_dir: String,
    /// Defaults applied to new and migrated projects.
    pub projects: ProjectsConfig,
    /// Static export settings.
    pub export: ExportConfig,
    /// Themes in addition to the built-in ones.
    pub themes: Vec<Theme>,
}

impl Default for PagesmithConfig {
    fn default() -> Self {
        Self {
            data_dir: ".pagesmith".to_string(),
            projects: ProjectsConfig::default(),
            export: ExportConfig::default(),
            themes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectsConfig {
    pub default_category: String,
    pub default_theme: String,
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        let settings = StoreSettings::default();
        Self {
            default_category: settings.default_category,
            default_theme: settings.default_theme,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub output_dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: "dist".to_string(),
        }
    }
}

impl PagesmithConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.trim().is_empty() {
            return Err(ConfigError::Validation("data_dir must not be empty".into()));
        }
        if self.export.output_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "export.output_dir must not be empty".into(),
            ));
        }
        if self.projects.default_category.trim().is_empty() {
            return Err(ConfigError::Validation(
                "projects.default_category must not be empty".into(),
            ));
        }

        let mut seen = HashSet::new();
        for t in &self.themes {
            if t.id.trim().is_empty() {
                return Err(ConfigError::Validation("theme id must not be empty".into()));
            }
            if !seen.insert(t.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "theme '{}' is declared more than once",
                    t.id
                )));
            }
            for (name, value) in t.colors.entries() {
                if !theme::is_hex_color(value) {
                    return Err(ConfigError::Validation(format!(
                        "theme '{}': color {name} must be a 6-digit hex color, got '{value}'",
                        t.id
                    )));
                }
            }
            let fonts = t.fonts.entries().map(|(name, value)| ("font", name, value));
            let shadows = t.shadows.entries().map(|(name, value)| ("shadow", name, value));
            for (kind, name, value) in fonts.into_iter().chain(shadows) {
                if !theme::is_safe_css_value(value) {
                    return Err(ConfigError::Validation(format!(
                        "theme '{}': {kind} {name} is empty or contains quotes, angle brackets, braces, or ';': '{value}'",
                        t.id
                    )));
                }
            }
        }

        if self.find_theme(&self.projects.default_theme).is_none() {
            return Err(ConfigError::Validation(format!(
                "projects.default_theme '{}' is not a known theme",
                self.projects.default_theme
            )));
        }
        Ok(())
    }

    /// Built-in themes followed by configured ones, configured taking
    /// precedence on id clashes.
    pub fn all_themes(&self) -> Vec<Theme> {
        let mut themes: Vec<Theme> = theme::builtin_themes()
            .into_iter()
            .filter(|b| !self.themes.iter().any(|t| t.id == b.id))
            .collect();
        themes.extend(self.themes.iter().cloned());
        themes
    }

    pub fn find_theme(&self, theme_id: &str) -> Option<Theme> {
        self.themes
            .iter()
            .find(|t| t.id == theme_id)
            .cloned()
            .or_else(|| theme::find_builtin(theme_id))
    }

    /// The theme a project renders with: its own if known, else the
    /// configured default, else the stock default.
    pub fn theme_for(&self, theme_id: &str) -> Option<Theme> {
        self.find_theme(theme_id)
            .or_else(|| self.find_theme(&self.projects.default_theme))
            .or_else(|| theme::find_builtin(DEFAULT_THEME_ID))
    }

    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            default_category: self.projects.default_category.clone(),
            default_theme: self.projects.default_theme.clone(),
        }
    }

    /// `data_dir` resolved against `base`.
    pub fn data_path(&self, base: &Path) -> PathBuf {
        base.join(&self.data_dir)
    }

    /// `export.output_dir` resolved against `base`.
    pub fn output_path(&self, base: &Path) -> PathBuf {
        base.join(&self.export.output_dir)
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(PagesmithConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(config_path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<PagesmithConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: PagesmithConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config_path`, falling back to defaults when absent.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(config_path: &Path) -> Result<PagesmithConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(config_path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `pagesmith.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Pagesmith Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Unknown keys will cause an error.

# Directory holding stored projects and section templates.
data_dir = ".pagesmith"

# ---------------------------------------------------------------------------
# Project defaults
# ---------------------------------------------------------------------------
[projects]
# Category given to new projects, and to old records that lack one.
default_category = "business"

# Theme given to new projects, and to old records that lack one.
# Built in: modern-blue, forest-green, sunset-orange, midnight-purple.
default_theme = "modern-blue"

# ---------------------------------------------------------------------------
# Static export
# ---------------------------------------------------------------------------
[export]
# Directory `pagesmith export` writes HTML into.
output_dir = "dist"

# ---------------------------------------------------------------------------
# Extra themes
# ---------------------------------------------------------------------------
# Declare any number of [[themes]] tables. Colors are 6-digit hex.
# A theme with a built-in id replaces the built-in one.
#
# [[themes]]
# id = "brand"
# name = "Brand"
#
# [themes.colors]
# primary = "#0f766e"
# secondary = "#0369a1"
# accent = "#f59e0b"
# background = "#ffffff"
# surface = "#f8fafc"
# text = "#1e293b"
# text_secondary = "#64748b"
# border = "#e2e8f0"
# success = "#10b981"
# warning = "#f59e0b"
# error = "#ef4444"
# primary100 = "#ccfbf1"
# primary200 = "#99f6e4"
# primary300 = "#5eead4"
# secondary100 = "#e0f2fe"
# secondary200 = "#bae6fd"
# accent100 = "#fef3c7"
# accent200 = "#fde68a"
#
# [themes.fonts]
# primary = "Inter"
# secondary = "Inter"
# accent = "Lora"
#
# Optional; stock shadows when omitted.
# [themes.shadows]
# sm = "0 1px 2px 0 rgb(0 0 0 / 0.05)"
# md = "0 4px 6px -1px rgb(0 0 0 / 0.1)"
# lg = "0 10px 15px -3px rgb(0 0 0 / 0.1)"
# xl = "0 20px 25px -5px rgb(0 0 0 / 0.1)"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const BRAND_THEME: &str = r##"
[[themes]]
id = "brand"
name = "Brand"

[themes.colors]
primary = "#0f766e"
secondary = "#0369a1"
accent = "#f59e0b"
background = "#ffffff"
surface = "#f8fafc"
text = "#1e293b"
text_secondary = "#64748b"
border = "#e2e8f0"
success = "#10b981"
warning = "#f59e0b"
error = "#ef4444"
primary100 = "#ccfbf1"
primary200 = "#99f6e4"
primary300 = "#5eead4"
secondary100 = "#e0f2fe"
secondary200 = "#bae6fd"
accent100 = "#fef3c7"
accent200 = "#fde68a"

[themes.fonts]
primary = "Inter"
secondary = "Inter"
accent = "Lora"
"##;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn default_config_values() {
        let config = PagesmithConfig::default();
        assert_eq!(config.data_dir, ".pagesmith");
        assert_eq!(config.projects.default_category, "business");
        assert_eq!(config.projects.default_theme, "modern-blue");
        assert_eq!(config.export.output_dir, "dist");
        assert!(config.themes.is_empty());
    }

    #[test]
    fn parse_partial_config() {
        let config: PagesmithConfig = toml::from_str(
            r#"
[export]
output_dir = "public"
"#,
        )
        .unwrap();
        assert_eq!(config.export.output_dir, "public");
        assert_eq!(config.data_dir, ".pagesmith");
        assert_eq!(config.projects.default_theme, "modern-blue");
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, PagesmithConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            r#"
data_dir = "sites"

[projects]
default_theme = "forest-green"
"#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.data_dir, "sites");
        assert_eq!(config.projects.default_theme, "forest-green");
        assert_eq!(config.projects.default_category, "business");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "data_dir = ");
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "[export]\noutput = \"x\"\n");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<PagesmithConfig, _> = toml::from_str("[deploy]\nhost = \"x\"\n");
        assert!(result.is_err());
    }

    // =========================================================================
    // Themes
    // =========================================================================

    #[test]
    fn configured_theme_is_available() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            &format!("[projects]\ndefault_theme = \"brand\"\n{BRAND_THEME}"),
        );
        let config = load_config(&path).unwrap();

        let brand = config.find_theme("brand").unwrap();
        assert_eq!(brand.colors.primary, "#0f766e");
        assert_eq!(brand.shadows, theme::ThemeShadows::default());
        assert_eq!(config.all_themes().len(), 5);
        assert_eq!(config.store_settings().default_theme, "brand");
    }

    #[test]
    fn configured_theme_replaces_builtin_with_same_id() {
        let body = BRAND_THEME.replace("id = \"brand\"", "id = \"modern-blue\"");
        let config: PagesmithConfig = toml::from_str(&body).unwrap();
        config.validate().unwrap();

        let themes = config.all_themes();
        assert_eq!(themes.len(), 4);
        let blue = config.find_theme("modern-blue").unwrap();
        assert_eq!(blue.colors.primary, "#0f766e");
    }

    #[test]
    fn theme_for_falls_back_to_default() {
        let config = PagesmithConfig::default();
        assert_eq!(config.theme_for("forest-green").unwrap().id, "forest-green");
        assert_eq!(config.theme_for("retired-theme").unwrap().id, "modern-blue");
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        PagesmithConfig::default().validate().unwrap();
    }

    #[test]
    fn validate_unknown_default_theme() {
        let mut config = PagesmithConfig::default();
        config.projects.default_theme = "neon".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("neon"));
    }

    #[test]
    fn validate_bad_theme_color() {
        let body = BRAND_THEME.replace("primary = \"#0f766e\"", "primary = \"teal\"");
        let config: PagesmithConfig = toml::from_str(&body).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("primary"));
    }

    #[test]
    fn validate_rejects_font_that_closes_style() {
        let body = BRAND_THEME.replace("accent = \"Lora\"", "accent = \"Lora</style><script>\"");
        let config: PagesmithConfig = toml::from_str(&body).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("font accent"), "{err}");
    }

    #[test]
    fn validate_rejects_quoted_shadow() {
        let body = format!("{BRAND_THEME}\n[themes.shadows]\nsm = \"0 1px 2px red\"\nmd = \"none\"\nlg = \"none\"\nxl = \"x' }}\"\n");
        let config: PagesmithConfig = toml::from_str(&body).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("shadow xl"), "{err}");

        let fine = body.replace("x' }", "none");
        let config: PagesmithConfig = toml::from_str(&fine).unwrap();
        config.validate().unwrap();
    }

    #[test]
    fn validate_duplicate_theme_ids() {
        let body = format!("{BRAND_THEME}{BRAND_THEME}");
        let config: PagesmithConfig = toml::from_str(&body).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_empty_dirs() {
        let mut config = PagesmithConfig::default();
        config.data_dir = " ".into();
        assert!(config.validate().is_err());

        let mut config = PagesmithConfig::default();
        config.export.output_dir = String::new();
        assert!(config.validate().is_err());
    }

    // =========================================================================
    // merge_toml / resolve_config
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("b = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"].as_integer(), Some(1));
        assert_eq!(merged["b"].as_integer(), Some(3));
    }

    #[test]
    fn merge_toml_table_merge() {
        let base = stock_defaults_value();
        let overlay: toml::Value = toml::from_str("[projects]\ndefault_category = \"portfolio\"").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["projects"]["default_category"].as_str(), Some("portfolio"));
        assert_eq!(merged["projects"]["default_theme"].as_str(), Some("modern-blue"));
    }

    #[test]
    fn merge_toml_arrays_replace() {
        let base: toml::Value = toml::from_str("xs = [1, 2, 3]").unwrap();
        let overlay: toml::Value = toml::from_str("xs = [9]").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["xs"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn resolve_config_rejects_invalid_values() {
        let overlay: toml::Value = toml::from_str("[projects]\ndefault_theme = \"nope\"").unwrap();
        let result = resolve_config(stock_defaults_value(), Some(overlay));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn stock_defaults_value_is_table() {
        let value = stock_defaults_value();
        assert!(value.is_table());
        assert!(value.get("projects").is_some());
        assert!(value.get("export").is_some());
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: PagesmithConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, PagesmithConfig::default());
    }

    #[test]
    fn paths_resolve_against_base() {
        let config = PagesmithConfig::default();
        let base = Path::new("/srv/sites");
        assert_eq!(config.data_path(base), PathBuf::from("/srv/sites/.pagesmith"));
        assert_eq!(config.output_path(base), PathBuf::from("/srv/sites/dist"));
    }
}
