//! Configuration System
//!
//! Shell configuration with per-field defaults. The host page may override
//! any of them with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="shell-config">
//!   { "default_page": "overview.html", "logging": { "level": "debug" } }
//! </script>
//! ```

use serde::Deserialize;
use web_sys::Document;

use crate::error::{ShellError, ShellResult};

/// Id of the inline configuration script in the host page
pub const CONFIG_ELEMENT_ID: &str = "shell-config";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShellConfig {
    /// Fragment loaded once the shell is mounted
    #[serde(default = "default_page")]
    pub default_page: String,

    /// Sidebar navigation entries
    #[serde(default = "default_nav")]
    pub nav: Vec<NavItem>,

    /// Markup shown in the content area when a load fails
    #[serde(default = "default_error_fragment")]
    pub error_fragment: String,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub layers: LayerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// A sidebar link pointing at a fragment URL
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub page: String,
}

fn default_page() -> String {
    "map.html".to_string()
}

fn default_nav() -> Vec<NavItem> {
    vec![
        NavItem {
            label: "Map".to_string(),
            page: "map.html".to_string(),
        },
        NavItem {
            label: "Settings".to_string(),
            page: "settings.html".to_string(),
        },
    ]
}

fn default_error_fragment() -> String {
    r#"<div class="section"><p>Error: Could not load page content.</p></div>"#.to_string()
}

/// Theme toggle configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    #[serde(default = "default_dark_class")]
    pub dark_class: String,

    #[serde(default = "default_toggle_id")]
    pub toggle_id: String,
}

fn default_storage_key() -> String {
    "theme".to_string()
}

fn default_dark_class() -> String {
    "dark-mode".to_string()
}

fn default_toggle_id() -> String {
    "darkModeToggle".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            dark_class: default_dark_class(),
            toggle_id: default_toggle_id(),
        }
    }
}

/// Map widget configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_zoom_in_id")]
    pub zoom_in_id: String,

    #[serde(default = "default_zoom_out_id")]
    pub zoom_out_id: String,

    #[serde(default = "default_reset_id")]
    pub reset_id: String,

    #[serde(default = "default_locate_id")]
    pub locate_id: String,

    #[serde(default = "default_icon_id")]
    pub icon_id: String,

    #[serde(default = "default_zoom_step")]
    pub zoom_step: f64,

    #[serde(default = "default_pulse_class")]
    pub pulse_class: String,

    /// How long the locate pulse stays on the icon
    #[serde(default = "default_pulse_ms")]
    pub pulse_ms: u32,
}

fn default_zoom_in_id() -> String {
    "zoomIn".to_string()
}

fn default_zoom_out_id() -> String {
    "zoomOut".to_string()
}

fn default_reset_id() -> String {
    "resetView".to_string()
}

fn default_locate_id() -> String {
    "myLocation".to_string()
}

fn default_icon_id() -> String {
    "map-icon".to_string()
}

fn default_zoom_step() -> f64 {
    0.2
}

fn default_pulse_class() -> String {
    "pulse".to_string()
}

fn default_pulse_ms() -> u32 {
    500
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom_in_id: default_zoom_in_id(),
            zoom_out_id: default_zoom_out_id(),
            reset_id: default_reset_id(),
            locate_id: default_locate_id(),
            icon_id: default_icon_id(),
            zoom_step: default_zoom_step(),
            pulse_class: default_pulse_class(),
            pulse_ms: default_pulse_ms(),
        }
    }
}

/// Layer toggle configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LayerConfig {
    #[serde(default = "default_toggle_selector")]
    pub toggle_selector: String,

    #[serde(default = "default_tag_selector")]
    pub tag_selector: String,

    #[serde(default = "default_layer_attr")]
    pub layer_attr: String,

    #[serde(default = "default_tag_attr")]
    pub tag_attr: String,

    #[serde(default = "default_hidden_class")]
    pub hidden_class: String,
}

fn default_toggle_selector() -> String {
    ".layer .switch input[data-layer]".to_string()
}

fn default_tag_selector() -> String {
    ".tags .tag[data-tag]".to_string()
}

fn default_layer_attr() -> String {
    "data-layer".to_string()
}

fn default_tag_attr() -> String {
    "data-tag".to_string()
}

fn default_hidden_class() -> String {
    "hidden".to_string()
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            toggle_selector: default_toggle_selector(),
            tag_selector: default_tag_selector(),
            layer_attr: default_layer_attr(),
            tag_attr: default_tag_attr(),
            hidden_class: default_hidden_class(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_page: default_page(),
            nav: default_nav(),
            error_fragment: default_error_fragment(),
            theme: ThemeConfig::default(),
            map: MapConfig::default(),
            layers: LayerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ShellConfig {
    /// Parse configuration from a JSON string; missing fields keep defaults
    pub fn from_json(json: &str) -> ShellResult<Self> {
        let config: ShellConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read the inline `#shell-config` block, or defaults when absent
    pub fn from_document(document: &Document) -> ShellResult<Self> {
        let text = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json),
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> ShellResult<()> {
        if !(self.map.zoom_step.is_finite() && self.map.zoom_step > 0.0) {
            return Err(ShellError::Config(format!(
                "map.zoom_step must be a positive number, got {}",
                self.map.zoom_step
            )));
        }
        if self.default_page.trim().is_empty() {
            return Err(ShellError::Config("default_page must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.default_page, "map.html");
        assert_eq!(config.theme.storage_key, "theme");
        assert_eq!(config.theme.dark_class, "dark-mode");
        assert_eq!(config.map.zoom_step, 0.2);
        assert_eq!(config.map.pulse_ms, 500);
        assert_eq!(config.layers.hidden_class, "hidden");
        assert_eq!(
            config.error_fragment,
            r#"<div class="section"><p>Error: Could not load page content.</p></div>"#
        );
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = ShellConfig::from_json("{}").unwrap();
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = ShellConfig::from_json(
            r#"{
                "default_page": "overview.html",
                "map": { "zoom_step": 0.5 },
                "logging": { "level": "debug" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.default_page, "overview.html");
        assert_eq!(config.map.zoom_step, 0.5);
        assert_eq!(config.map.icon_id, "map-icon");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.nav.len(), 2);
    }

    #[test]
    fn test_nav_override() {
        let config = ShellConfig::from_json(
            r#"{ "nav": [ { "label": "Reports", "page": "reports.html" } ] }"#,
        )
        .unwrap();
        assert_eq!(
            config.nav,
            vec![NavItem {
                label: "Reports".to_string(),
                page: "reports.html".to_string()
            }]
        );
    }

    #[test]
    fn test_invalid_json() {
        let err = ShellConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ShellError::Config(_)));
    }

    #[test]
    fn test_rejects_non_positive_step() {
        let err = ShellConfig::from_json(r#"{ "map": { "zoom_step": 0 } }"#).unwrap_err();
        assert!(err.to_string().contains("zoom_step"));

        let err = ShellConfig::from_json(r#"{ "map": { "zoom_step": -0.2 } }"#).unwrap_err();
        assert!(matches!(err, ShellError::Config(_)));
    }
}
