use serde::Deserialize;

use crate::error::ThemeError;

/// Id of the optional `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "theme-config";

/// Names shared between the controller, the page markup and the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Id of the checkbox that represents "light mode enabled".
    pub toggle_id: String,
    /// `localStorage` key holding `"dark"` or `"light"`.
    pub storage_key: String,
    /// Attribute on `<html>` that the stylesheet keys dark styles on.
    pub attribute: String,
    /// Media query used for the system fallback.
    pub dark_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_id: "dark-mode-toggle".to_string(),
            storage_key: "theme".to_string(),
            attribute: "data-theme".to_string(),
            dark_query: "(prefers-color-scheme: dark)".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        serde_json::from_str(raw).map_err(|e| ThemeError::Config(e.to_string()))
    }

    /// Resolve the config from optional embedded JSON, falling back to defaults
    /// when it is absent, blank or malformed.
    pub fn from_embedded(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(json) => Self::from_json(json).unwrap_or_else(|e| {
                log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_markup() {
        let config = ThemeConfig::default();
        assert_eq!(config.toggle_id, "dark-mode-toggle");
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.attribute, "data-theme");
        assert_eq!(config.dark_query, "(prefers-color-scheme: dark)");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = ThemeConfig::from_json(r#"{"storage_key": "blog-theme"}"#).unwrap();
        assert_eq!(config.storage_key, "blog-theme");
        assert_eq!(config.toggle_id, "dark-mode-toggle");
        assert_eq!(config.attribute, "data-theme");
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = ThemeConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
        assert!(err.to_string().starts_with("Config error:"));
    }

    #[test]
    fn test_embedded_falls_back_to_defaults() {
        assert_eq!(ThemeConfig::from_embedded(None), ThemeConfig::default());
        assert_eq!(ThemeConfig::from_embedded(Some("  \n ")), ThemeConfig::default());
        assert_eq!(ThemeConfig::from_embedded(Some("[1, 2")), ThemeConfig::default());
    }

    #[test]
    fn test_embedded_override_applies() {
        let config = ThemeConfig::from_embedded(Some(r#" {"toggle_id": "switch"} "#));
        assert_eq!(config.toggle_id, "switch");
    }
}
