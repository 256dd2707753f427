// File: src/config.rs
// Purpose: Validator options, from a JS object or a TOML file

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Validator configuration
///
/// Keys are camelCase so the same shape works as a JavaScript options
/// object and as a TOML table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorConfig {
    /// Watch fields and run their constraints (`validator` in older configs)
    #[serde(default = "default_true", alias = "validator")]
    pub enabled: bool,

    /// Send tracing output to the console
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Warn about unknown constraint names
    #[serde(default = "default_false")]
    pub dev_diagnostics: bool,

    /// Class toggled on invalid fields
    #[serde(default = "default_invalid_class")]
    pub invalid_class: String,

    /// Class of the inline alert elements
    #[serde(default = "default_alert_class")]
    pub alert_class: String,

    /// Message for required fields without their own `data-alert`
    #[serde(default)]
    pub default_field_alert_text: Option<String>,

    /// Page-level message when required fields block navigation
    #[serde(default = "default_empty_fields_alert_text")]
    pub empty_fields_alert_text: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            debug: default_false(),
            dev_diagnostics: default_false(),
            invalid_class: default_invalid_class(),
            alert_class: default_alert_class(),
            default_field_alert_text: None,
            empty_fields_alert_text: default_empty_fields_alert_text(),
        }
    }
}

impl ValidatorConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse validator config")
    }

    /// Load from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Whether unknown constraints should be reported
    pub fn diagnostics_enabled(&self) -> bool {
        self.dev_diagnostics || self.debug
    }
}

// Default values
fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

fn default_invalid_class() -> String {
    "invalid".to_string()
}

fn default_alert_class() -> String {
    "form-part-input-alert".to_string()
}

fn default_empty_fields_alert_text() -> String {
    "Please fill in required inputs to go to the next page".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = ValidatorConfig::default();
        assert!(config.enabled);
        assert!(!config.debug);
        assert_eq!(config.invalid_class, "invalid");
        assert_eq!(config.alert_class, "form-part-input-alert");
        assert_eq!(config.default_field_alert_text, None);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(
            ValidatorConfig::from_toml_str("").unwrap(),
            ValidatorConfig::default()
        );
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            debug = true
            invalidClass = "is-invalid"
            defaultFieldAlertText = "Required"
        "#;

        let config = ValidatorConfig::from_toml_str(toml).unwrap();
        assert!(config.debug);
        assert!(config.diagnostics_enabled());
        assert_eq!(config.invalid_class, "is-invalid");
        assert_eq!(config.default_field_alert_text.as_deref(), Some("Required"));
        assert_eq!(config.alert_class, "form-part-input-alert");
    }

    #[test]
    fn test_parse_js_style_object() {
        let json = r#"{ "validator": false, "emptyFieldsAlertText": "Fill me" }"#;

        let config: ValidatorConfig = serde_json::from_str(json).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.empty_fields_alert_text, "Fill me");
    }

    #[test]
    fn test_invalid_toml() {
        let err = ValidatorConfig::from_toml_str("debug = \"yes\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse validator config"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ValidatorConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
