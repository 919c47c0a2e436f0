use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use button_web::props::{parse_or_default, ButtonState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_listen")]
    pub listen: String,
    /// Inline the bundled stylesheet into the page.
    #[serde(default = "default_true")]
    pub stylesheet: bool,
    #[serde(default = "default_buttons")]
    pub buttons: Vec<ButtonEntry>,
}

/// One showcased button. Enumerated props stay as strings here so that a
/// typo is reported and replaced by the default instead of failing the load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ButtonEntry {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub variant: String,
    #[serde(default)]
    pub size: String,
    #[serde(default, rename = "type")]
    pub button_type: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub loading: bool,
    #[serde(default)]
    pub full_width: bool,
    #[serde(default)]
    pub class: String,
}

fn default_title() -> String {
    "Button gallery".into()
}

fn default_listen() -> String {
    "127.0.0.1:3000".into()
}

fn default_true() -> bool {
    true
}

fn entry(label: &str, variant: &str, size: &str) -> ButtonEntry {
    ButtonEntry {
        label: label.into(),
        variant: variant.into(),
        size: size.into(),
        ..Default::default()
    }
}

fn default_buttons() -> Vec<ButtonEntry> {
    let mut buttons = Vec::new();
    for variant in ["primary", "success", "danger"] {
        for size in ["small", "medium", "large"] {
            buttons.push(entry(&format!("{variant} {size}"), variant, size));
        }
    }
    buttons.push(ButtonEntry {
        disabled: true,
        ..entry("Disabled", "primary", "medium")
    });
    buttons.push(ButtonEntry {
        loading: true,
        ..entry("Submit Order", "success", "medium")
    });
    buttons.push(ButtonEntry {
        full_width: true,
        button_type: "submit".into(),
        ..entry("Full width submit", "primary", "large")
    });
    buttons
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            listen: default_listen(),
            stylesheet: true,
            buttons: default_buttons(),
        }
    }
}

impl GalleryConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl ButtonEntry {
    /// Typed props for rendering. Unknown names are warned about and
    /// replaced by defaults; the label is checked by the component itself.
    pub fn resolve(&self) -> ButtonState {
        ButtonState {
            button_type: parse_or_default(&self.button_type),
            disabled: self.disabled,
            loading: self.loading,
            full_width: self.full_width,
            size: parse_or_default(&self.size),
            variant: parse_or_default(&self.variant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use button_web::{ButtonSize, ButtonType, ButtonVariant};

    #[test]
    fn test_default_config() {
        let config = GalleryConfig::default();
        assert_eq!(config.listen, "127.0.0.1:3000");
        assert!(config.stylesheet);
        assert_eq!(config.buttons.len(), 12);
        assert!(config.buttons.iter().any(|b| b.loading));
        assert!(config.buttons.iter().any(|b| b.disabled));
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = GalleryConfig::parse("").unwrap();
        assert_eq!(config.title, "Button gallery");
        assert_eq!(config.buttons.len(), GalleryConfig::default().buttons.len());
    }

    #[test]
    fn test_parse_buttons() {
        let toml = r#"
            title = "Checkout"
            listen = "0.0.0.0:8080"

            [[buttons]]
            label = "Pay"
            variant = "danger"
            size = "large"
            type = "submit"
            full_width = true

            [[buttons]]
            label = "Cancel"
            disabled = true
        "#;
        let config = GalleryConfig::parse(toml).unwrap();
        assert_eq!(config.title, "Checkout");
        assert_eq!(config.buttons.len(), 2);

        let pay = config.buttons[0].resolve();
        assert_eq!(pay.variant, ButtonVariant::Danger);
        assert_eq!(pay.size, ButtonSize::Large);
        assert_eq!(pay.button_type, ButtonType::Submit);
        assert!(pay.full_width);

        let cancel = config.buttons[1].resolve();
        assert_eq!(cancel, ButtonState { disabled: true, ..Default::default() });
    }

    #[test]
    fn test_unknown_names_fall_back() {
        let entry = ButtonEntry {
            label: "Odd".into(),
            variant: "warning".into(),
            size: "huge".into(),
            button_type: "link".into(),
            ..Default::default()
        };
        assert_eq!(entry.resolve(), ButtonState::default());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(GalleryConfig::parse("buttons = 3").is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = GalleryConfig::load_from_file(Path::new("/nonexistent/gallery.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
