use std::fmt;

use crate::props::{ButtonState, ButtonVariant};

pub const BASE_CLASS: &str = "btn";

/// Ordered class tokens for the enhanced button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonClasses(Vec<String>);

impl ButtonClasses {
    /// Base, variant and size always; disabled, loading and full-width when
    /// set; caller classes last. Empty caller tokens are dropped.
    pub fn derive(state: &ButtonState, extra: Option<&str>) -> Self {
        let mut tokens = vec![
            BASE_CLASS.to_string(),
            format!("{BASE_CLASS}-{}", state.variant),
            format!("{BASE_CLASS}-{}", state.size),
        ];
        if state.disabled {
            tokens.push(format!("{BASE_CLASS}-disabled"));
        }
        if state.loading {
            tokens.push(format!("{BASE_CLASS}-loading"));
        }
        if state.full_width {
            tokens.push(format!("{BASE_CLASS}-full-width"));
        }
        if let Some(extra) = extra {
            tokens.extend(extra.split_whitespace().map(str::to_string));
        }
        Self(tokens)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens().any(|t| t == token)
    }
}

impl fmt::Display for ButtonClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Custom properties consumed by the stylesheet for background and hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorVars {
    pub primary: &'static str,
    pub hover: &'static str,
}

impl ColorVars {
    // Only Primary is distinguished; Success and Danger share the green pair.
    pub fn for_variant(variant: ButtonVariant) -> Self {
        match variant {
            ButtonVariant::Primary => Self {
                primary: "#007bff",
                hover: "#0056b3",
            },
            _ => Self {
                primary: "#28a745",
                hover: "#218838",
            },
        }
    }

    /// Declarations without a trailing `;`; the renderer adds its own.
    pub fn to_style(self) -> String {
        format!(
            "--btn-primary-color: {}; --btn-hover-color: {}",
            self.primary, self.hover
        )
    }
}

/// Inline style of the basic button.
pub fn basic_style(disabled: bool) -> String {
    let (background, cursor, opacity) = if disabled {
        ("#cccccc", "not-allowed", "0.6")
    } else {
        ("#007bff", "pointer", "1")
    };
    format!(
        "background-color: {background}; color: #ffffff; padding: 10px 20px; border: none; \
         border-radius: 4px; cursor: {cursor}; opacity: {opacity}"
    )
}
