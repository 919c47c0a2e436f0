use crate::props::ButtonState;

pub const LOADING_TEXT: &str = "Loading...";

/// Caller-supplied values that replace the generated ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AriaOverrides {
    pub tabindex: Option<String>,
    pub label: Option<String>,
}

/// Accessibility attributes derived from the button state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AriaState {
    pub disabled: bool,
    pub busy: bool,
    /// `Some("-1")` takes a disabled button out of the tab order.
    pub tabindex: Option<String>,
    /// Announced instead of the visible content while loading.
    pub label: Option<String>,
}

impl AriaState {
    pub fn derive(state: &ButtonState, label: &str) -> Self {
        Self::derive_with(state, label, &AriaOverrides::default())
    }

    pub fn derive_with(state: &ButtonState, label: &str, overrides: &AriaOverrides) -> Self {
        Self {
            disabled: state.is_inert(),
            busy: state.loading,
            tabindex: overrides
                .tabindex
                .clone()
                .or_else(|| state.disabled.then(|| "-1".to_string())),
            label: overrides
                .label
                .clone()
                .or_else(|| state.loading.then(|| loading_label(label))),
        }
    }

    pub fn aria_disabled(&self) -> &'static str {
        bool_str(self.disabled)
    }

    pub fn aria_busy(&self) -> &'static str {
        bool_str(self.busy)
    }
}

pub fn loading_label(label: &str) -> String {
    format!("Loading: {label}")
}

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
