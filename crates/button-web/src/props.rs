use std::fmt;
use std::str::FromStr;

use tracing::warn;

/// A prop value outside the accepted set. Only ever logged; rendering
/// falls back to the default for that prop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropError {
    #[error("invalid button type {0:?}, expected one of: button, submit, reset")]
    Type(String),
    #[error("invalid button size {0:?}, expected one of: small, medium, large")]
    Size(String),
    #[error("invalid button variant {0:?}, expected one of: primary, success, danger")]
    Variant(String),
    #[error("button has no label or children")]
    MissingContent,
}

/// Native `type` attribute of the rendered `<button>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

impl FromStr for ButtonType {
    type Err = PropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "button" => Ok(Self::Button),
            "submit" => Ok(Self::Submit),
            "reset" => Ok(Self::Reset),
            other => Err(PropError::Type(other.to_string())),
        }
    }
}

/// Padding/scale category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl FromStr for ButtonSize {
    type Err = PropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(PropError::Size(other.to_string())),
        }
    }
}

/// Color scheme category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Success,
    Danger,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 3] = [Self::Primary, Self::Success, Self::Danger];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

impl FromStr for ButtonVariant {
    type Err = PropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Self::Primary),
            "success" => Ok(Self::Success),
            "danger" => Ok(Self::Danger),
            other => Err(PropError::Variant(other.to_string())),
        }
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display!(ButtonType, ButtonSize, ButtonVariant);

/// Snapshot of every prop that feeds class, ARIA and style derivation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub button_type: ButtonType,
    pub disabled: bool,
    pub loading: bool,
    pub full_width: bool,
    pub size: ButtonSize,
    pub variant: ButtonVariant,
}

impl ButtonState {
    /// Clicks are swallowed while disabled or busy.
    pub fn is_inert(&self) -> bool {
        self.disabled || self.loading
    }
}

/// Parse a string-typed prop, warning and falling back to the default
/// when the value is not one of the accepted names.
pub fn parse_or_default<T>(raw: &str) -> T
where
    T: FromStr<Err = PropError> + Default,
{
    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("{e}; using default");
            T::default()
        }
    }
}

/// Advisory check that a button has something to show. Never blocks rendering.
pub fn check_content(label: &str, has_children: bool) -> Result<(), PropError> {
    if label.trim().is_empty() && !has_children {
        warn!("{}", PropError::MissingContent);
        return Err(PropError::MissingContent);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = ButtonState::default();
        assert_eq!(state.button_type, ButtonType::Button);
        assert_eq!(state.size, ButtonSize::Medium);
        assert_eq!(state.variant, ButtonVariant::Primary);
        assert!(!state.disabled);
        assert!(!state.loading);
        assert!(!state.full_width);
    }

    #[test]
    fn test_parse_known_names() {
        assert_eq!("submit".parse::<ButtonType>(), Ok(ButtonType::Submit));
        assert_eq!("reset".parse::<ButtonType>(), Ok(ButtonType::Reset));
        assert_eq!("large".parse::<ButtonSize>(), Ok(ButtonSize::Large));
        assert_eq!("danger".parse::<ButtonVariant>(), Ok(ButtonVariant::Danger));
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!(
            "link".parse::<ButtonType>(),
            Err(PropError::Type("link".into()))
        );
        assert_eq!("xl".parse::<ButtonSize>(), Err(PropError::Size("xl".into())));
        assert_eq!(
            "Primary".parse::<ButtonVariant>(),
            Err(PropError::Variant("Primary".into()))
        );
    }

    #[test]
    fn test_parse_or_default_falls_back() {
        assert_eq!(parse_or_default::<ButtonVariant>("warning"), ButtonVariant::Primary);
        assert_eq!(parse_or_default::<ButtonSize>(" small "), ButtonSize::Small);
        assert_eq!(parse_or_default::<ButtonType>(""), ButtonType::Button);
    }

    #[test]
    fn test_check_content() {
        assert!(check_content("Submit", false).is_ok());
        assert!(check_content("", true).is_ok());
        assert_eq!(check_content("  ", false), Err(PropError::MissingContent));
    }

    #[test]
    fn test_inert() {
        let mut state = ButtonState::default();
        assert!(!state.is_inert());
        state.loading = true;
        assert!(state.is_inert());
        state = ButtonState { disabled: true, ..Default::default() };
        assert!(state.is_inert());
    }

    #[test]
    fn test_display_matches_parse() {
        for variant in ButtonVariant::ALL {
            assert_eq!(variant.to_string().parse::<ButtonVariant>(), Ok(variant));
        }
    }
}
