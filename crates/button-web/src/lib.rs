//! Leptos button components.
//!
//! [`BasicButton`] is a plain clickable element styled from its `disabled`
//! flag. [`Button`] adds variants, sizes, a loading state, ARIA attributes
//! and memoized derivations. The derivation helpers are plain functions so
//! they can be used and tested without a DOM.

pub mod aria;
pub mod click;
pub mod components;
pub mod props;
pub mod styling;

pub use components::{BasicButton, Button};
pub use props::{ButtonSize, ButtonState, ButtonType, ButtonVariant, PropError};
