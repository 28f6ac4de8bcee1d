//! Color scheme values and system preference detection.
//!
//! This module provides:
//!
//! - [`ColorMode`]: The light or dark appearance reported by the host
//! - [`ColorScheme`]: A selectable scheme value (automatic, light or dark)
//! - [`Preference`]: Whether the user has overridden the system preference
//! - [`set_scheme_detector`] / [`detect_system_preference`]: The environment query
//!
//! Scheme values use the same strings as the CSS `color-scheme` property,
//! so a stored preference can be applied to a document without translation.

mod detect;
mod value;

pub(crate) use detect::run_detector;
pub use detect::{detect_system_preference, set_scheme_detector, SchemeDetector};
pub use value::{ColorMode, ColorScheme, ParseSchemeError, Preference};
