//! Scheme value types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The user's preferred color mode, as reported by the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Returns the human-readable name shown in the selector.
    pub fn label(self) -> &'static str {
        match self {
            ColorMode::Light => "Light",
            ColorMode::Dark => "Dark",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A color scheme the user can select.
///
/// The string form of each variant is the value written to storage and to
/// the document's `color-scheme` property:
///
/// | Variant | Value |
/// |---------|-------|
/// | `Auto`  | `"light dark"` |
/// | `Light` | `"light"` |
/// | `Dark`  | `"dark"` |
///
/// # Example
///
/// ```rust
/// use colorscheme::{ColorMode, ColorScheme};
///
/// let scheme: ColorScheme = "light dark".parse().unwrap();
/// assert_eq!(scheme, ColorScheme::Auto);
/// assert_eq!(scheme.resolve(ColorMode::Dark), ColorMode::Dark);
/// assert_eq!(ColorScheme::Light.resolve(ColorMode::Dark), ColorMode::Light);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    /// Defer to the system preference.
    #[default]
    Auto,
    Light,
    Dark,
}

impl ColorScheme {
    /// All schemes in selector order.
    pub const ALL: [ColorScheme; 3] = [ColorScheme::Auto, ColorScheme::Light, ColorScheme::Dark];

    /// Returns the stored/CSS value for this scheme.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Auto => "light dark",
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    /// Resolves this scheme against the system preference.
    pub fn resolve(self, system: ColorMode) -> ColorMode {
        match self {
            ColorScheme::Auto => system,
            ColorScheme::Light => ColorMode::Light,
            ColorScheme::Dark => ColorMode::Dark,
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ColorMode> for ColorScheme {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => ColorScheme::Light,
            ColorMode::Dark => ColorScheme::Dark,
        }
    }
}

/// Error returned when a string is not one of the three scheme values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color scheme '{value}': expected \"light dark\", \"light\" or \"dark\"")]
pub struct ParseSchemeError {
    pub value: String,
}

impl FromStr for ColorScheme {
    type Err = ParseSchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light dark" => Ok(ColorScheme::Auto),
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => Err(ParseSchemeError {
                value: other.to_string(),
            }),
        }
    }
}

impl Serialize for ColorScheme {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ColorScheme {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Whether the user has chosen a scheme that supersedes the system preference.
///
/// Selecting "Automatic" after an override is recorded as
/// `Overridden(ColorScheme::Auto)`; it persists the same value as a fresh
/// visit with no override would resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preference {
    #[default]
    NoOverride,
    Overridden(ColorScheme),
}

impl Preference {
    /// The scheme the selector should display.
    pub fn scheme(self) -> ColorScheme {
        match self {
            Preference::NoOverride => ColorScheme::Auto,
            Preference::Overridden(scheme) => scheme,
        }
    }

    /// The stored override, if any.
    pub fn user_override(self) -> Option<ColorScheme> {
        match self {
            Preference::NoOverride => None,
            Preference::Overridden(scheme) => Some(scheme),
        }
    }

    /// Resolves the effective color mode against the system preference.
    pub fn resolve(self, system: ColorMode) -> ColorMode {
        self.scheme().resolve(system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_parse_exact_values() {
        assert_eq!("light dark".parse::<ColorScheme>(), Ok(ColorScheme::Auto));
        assert_eq!("light".parse::<ColorScheme>(), Ok(ColorScheme::Light));
        assert_eq!("dark".parse::<ColorScheme>(), Ok(ColorScheme::Dark));
    }

    #[test]
    fn test_scheme_parse_rejects_other_strings() {
        let err = "Dark".parse::<ColorScheme>().unwrap_err();
        assert_eq!(err.value, "Dark");
        assert!(err.to_string().contains("'Dark'"));
        assert!("dark light".parse::<ColorScheme>().is_err());
        assert!("".parse::<ColorScheme>().is_err());
    }

    #[test]
    fn test_scheme_display_matches_stored_value() {
        for scheme in ColorScheme::ALL {
            assert_eq!(scheme.to_string(), scheme.as_str());
            assert_eq!(scheme.as_str().parse::<ColorScheme>(), Ok(scheme));
        }
    }

    #[test]
    fn test_resolve_override_wins() {
        assert_eq!(ColorScheme::Light.resolve(ColorMode::Dark), ColorMode::Light);
        assert_eq!(ColorScheme::Dark.resolve(ColorMode::Light), ColorMode::Dark);
        assert_eq!(ColorScheme::Auto.resolve(ColorMode::Dark), ColorMode::Dark);
        assert_eq!(ColorScheme::Auto.resolve(ColorMode::Light), ColorMode::Light);
    }

    #[test]
    fn test_preference_defaults_to_auto() {
        let pref = Preference::default();
        assert_eq!(pref, Preference::NoOverride);
        assert_eq!(pref.scheme(), ColorScheme::Auto);
        assert_eq!(pref.user_override(), None);
        assert_eq!(pref.resolve(ColorMode::Dark), ColorMode::Dark);
    }

    #[test]
    fn test_preference_overridden_auto_follows_system() {
        let pref = Preference::Overridden(ColorScheme::Auto);
        assert_eq!(pref.user_override(), Some(ColorScheme::Auto));
        assert_eq!(pref.resolve(ColorMode::Light), ColorMode::Light);
    }

    #[test]
    fn test_color_mode_label() {
        assert_eq!(ColorMode::Dark.to_string(), "Dark");
        assert_eq!(ColorScheme::from(ColorMode::Light), ColorScheme::Light);
    }

    #[test]
    fn test_scheme_serde_uses_css_value() {
        let json = serde_json::to_string(&ColorScheme::Auto).unwrap();
        assert_eq!(json, "\"light dark\"");
        let back: ColorScheme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(back, ColorScheme::Dark);
        assert!(serde_json::from_str::<ColorScheme>("\"blue\"").is_err());
    }
}
