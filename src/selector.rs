//! The three-option color scheme selector.

use crate::document::Element;
use crate::scheme::{ColorMode, ColorScheme};

/// Id under which the selector is mounted in a [`Document`](crate::Document).
pub const SELECTOR_ID: &str = "color-scheme";

/// Default text preceding the select box.
pub const DEFAULT_LABEL: &str = "Theme:";

/// One entry of the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    pub value: ColorScheme,
    pub text: String,
}

/// The selector control model.
///
/// Offers exactly three options: "Automatic (<system mode>)", "Light" and
/// "Dark", with the scheme's stored value as each option's value. The
/// displayed value is tracked here and reflected in [`to_element`](Self::to_element)
/// as the `selected` option.
///
/// # Example
///
/// ```rust
/// use colorscheme::{ColorMode, ColorScheme, SchemeSelector};
///
/// let selector = SchemeSelector::builder()
///     .system(ColorMode::Dark)
///     .value(ColorScheme::Light)
///     .build();
///
/// assert_eq!(selector.options()[0].text, "Automatic (Dark)");
/// assert_eq!(selector.value(), ColorScheme::Light);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeSelector {
    label: String,
    system: ColorMode,
    value: ColorScheme,
}

impl SchemeSelector {
    pub fn builder() -> SchemeSelectorBuilder {
        SchemeSelectorBuilder::default()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The system mode named by the automatic option.
    pub fn system(&self) -> ColorMode {
        self.system
    }

    /// The currently displayed value.
    pub fn value(&self) -> ColorScheme {
        self.value
    }

    pub fn set_value(&mut self, value: ColorScheme) {
        self.value = value;
    }

    pub fn options(&self) -> [SelectorOption; 3] {
        ColorScheme::ALL.map(|value| SelectorOption {
            value,
            text: self.option_text(value),
        })
    }

    fn option_text(&self, value: ColorScheme) -> String {
        match value {
            ColorScheme::Auto => format!("Automatic ({})", self.system),
            ColorScheme::Light => ColorMode::Light.label().to_string(),
            ColorScheme::Dark => ColorMode::Dark.label().to_string(),
        }
    }

    /// Builds the control's markup: a label wrapping a select box.
    pub fn to_element(&self) -> Element {
        let select = self
            .options()
            .into_iter()
            .fold(Element::new("select"), |select, option| {
                let mut el = Element::new("option")
                    .attr("value", option.value.as_str())
                    .text(&option.text);
                if option.value == self.value {
                    el = el.flag("selected");
                }
                select.child(el)
            });

        Element::new("label")
            .attr("class", "color-scheme")
            .text(&format!("{} ", self.label))
            .child(select)
    }
}

/// Builder for [`SchemeSelector`].
#[derive(Debug, Clone)]
pub struct SchemeSelectorBuilder {
    label: String,
    system: ColorMode,
    value: ColorScheme,
}

impl Default for SchemeSelectorBuilder {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            system: ColorMode::Light,
            value: ColorScheme::Auto,
        }
    }
}

impl SchemeSelectorBuilder {
    pub fn label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn system(mut self, system: ColorMode) -> Self {
        self.system = system;
        self
    }

    pub fn value(mut self, value: ColorScheme) -> Self {
        self.value = value;
        self
    }

    pub fn build(self) -> SchemeSelector {
        SchemeSelector {
            label: self.label,
            system: self.system,
            value: self.value,
        }
    }
}
