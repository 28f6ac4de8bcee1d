//! Theme preference controller.
//!
//! [`ThemeController`] keeps three things consistent: the document's
//! `color-scheme`, the persisted user override, and the selector control.
//!
//! # Lifecycle
//!
//! 1. [`initialize`](ThemeController::initialize) runs once per page load.
//!    It reads the system preference and the stored override, mounts the
//!    selector as the body's first child, and applies the override if one
//!    exists. It never writes to storage.
//! 2. [`on_user_select`](ThemeController::on_user_select) runs on every
//!    change of the selector. It applies the new scheme immediately, then
//!    persists it.
//!
//! Nothing here fails loudly. Storage that cannot be read, a stored value
//! that is not a scheme, or a missing system query all degrade to
//! "Automatic"; a failed write is logged and the applied scheme stays.
//!
//! # Example
//!
//! ```rust
//! use colorscheme::{ColorMode, ColorScheme, MemoryStore, Page, ThemeController};
//!
//! let mut controller = ThemeController::new(MemoryStore::new(), Page::new("Home"))
//!     .with_detector(|| Some(ColorMode::Dark));
//! controller.initialize();
//! assert_eq!(controller.effective_scheme(), ColorMode::Dark);
//!
//! controller.on_user_select(ColorScheme::Light);
//! assert_eq!(controller.effective_scheme(), ColorMode::Light);
//! assert_eq!(controller.selector().value(), ColorScheme::Light);
//! ```

use crate::config::{SiteConfig, DEFAULT_STORAGE_KEY};
use crate::document::Document;
use crate::scheme::{
    detect_system_preference, run_detector, ColorMode, ColorScheme, ParseSchemeError, Preference,
    SchemeDetector,
};
use crate::selector::{SchemeSelector, DEFAULT_LABEL, SELECTOR_ID};
use crate::storage::PreferenceStore;

/// Owns the store and document for one page load.
pub struct ThemeController<S, D> {
    store: S,
    document: D,
    storage_key: String,
    label: String,
    detector: Option<SchemeDetector>,
    system: ColorMode,
    preference: Preference,
    selector: SchemeSelector,
}

impl<S: PreferenceStore, D: Document> ThemeController<S, D> {
    /// Creates a controller with the default storage key and label.
    ///
    /// The system preference comes from the process-wide detector
    /// (see [`set_scheme_detector`](crate::set_scheme_detector)) unless
    /// [`with_detector`](Self::with_detector) is used.
    pub fn new(store: S, document: D) -> Self {
        Self {
            store,
            document,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            label: DEFAULT_LABEL.to_string(),
            detector: None,
            system: ColorMode::Light,
            preference: Preference::NoOverride,
            selector: SchemeSelector::builder().build(),
        }
    }

    /// Creates a controller using the storage key and label from `config`.
    pub fn from_config(config: &SiteConfig, store: S, document: D) -> Self {
        Self::new(store, document)
            .with_storage_key(&config.storage_key)
            .with_label(&config.selector_label)
    }

    pub fn with_storage_key(mut self, key: &str) -> Self {
        self.storage_key = key.to_string();
        self
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    /// Uses `detector` for this controller instead of the process-wide one.
    pub fn with_detector(mut self, detector: SchemeDetector) -> Self {
        self.detector = Some(detector);
        self
    }

    /// Reads the environment and storage, mounts the selector, and applies
    /// any stored override.
    ///
    /// Calling it again rebuilds the same state from the same inputs and
    /// replaces the mounted selector rather than adding a second one.
    pub fn initialize(&mut self) {
        self.system = match self.detector {
            Some(detector) => run_detector(detector),
            None => detect_system_preference(),
        };
        self.preference = match self.load_override() {
            Some(scheme) => Preference::Overridden(scheme),
            None => Preference::NoOverride,
        };

        match self.preference {
            Preference::Overridden(scheme) => {
                tracing::info!(scheme = scheme.as_str(), "applying stored color scheme");
                self.document.set_color_scheme(scheme);
            }
            Preference::NoOverride => self.document.clear_color_scheme(),
        }

        self.selector = SchemeSelector::builder()
            .label(&self.label)
            .system(self.system)
            .value(self.preference.scheme())
            .build();
        self.document
            .mount_control(SELECTOR_ID, self.selector.to_element());

        tracing::debug!(
            system = %self.system,
            effective = %self.effective_scheme(),
            overridden = self.preference.user_override().is_some(),
            "color scheme initialized"
        );
    }

    /// Handles a selection from the control.
    ///
    /// The scheme is applied and shown before it is persisted. Returns
    /// whether the write reached storage; a failed write is logged and
    /// otherwise ignored.
    pub fn on_user_select(&mut self, scheme: ColorScheme) -> bool {
        self.preference = Preference::Overridden(scheme);
        self.document.set_color_scheme(scheme);
        self.selector.set_value(scheme);
        self.document
            .mount_control(SELECTOR_ID, self.selector.to_element());

        match self.store.set(&self.storage_key, scheme.as_str()) {
            Ok(()) => {
                tracing::debug!(key = %self.storage_key, scheme = scheme.as_str(), "persisted color scheme");
                true
            }
            Err(err) => {
                tracing::warn!(key = %self.storage_key, error = %err, "failed to persist color scheme");
                false
            }
        }
    }

    /// Handles a raw value from the control's change event.
    ///
    /// Values outside the three scheme strings are rejected without
    /// touching any state.
    pub fn on_control_input(&mut self, raw: &str) -> Result<bool, ParseSchemeError> {
        let scheme = raw.parse::<ColorScheme>()?;
        Ok(self.on_user_select(scheme))
    }

    fn load_override(&self) -> Option<ColorScheme> {
        let raw = match self.store.get(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::debug!(key = %self.storage_key, error = %err, "color scheme storage unreadable");
                return None;
            }
        };
        match raw.parse() {
            Ok(scheme) => Some(scheme),
            Err(err) => {
                tracing::warn!(key = %self.storage_key, error = %err, "ignoring stored color scheme");
                None
            }
        }
    }
}

impl<S, D> ThemeController<S, D> {
    /// The system preference read by the last `initialize`.
    pub fn system_preference(&self) -> ColorMode {
        self.system
    }

    pub fn preference(&self) -> Preference {
        self.preference
    }

    pub fn user_override(&self) -> Option<ColorScheme> {
        self.preference.user_override()
    }

    /// The color mode actually rendered.
    pub fn effective_scheme(&self) -> ColorMode {
        self.preference.resolve(self.system)
    }

    pub fn selector(&self) -> &SchemeSelector {
        &self.selector
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Gives back the store and document.
    pub fn into_parts(self) -> (S, D) {
        (self.store, self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Page;
    use crate::storage::MemoryStore;

    fn dark_system() -> Option<ColorMode> {
        Some(ColorMode::Dark)
    }

    fn controller(store: MemoryStore) -> ThemeController<MemoryStore, Page> {
        ThemeController::new(store, Page::new("Test")).with_detector(dark_system)
    }

    #[test]
    fn test_initialize_without_override() {
        let mut c = controller(MemoryStore::new());
        c.initialize();

        assert_eq!(c.preference(), Preference::NoOverride);
        assert_eq!(c.effective_scheme(), ColorMode::Dark);
        assert_eq!(c.document().color_scheme(), None);
        assert_eq!(c.selector().value(), ColorScheme::Auto);
        assert_eq!(c.store().writes(), 0);
    }

    #[test]
    fn test_initialize_applies_override() {
        let mut c = controller(MemoryStore::new().with_entry("colorScheme", "light"));
        c.initialize();

        assert_eq!(c.user_override(), Some(ColorScheme::Light));
        assert_eq!(c.effective_scheme(), ColorMode::Light);
        assert_eq!(c.document().color_scheme(), Some(ColorScheme::Light));
        assert_eq!(c.selector().value(), ColorScheme::Light);
    }

    #[test]
    fn test_selector_mounted_with_current_value() {
        let mut c = controller(MemoryStore::new().with_entry("colorScheme", "dark"));
        c.initialize();

        let control = c.document().control(SELECTOR_ID).unwrap();
        let selected: Vec<_> = control
            .find_all("option")
            .into_iter()
            .filter(|o| o.has_attr("selected"))
            .map(|o| o.attr_value("value"))
            .collect();
        assert_eq!(selected, [Some("dark")]);
    }

    #[test]
    fn test_garbage_override_ignored() {
        let mut c = controller(MemoryStore::new().with_entry("colorScheme", "purple"));
        c.initialize();
        assert_eq!(c.preference(), Preference::NoOverride);
        assert_eq!(c.document().color_scheme(), None);
    }

    #[test]
    fn test_unavailable_storage_degrades_to_auto() {
        let mut c = controller(MemoryStore::unavailable());
        c.initialize();
        assert_eq!(c.preference(), Preference::NoOverride);
        assert_eq!(c.effective_scheme(), ColorMode::Dark);

        // The selection still applies for this session
        assert!(!c.on_user_select(ColorScheme::Light));
        assert_eq!(c.document().color_scheme(), Some(ColorScheme::Light));
        assert_eq!(c.selector().value(), ColorScheme::Light);
    }

    #[test]
    fn test_unavailable_detector_is_light() {
        let mut c = ThemeController::new(MemoryStore::new(), Page::new("Test"))
            .with_detector(|| None);
        c.initialize();
        assert_eq!(c.system_preference(), ColorMode::Light);
        assert_eq!(c.selector().options()[0].text, "Automatic (Light)");
    }

    #[test]
    fn test_select_persists_under_key() {
        let mut c = controller(MemoryStore::new()).with_storage_key("scheme");
        c.initialize();
        assert!(c.on_user_select(ColorScheme::Dark));

        let (store, page) = c.into_parts();
        assert_eq!(store.get("scheme").unwrap().as_deref(), Some("dark"));
        assert_eq!(store.get("colorScheme").unwrap(), None);
        assert_eq!(page.color_scheme(), Some(ColorScheme::Dark));
    }

    #[test]
    fn test_select_auto_stores_light_dark() {
        let mut c = controller(MemoryStore::new().with_entry("colorScheme", "light"));
        c.initialize();
        c.on_user_select(ColorScheme::Auto);

        assert_eq!(c.preference(), Preference::Overridden(ColorScheme::Auto));
        assert_eq!(c.effective_scheme(), ColorMode::Dark);
        assert_eq!(
            c.store().get("colorScheme").unwrap().as_deref(),
            Some("light dark")
        );
        assert_eq!(c.document().color_scheme(), Some(ColorScheme::Auto));
    }

    #[test]
    fn test_quota_failure_keeps_applied_scheme() {
        let mut c = controller(MemoryStore::new().with_quota(4));
        c.initialize();
        assert!(!c.on_user_select(ColorScheme::Dark));
        assert_eq!(c.effective_scheme(), ColorMode::Dark);
        assert_eq!(c.document().color_scheme(), Some(ColorScheme::Dark));
        assert_eq!(c.store().get("colorScheme").unwrap(), None);
    }

    #[test]
    fn test_control_input_rejects_unknown_value() {
        let mut c = controller(MemoryStore::new());
        c.initialize();
        let err = c.on_control_input("sepia").unwrap_err();
        assert_eq!(err.value, "sepia");
        assert_eq!(c.preference(), Preference::NoOverride);
        assert_eq!(c.store().writes(), 0);

        assert_eq!(c.on_control_input("light"), Ok(true));
        assert_eq!(c.selector().value(), ColorScheme::Light);
    }

    #[test]
    fn test_from_config_uses_label_and_key() {
        let config = SiteConfig {
            storage_key: "pref".into(),
            selector_label: "Look:".into(),
            ..SiteConfig::default()
        };
        let mut c = ThemeController::from_config(&config, MemoryStore::new(), Page::new("T"))
            .with_detector(dark_system);
        c.initialize();
        assert_eq!(c.storage_key(), "pref");
        assert_eq!(c.selector().label(), "Look:");
    }

    #[test]
    fn test_reinitialize_clears_stale_scheme() {
        let mut store = MemoryStore::new().with_entry("colorScheme", "dark");
        let mut c = ThemeController::new(&mut store, Page::new("Test")).with_detector(dark_system);
        c.initialize();
        let (_, page) = c.into_parts();
        assert_eq!(page.color_scheme(), Some(ColorScheme::Dark));

        store.clear();
        let mut c = ThemeController::new(&mut store, page).with_detector(dark_system);
        c.initialize();
        assert_eq!(c.document().color_scheme(), None);
        assert_eq!(c.document().control_count(SELECTOR_ID), 1);
    }
}
