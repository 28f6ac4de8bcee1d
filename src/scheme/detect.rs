//! System color-scheme detection.

use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;

use super::value::ColorMode;

/// Answers "which color mode does the environment prefer?".
///
/// Returns `None` when the query is unavailable.
pub type SchemeDetector = fn() -> Option<ColorMode>;

static SCHEME_DETECTOR: Lazy<Mutex<SchemeDetector>> = Lazy::new(|| Mutex::new(os_scheme_detector));

/// Replaces the process-wide system preference query.
///
/// Every controller built without [`ThemeController::with_detector`](crate::ThemeController::with_detector)
/// asks this detector during `initialize`. A detector returning `None`
/// reports the query as unavailable, and the preference falls back to
/// [`ColorMode::Light`]. The CLI's `--system` flag installs a fixed answer
/// through here.
///
/// # Example
///
/// ```rust
/// use colorscheme::{detect_system_preference, set_scheme_detector, ColorMode};
///
/// set_scheme_detector(|| Some(ColorMode::Dark));
/// assert_eq!(detect_system_preference(), ColorMode::Dark);
///
/// // An unavailable query falls back to light.
/// set_scheme_detector(|| None);
/// assert_eq!(detect_system_preference(), ColorMode::Light);
/// ```
pub fn set_scheme_detector(detector: SchemeDetector) {
    let mut guard = SCHEME_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Runs the process-wide detector, treating an unavailable query as light.
pub fn detect_system_preference() -> ColorMode {
    let detector = *SCHEME_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    run_detector(detector)
}

pub(crate) fn run_detector(detector: SchemeDetector) -> ColorMode {
    match detector() {
        Some(mode) => mode,
        None => {
            tracing::debug!("color scheme query unavailable, assuming light");
            ColorMode::Light
        }
    }
}

fn os_scheme_detector() -> Option<ColorMode> {
    match detect_os_theme() {
        OsThemeMode::Dark => Some(ColorMode::Dark),
        OsThemeMode::Light => Some(ColorMode::Light),
    }
}
