//! # Colorscheme - Persisted light/dark theme selection for static sites
//!
//! `colorscheme` keeps a page's color scheme, the visitor's saved choice and
//! the theme selector in agreement, and builds the site's navigation bar.
//!
//! ## Core Concepts
//!
//! - [`ColorMode`]: The light or dark appearance the environment prefers
//! - [`ColorScheme`]: What the visitor can pick: automatic, light or dark
//! - [`ThemeController`]: Restores, applies and persists the visitor's choice
//! - [`PreferenceStore`]: Origin-scoped key-value storage ([`MemoryStore`], [`FileStore`])
//! - [`Document`]: The page the controller writes to ([`Page`] in memory)
//! - [`HtmlRenderer`]: Renders pages and element trees with escaping
//!
//! ## Quick Start
//!
//! ```rust
//! use colorscheme::{ColorMode, ColorScheme, HtmlRenderer, MemoryStore, Page, ThemeController};
//!
//! let mut controller = ThemeController::new(MemoryStore::new(), Page::new("Home"))
//!     .with_detector(|| Some(ColorMode::Dark));
//! controller.initialize();
//! assert_eq!(controller.selector().options()[0].text, "Automatic (Dark)");
//!
//! controller.on_user_select(ColorScheme::Light);
//!
//! let html = HtmlRenderer::new().unwrap().render_page(controller.document()).unwrap();
//! assert!(html.contains(r#"style="color-scheme: light""#));
//! ```
//!
//! ## Resolution
//!
//! The rendered scheme is the stored override when there is one and it is
//! not "Automatic"; otherwise it is the system preference. A missing or
//! unreadable store means no override, and an unavailable system query
//! means light.
//!
//! ## Navigation
//!
//! [`NavBar`] turns the configured page list into a `<nav>` element,
//! marking the current page and opening other origins in a new tab. Both
//! the page list and the storage key come from [`SiteConfig`].

mod config;
mod controller;
mod document;
mod nav;
mod render;
mod scheme;
mod selector;
mod storage;

pub use config::{ConfigError, SiteConfig, DEFAULT_ORIGIN, DEFAULT_STORAGE_KEY};
pub use controller::ThemeController;
pub use document::{Block, Document, Element, Node, Page};
pub use nav::{NavBar, NavLink};
pub use render::{HtmlRenderer, RenderError};
pub use scheme::{
    detect_system_preference, set_scheme_detector, ColorMode, ColorScheme, ParseSchemeError,
    Preference, SchemeDetector,
};
pub use selector::{
    SchemeSelector, SchemeSelectorBuilder, SelectorOption, DEFAULT_LABEL, SELECTOR_ID,
};
pub use storage::{FileStore, MemoryStore, PreferenceStore, StoreError};
